//! Tabu Search (TS) over the 2-opt neighborhood.
//!
//! A single-solution trajectory metaheuristic. Each iteration moves to the
//! best admissible neighbor, even when it is worse, and remembers it in a
//! bounded tabu list so the search does not cycle straight back.
//!
//! # Key Types
//!
//! - [`TabuConfig`]: stop policy, threshold, memory policy and sampling
//! - [`TwoOptNeighborhood`]: sampled 2-opt neighbor generation
//! - [`TabuMemory`]: fixed-capacity FIFO tabu list
//! - [`TabuSearch`]: the run state, advanced one iteration at a time
//! - [`TabuRunner`]: drives a [`TabuSearch`] to completion
//!
//! # Memory policies
//!
//! - [`MemoryPolicy::Solutions`]: forbids revisiting recent tours
//! - [`MemoryPolicy::Moves`]: forbids repeating recent `(i, j)` moves,
//!   optionally overridden by the aspiration criterion
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod neighborhood;
mod runner;
mod select;
mod types;

pub use config::{MemoryPolicy, NeighborhoodSeeding, StopPolicy, TabuConfig};
pub use memory::TabuMemory;
pub use neighborhood::TwoOptNeighborhood;
pub use runner::{TabuResult, TabuRunner, TabuSearch};
pub use select::{
    select_admissible, select_best, select_with_move_memory, select_with_solution_memory,
};
pub use types::{Candidate, MoveSignature};
