//! Heuristics for the symmetric Traveling Salesman Problem.
//!
//! Provides:
//!
//! - **Graph & tours**: a validated symmetric weight matrix ([`graph`]) and
//!   the [`tour::Tour`] permutation type with its cost.
//! - **Constructive heuristics** ([`construct`]): nearest neighbor,
//!   minimum spanning tree + DFS, and cheapest insertion, each usable as
//!   the initial tour of a local search.
//! - **Tabu Search** ([`tabu`]): 2-opt neighborhood with random move
//!   discarding, solution or move-signature tabu memory, optional
//!   aspiration, and iteration or stagnation stopping.
//!
//! # Example
//!
//! ```
//! use u_tsp::construct::NearestNeighbor;
//! use u_tsp::graph::Graph;
//! use u_tsp::tabu::{StopPolicy, TabuConfig, TabuRunner};
//!
//! let g = Graph::from_points(&[(0.0, 0.0), (3.0, 0.0), (3.0, 4.0), (0.0, 4.0)]).unwrap();
//! let config = TabuConfig::default()
//!     .with_stop_policy(StopPolicy::Stagnation)
//!     .with_threshold(20);
//! let result = TabuRunner::run(&g, &NearestNeighbor::new(0), &config).unwrap();
//! assert!((result.best_cost - 14.0).abs() < 1e-9);
//! ```
//!
//! # Logging
//!
//! Runs emit [`tracing`] events: one `debug` span per run, `debug` events
//! on every new best tour, and `trace` events per iteration. Install a
//! subscriber to see them.

pub mod construct;
pub mod error;
pub mod graph;
pub mod tabu;
pub mod tour;
