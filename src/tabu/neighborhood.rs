//! Sampled 2-opt neighborhood.
//!
//! # Algorithm
//!
//! For every position pair `(i, j)` with `i < j`, in row-major order, draw
//! one Bernoulli trial with success probability `p`. On success the move is
//! skipped; otherwise the neighbor `tour[i..=j].reverse()` is built,
//! costed, and appended.
//!
//! The output order is the enumeration order, which the selectors rely on
//! for tie-breaking.
//!
//! # Complexity
//!
//! O(n³) per call: O(n²) moves, each copied and costed in O(n).
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::NeighborhoodSeeding;
use super::types::{Candidate, MoveSignature};
use crate::graph::Graph;
use crate::tour::Tour;

/// 2-opt neighborhood generator with random move discarding.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Graph;
/// use u_tsp::tabu::{NeighborhoodSeeding, TwoOptNeighborhood};
/// use u_tsp::tour::Tour;
///
/// let g = Graph::from_fn(4, |i, j| (i + j) as f64).unwrap();
/// let mut hood = TwoOptNeighborhood::new(0.0, 42, NeighborhoodSeeding::PerCall);
/// let candidates = hood.generate(&Tour::identity(4), &g);
/// assert_eq!(candidates.len(), 6);
/// assert_eq!((candidates[0].signature.i, candidates[0].signature.j), (0, 1));
/// ```
#[derive(Debug, Clone)]
pub struct TwoOptNeighborhood {
    discard_probability: f64,
    seed: u64,
    seeding: NeighborhoodSeeding,
    rng: StdRng,
}

impl TwoOptNeighborhood {
    /// Creates a generator.
    ///
    /// # Panics
    ///
    /// [`generate`](Self::generate) panics if `discard_probability` is
    /// outside `[0, 1]`; validate through
    /// [`TabuConfig::validate`](super::TabuConfig::validate) first.
    pub fn new(discard_probability: f64, seed: u64, seeding: NeighborhoodSeeding) -> Self {
        Self {
            discard_probability,
            seed,
            seeding,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Builds the sampled neighborhood of `base`.
    pub fn generate(&mut self, base: &Tour, graph: &Graph) -> Vec<Candidate> {
        if self.seeding == NeighborhoodSeeding::PerCall {
            self.rng = StdRng::seed_from_u64(self.seed);
        }

        let n = base.len();
        let mut candidates = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.rng.random_bool(self.discard_probability) {
                    continue;
                }
                let tour = base.two_opt(i, j);
                let cost = tour.cost(graph);
                candidates.push(Candidate {
                    tour,
                    signature: MoveSignature::new(i, j),
                    cost,
                });
            }
        }
        candidates
    }
}
