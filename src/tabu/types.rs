//! Neighborhood candidates and move signatures.

use crate::tour::Tour;

/// Identifies a 2-opt move: reversal of positions `i..=j` with `i < j`.
///
/// Signatures refer to positions in the base tour, not to nodes, so the
/// same signature describes different edge exchanges on different tours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSignature {
    /// First reversed position.
    pub i: usize,
    /// Last reversed position.
    pub j: usize,
}

impl MoveSignature {
    /// Creates the signature for reversing `i..=j`.
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert!(i < j, "2-opt signature requires i < j");
        Self { i, j }
    }
}

/// A neighbor of the current tour.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The tour after applying the move.
    pub tour: Tour,
    /// The move that produced it.
    pub signature: MoveSignature,
    /// Cost of `tour`.
    pub cost: f64,
}
