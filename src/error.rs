//! Error types.
//!
//! Errors are only raised at construction boundaries: building a
//! [`Graph`](crate::graph::Graph), validating a
//! [`TabuConfig`](crate::tabu::TabuConfig), or starting a search. Once a
//! search is running it cannot fail; empty neighborhoods and degenerate
//! graphs are ordinary outcomes.

use std::fmt;

/// Invalid [`Graph`](crate::graph::Graph) input.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A row has a different length than the number of rows.
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Expected length (number of rows).
        expected: usize,
    },
    /// A weight is negative, NaN, or infinite.
    InvalidWeight {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
        /// The rejected value.
        weight: f64,
    },
    /// `w[i][j] != w[j][i]`.
    Asymmetric {
        /// Row index.
        i: usize,
        /// Column index.
        j: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::NotSquare { row, len, expected } => write!(
                f,
                "weight matrix is not square: row {row} has {len} entries, expected {expected}"
            ),
            GraphError::InvalidWeight { i, j, weight } => write!(
                f,
                "weight ({i}, {j}) must be finite and non-negative, got {weight}"
            ),
            GraphError::Asymmetric { i, j } => {
                write!(f, "weight matrix is not symmetric at ({i}, {j})")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Invalid [`TabuConfig`](crate::tabu::TabuConfig) parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The tabu memory must hold at least one entry.
    ZeroMemoryCapacity,
    /// The stopping threshold must be positive.
    ZeroThreshold,
    /// The discard probability must lie in `[0, 1]`.
    InvalidDiscardProbability(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroMemoryCapacity => write!(f, "memory_capacity must be positive"),
            ConfigError::ZeroThreshold => write!(f, "threshold must be positive"),
            ConfigError::InvalidDiscardProbability(p) => {
                write!(f, "discard_probability must be in [0, 1], got {p}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure to start a tabu search run.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The configuration was rejected.
    Config(ConfigError),
    /// The initial-solution provider did not return a permutation of
    /// `0..n`.
    InvalidInitialTour {
        /// Number of nodes in the graph.
        nodes: usize,
        /// Length of the returned tour.
        len: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Config(e) => write!(f, "invalid configuration: {e}"),
            SearchError::InvalidInitialTour { nodes, len } => write!(
                f,
                "initial tour of length {len} is not a permutation of {nodes} nodes"
            ),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Config(e) => Some(e),
            SearchError::InvalidInitialTour { .. } => None,
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        SearchError::Config(e)
    }
}
