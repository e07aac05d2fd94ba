//! Complete weighted graph over `n` nodes.
//!
//! Weights are stored as a dense row-major `n × n` matrix. The matrix is
//! checked once at construction (square, finite, non-negative, symmetric)
//! and is immutable afterwards, so a single [`Graph`] can be shared
//! read-only across independent search runs.

use crate::error::GraphError;

/// Symmetric, non-negative weight matrix.
///
/// The diagonal is never read by any algorithm in this crate and is not
/// checked.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::Graph;
///
/// let g = Graph::new(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(g.size(), 3);
/// assert_eq!(g.weight(0, 2), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Graph {
    n: usize,
    weights: Vec<f64>,
}

impl Graph {
    /// Builds a graph from a square matrix of rows.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] if the matrix is not square, holds a
    /// negative or non-finite off-diagonal weight, or is not symmetric.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, GraphError> {
        let n = rows.len();
        let mut weights = Vec::with_capacity(n * n);
        for (row, r) in rows.iter().enumerate() {
            if r.len() != n {
                return Err(GraphError::NotSquare {
                    row,
                    len: r.len(),
                    expected: n,
                });
            }
            weights.extend_from_slice(r);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let w = weights[i * n + j];
                if !w.is_finite() || w < 0.0 {
                    return Err(GraphError::InvalidWeight { i, j, weight: w });
                }
                let back = weights[j * n + i];
                if !back.is_finite() || back < 0.0 {
                    return Err(GraphError::InvalidWeight {
                        i: j,
                        j: i,
                        weight: back,
                    });
                }
                if w != back {
                    return Err(GraphError::Asymmetric { i, j });
                }
            }
        }

        Ok(Self { n, weights })
    }

    /// Builds a graph of `n` nodes from a weight function evaluated on the
    /// upper triangle (`i < j`) and mirrored.
    ///
    /// The diagonal is set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidWeight`] if `f` yields a negative or
    /// non-finite value.
    pub fn from_fn<F>(n: usize, mut f: F) -> Result<Self, GraphError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut weights = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let w = f(i, j);
                if !w.is_finite() || w < 0.0 {
                    return Err(GraphError::InvalidWeight { i, j, weight: w });
                }
                weights[i * n + j] = w;
                weights[j * n + i] = w;
            }
        }
        Ok(Self { n, weights })
    }

    /// Euclidean distances between planar points.
    ///
    /// Coordinates must be finite.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, GraphError> {
        Self::from_fn(points.len(), |i, j| {
            let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
            (dx * dx + dy * dy).sqrt()
        })
    }

    /// Number of nodes.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Weight of edge `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "node index out of bounds");
        self.weights[i * self.n + j]
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.weights[i * self.n..(i + 1) * self.n]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Graph {
    type Error = GraphError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Graph> for Vec<Vec<f64>> {
    fn from(g: Graph) -> Self {
        (0..g.n).map(|i| g.row(i).to_vec()).collect()
    }
}
