//! Tours and their cost.

use std::ops::Deref;

use crate::graph::Graph;

/// A Hamiltonian cycle, stored as the order in which nodes are visited.
///
/// The closing edge `(last, first)` is implicit. Equality is element-wise:
/// two tours describing the same cycle from a different starting node or
/// in the opposite direction compare unequal.
///
/// # Examples
///
/// ```
/// use u_tsp::tour::Tour;
///
/// let t = Tour::from(vec![0, 1, 2, 3]);
/// assert_eq!(t.two_opt(1, 2).as_slice(), &[0, 2, 1, 3]);
/// assert_ne!(t, Tour::from(vec![1, 2, 3, 0]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour(Vec<usize>);

impl Tour {
    /// The tour `[0, 1, ..., n-1]`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Total weight of the cycle.
    ///
    /// Tours with fewer than two nodes have no edges and cost zero.
    pub fn cost(&self, graph: &Graph) -> f64 {
        let n = self.0.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for k in 0..n - 1 {
            total += graph.weight(self.0[k], self.0[k + 1]);
        }
        total + graph.weight(self.0[n - 1], self.0[0])
    }

    /// Returns a copy with positions `i..=j` reversed.
    ///
    /// # Panics
    ///
    /// Panics if `i > j` or `j >= self.len()`.
    pub fn two_opt(&self, i: usize, j: usize) -> Self {
        let mut next = self.0.clone();
        next[i..=j].reverse();
        Self(next)
    }

    /// Whether this tour visits every node of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.0.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &v in &self.0 {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    /// Node order as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the tour and returns the node order.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl Deref for Tour {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Tour {
    fn from(order: Vec<usize>) -> Self {
        Self(order)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}
