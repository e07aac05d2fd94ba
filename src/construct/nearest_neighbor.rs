//! Nearest-neighbor tour construction.
//!
//! # Algorithm
//!
//! Start at a given node and repeatedly append the unvisited node closest
//! to the last one appended. Ties go to the lowest node index.
//!
//! # Complexity
//!
//! O(n²).
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use super::types::InitialTour;
use crate::graph::Graph;
use crate::tour::Tour;

/// Greedy nearest-neighbor provider.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::{InitialTour, NearestNeighbor};
/// use u_tsp::graph::Graph;
///
/// let g = Graph::from_points(&[(0.0, 0.0), (5.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
/// let tour = NearestNeighbor::new(0).initial_tour(&g);
/// assert_eq!(tour.as_slice(), &[0, 2, 3, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor {
    /// First node of the tour. Taken modulo `n`, so one provider can be
    /// reused across graphs of different size.
    pub start: usize,
}

impl NearestNeighbor {
    /// Creates a provider that starts from `start`.
    pub fn new(start: usize) -> Self {
        Self { start }
    }
}

impl InitialTour for NearestNeighbor {
    fn initial_tour(&self, graph: &Graph) -> Tour {
        let n = graph.size();
        if n == 0 {
            return Tour::default();
        }

        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut current = self.start % n;
        visited[current] = true;
        order.push(current);

        while order.len() < n {
            let next = nearest_unvisited(graph, current, &visited);
            visited[next] = true;
            order.push(next);
            current = next;
        }

        Tour::from(order)
    }
}

/// Closest unvisited node to `from`, lowest index on ties.
///
/// Callers guarantee at least one unvisited node remains.
pub(crate) fn nearest_unvisited(graph: &Graph, from: usize, visited: &[bool]) -> usize {
    let mut best: Option<usize> = None;
    for v in 0..graph.size() {
        if visited[v] {
            continue;
        }
        match best {
            Some(b) if graph.weight(from, v) >= graph.weight(from, b) => {}
            _ => best = Some(v),
        }
    }
    best.unwrap_or(from)
}
