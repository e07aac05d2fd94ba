//! Nearest-node, cheapest-position insertion.
//!
//! # Algorithm
//!
//! 1. Start from the cycle `0 → 1 → 2 → 0`
//! 2. Pick the unvisited node closest to any node already in the cycle
//! 3. Insert it between the consecutive pair `(a, b)` (closing pair
//!    included) minimizing `w(a, x) + w(x, b) - w(a, b)`
//! 4. Repeat until every node is in the cycle
//!
//! # Complexity
//!
//! O(n³) in this straightforward form.

use super::nearest_neighbor::nearest_unvisited;
use super::types::InitialTour;
use crate::graph::Graph;
use crate::tour::Tour;

/// Insertion heuristic provider.
///
/// Graphs with fewer than three nodes get the identity tour.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::{CheapestInsertion, InitialTour};
/// use u_tsp::graph::Graph;
///
/// let g = Graph::from_points(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, -1.0)])
///     .unwrap();
/// let tour = CheapestInsertion.initial_tour(&g);
/// assert!(tour.is_permutation_of(5));
/// assert_eq!(tour.as_slice(), &[0, 4, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestInsertion;

impl InitialTour for CheapestInsertion {
    fn initial_tour(&self, graph: &Graph) -> Tour {
        let n = graph.size();
        if n < 3 {
            return Tour::identity(n);
        }

        let mut visited = vec![false; n];
        let mut cycle = Vec::with_capacity(n);
        for v in 0..3 {
            visited[v] = true;
            cycle.push(v);
        }

        while cycle.len() < n {
            let node = choose_node(graph, &cycle, &visited);
            visited[node] = true;
            let at = cheapest_position(graph, &cycle, node);
            cycle.insert(at, node);
        }

        Tour::from(cycle)
    }
}

/// Unvisited node with the smallest distance to the cycle.
///
/// Cycle nodes are scanned in cycle order; the first strict minimum wins.
fn choose_node(graph: &Graph, cycle: &[usize], visited: &[bool]) -> usize {
    let mut chosen = None;
    let mut chosen_dist = f64::INFINITY;
    for &u in cycle {
        let v = nearest_unvisited(graph, u, visited);
        let d = graph.weight(u, v);
        if chosen.is_none() || d < chosen_dist {
            chosen = Some(v);
            chosen_dist = d;
        }
    }
    chosen.unwrap_or(0)
}

/// Index at which inserting `node` adds the least weight.
///
/// Position `k + 1` places the node between `cycle[k]` and `cycle[k + 1]`;
/// position `len` closes it between the last and first node.
fn cheapest_position(graph: &Graph, cycle: &[usize], node: usize) -> usize {
    let len = cycle.len();
    let mut best_at = len;
    let mut best_delta = f64::INFINITY;
    for k in 0..len {
        let (a, b) = (cycle[k], cycle[(k + 1) % len]);
        let delta = graph.weight(a, node) + graph.weight(node, b) - graph.weight(a, b);
        if delta < best_delta {
            best_delta = delta;
            best_at = k + 1;
        }
    }
    best_at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_graphs_identity() {
        for n in 0..3 {
            let g = Graph::from_fn(n, |_, _| 1.0).unwrap();
            assert_eq!(CheapestInsertion.initial_tour(&g), Tour::identity(n));
        }
    }

    #[test]
    fn test_three_nodes_is_seed_cycle() {
        let g = Graph::from_fn(3, |i, j| (i + j) as f64).unwrap();
        assert_eq!(CheapestInsertion.initial_tour(&g).as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_closing_pair_insertion() {
        // Rectangle corners; node 3 belongs on the closing edge 2 -> 0.
        let g = Graph::from_points(&[(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (0.0, 1.0)]).unwrap();
        let t = CheapestInsertion.initial_tour(&g);
        assert_eq!(t.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_square_with_dent() {
        let g = Graph::from_points(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, -1.0)])
            .unwrap();
        let t = CheapestInsertion.initial_tour(&g);
        assert_eq!(t.as_slice(), &[0, 4, 1, 2, 3]);
    }

    #[test]
    fn test_always_permutation() {
        let g = Graph::from_fn(12, |i, j| ((i * 13 + j * 5) % 17) as f64 + 1.0).unwrap();
        assert!(CheapestInsertion.initial_tour(&g).is_permutation_of(12));
    }
}
