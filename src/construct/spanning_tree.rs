//! Minimum-spanning-tree tour construction ("double tree" shortcut).
//!
//! # Algorithm
//!
//! 1. Build a minimum spanning tree with Prim's algorithm rooted at node 0
//! 2. Walk the tree depth-first from the root, visiting children in
//!    increasing index order
//! 3. The preorder of the walk is the tour (repeated nodes are shortcut)
//!
//! On metric instances the result is at most twice the optimal length.
//!
//! # Complexity
//!
//! O(n²) for the dense Prim variant.
//!
//! # Reference
//!
//! Prim, R.C. (1957). "Shortest connection networks and some
//! generalizations", *Bell System Technical Journal* 36(6), 1389-1401.

use super::types::InitialTour;
use crate::graph::Graph;
use crate::tour::Tour;

/// MST + DFS preorder provider.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::{InitialTour, SpanningTreeTour};
/// use u_tsp::graph::Graph;
///
/// let g = Graph::from_points(&[(0.0, 0.0), (2.0, 0.0), (1.0, 0.0)]).unwrap();
/// assert_eq!(SpanningTreeTour.initial_tour(&g).as_slice(), &[0, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanningTreeTour;

impl InitialTour for SpanningTreeTour {
    fn initial_tour(&self, graph: &Graph) -> Tour {
        let n = graph.size();
        if n == 0 {
            return Tour::default();
        }
        let parent = prim(graph);

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (v, p) in parent.iter().enumerate() {
            if let Some(p) = *p {
                children[p].push(v);
            }
        }

        let mut order = Vec::with_capacity(n);
        let mut stack = vec![0];
        while let Some(v) = stack.pop() {
            order.push(v);
            stack.extend(children[v].iter().rev());
        }

        Tour::from(order)
    }
}

/// Parent of every node in a minimum spanning tree rooted at 0.
///
/// The root has no parent. Among equally cheap connections the lowest
/// node index joins the tree first.
fn prim(graph: &Graph) -> Vec<Option<usize>> {
    let n = graph.size();
    let mut in_tree = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut key = vec![f64::INFINITY; n];
    key[0] = 0.0;

    for _ in 0..n {
        let mut u = None;
        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            match u {
                Some(b) if key[v] >= key[b] => {}
                _ => u = Some(v),
            }
        }
        let Some(u) = u else { break };
        in_tree[u] = true;

        for v in 0..n {
            if !in_tree[v] && graph.weight(u, v) < key[v] {
                key[v] = graph.weight(u, v);
                parent[v] = Some(u);
            }
        }
    }

    parent
}
