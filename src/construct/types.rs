//! Initial-solution provider trait.

use crate::graph::Graph;
use crate::tour::Tour;

/// Builds a starting tour for a local-search run.
///
/// Implementations must return a permutation of `0..graph.size()`. The
/// tabu driver rejects anything else before the first iteration.
///
/// Any `Fn(&Graph) -> Tour` closure is also a provider:
///
/// ```
/// use u_tsp::construct::InitialTour;
/// use u_tsp::graph::Graph;
/// use u_tsp::tour::Tour;
///
/// let reversed = |g: &Graph| Tour::from((0..g.size()).rev().collect::<Vec<_>>());
/// let g = Graph::from_fn(3, |_, _| 1.0).unwrap();
/// assert_eq!(reversed.initial_tour(&g).as_slice(), &[2, 1, 0]);
/// ```
pub trait InitialTour {
    /// Constructs a tour over every node of `graph`.
    fn initial_tour(&self, graph: &Graph) -> Tour;
}

impl<F> InitialTour for F
where
    F: Fn(&Graph) -> Tour,
{
    fn initial_tour(&self, graph: &Graph) -> Tour {
        self(graph)
    }
}

/// Visits nodes in index order: `[0, 1, ..., n-1]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTour;

impl InitialTour for IdentityTour {
    fn initial_tour(&self, graph: &Graph) -> Tour {
        Tour::identity(graph.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_tour() {
        let g = Graph::from_fn(5, |_, _| 1.0).unwrap();
        assert_eq!(IdentityTour.initial_tour(&g), Tour::identity(5));
    }

    #[test]
    fn test_closure_provider() {
        let g = Graph::from_fn(3, |_, _| 1.0).unwrap();
        let fixed = |_: &Graph| Tour::from(vec![1, 0, 2]);
        assert_eq!(fixed.initial_tour(&g).as_slice(), &[1, 0, 2]);
    }
}
