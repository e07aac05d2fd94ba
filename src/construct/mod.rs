//! Constructive heuristics.
//!
//! Each heuristic builds a complete tour from scratch and is exposed as an
//! [`InitialTour`] provider, the seed for a local-search run such as
//! [`TabuRunner`](crate::tabu::TabuRunner).
//!
//! # Providers
//!
//! - [`IdentityTour`]: nodes in index order
//! - [`NearestNeighbor`]: greedy walk to the closest unvisited node
//! - [`SpanningTreeTour`]: DFS preorder of a minimum spanning tree
//! - [`CheapestInsertion`]: grow a cycle by cheapest-position insertion

mod insertion;
mod nearest_neighbor;
mod spanning_tree;
mod types;

pub use insertion::CheapestInsertion;
pub use nearest_neighbor::NearestNeighbor;
pub use spanning_tree::SpanningTreeTour;
pub use types::{IdentityTour, InitialTour};
