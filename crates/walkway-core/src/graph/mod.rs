//! Graph storage and path-finding
//!
//! - `base`: directed weighted adjacency structure over a [`KeyedMap`](crate::map::KeyedMap)
//! - `algos`: Dijkstra shortest paths layered on top of [`Graph`]
//! - `types`: node, edge and cost types shared by both

pub mod algos;
pub mod base;
pub mod types;

pub use algos::{PathSearch, SearchNode, ShortestPath};
pub use base::Graph;
pub use types::{Cost, Edge, Node, NodeId};
