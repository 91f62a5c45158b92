//! Graph algorithm implementations
//!
//! - `dijkstra`: single-pair and single-source weighted shortest paths

pub mod dijkstra;

pub use dijkstra::{HeapEntry, PathSearch, SearchNode, ShortestPath};
