//! Walkway Core Library
//!
//! Core domain logic for the walkway campus router: a separately chained
//! hash map, a directed weighted graph built on it, a Dijkstra engine over
//! that graph, and the dataset and query layers the CLI drives.

pub mod config;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod logging;
pub mod map;
pub mod navigator;
pub mod records;
