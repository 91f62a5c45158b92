use serde::Serialize;
use std::fmt;

/// Identifier of a location in the campus graph.
pub type NodeId = String;

/// Accumulated cost of a path, in the dataset's weight unit (seconds for
/// campus walkways). Always finite and non-negative inside a graph.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// True for weights an edge may carry.
    pub fn is_valid_weight(weight: f64) -> bool {
        weight.is_finite() && weight >= 0.0
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed, weighted edge stored in its predecessor's adjacency list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<K> {
    pub successor: K,
    pub weight: f64,
}

/// A location and the edges incident to it.
///
/// `predecessors` lists the keys of nodes holding an edge into this one, so
/// that removing the node can find those edges without scanning the graph.
#[derive(Debug, Clone)]
pub struct Node<K> {
    pub key: K,
    pub edges_leaving: Vec<Edge<K>>,
    pub predecessors: Vec<K>,
}

impl<K: PartialEq> Node<K> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            edges_leaving: Vec::new(),
            predecessors: Vec::new(),
        }
    }

    pub fn edge_to(&self, successor: &K) -> Option<&Edge<K>> {
        self.edges_leaving.iter().find(|e| &e.successor == successor)
    }
}
