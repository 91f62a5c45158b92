//! Directed weighted adjacency structure backed by [`KeyedMap`]

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, WalkwayError};
use crate::graph::types::{Cost, Edge, Node};
use crate::map::KeyedMap;

/// Directed weighted graph over hashable node keys.
///
/// Every key maps to exactly one [`Node`]. Each ordered pair of nodes has at
/// most one edge; inserting an edge for a pair that already has one replaces
/// its weight.
pub struct Graph<K> {
    nodes: KeyedMap<K, Node<K>>,
    edge_count: usize,
}

impl<K> Graph<K>
where
    K: Hash + Eq + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            nodes: KeyedMap::new(),
            edge_count: 0,
        }
    }

    /// Create a graph whose node index starts with `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            nodes: KeyedMap::with_capacity(capacity)?,
            edge_count: 0,
        })
    }

    /// Insert a node with no edges. Returns false if the key was already present.
    pub fn insert_node(&mut self, key: K) -> Result<bool> {
        if self.nodes.contains_key(&key) {
            return Ok(false);
        }
        self.nodes.put(key.clone(), Node::new(key))?;
        Ok(true)
    }

    /// Remove a node together with every edge leaving or entering it.
    pub fn remove_node(&mut self, key: &K) -> Result<()> {
        if !self.nodes.contains_key(key) {
            return Err(WalkwayError::node_not_found(key));
        }
        let node = self.nodes.remove(key)?;

        for edge in &node.edges_leaving {
            if &edge.successor == key {
                continue;
            }
            if let Ok(successor) = self.nodes.get_mut(&edge.successor) {
                remove_first(&mut successor.predecessors, key);
            }
        }

        let mut dropped = node.edges_leaving.len();
        for pred_key in &node.predecessors {
            if pred_key == key {
                continue;
            }
            if let Ok(pred) = self.nodes.get_mut(pred_key) {
                let before = pred.edges_leaving.len();
                pred.edges_leaving.retain(|e| &e.successor != key);
                dropped += before - pred.edges_leaving.len();
            }
        }

        self.edge_count -= dropped;
        tracing::trace!(node = ?key, edges_dropped = dropped, "remove_node");
        Ok(())
    }

    /// Insert the directed edge `from -> to`.
    ///
    /// Both endpoints must already exist and `weight` must be finite and
    /// non-negative. Returns the previous weight when the edge already existed.
    pub fn insert_edge(&mut self, from: &K, to: &K, weight: f64) -> Result<Option<f64>> {
        if !self.nodes.contains_key(from) {
            return Err(WalkwayError::node_not_found(from));
        }
        if !self.nodes.contains_key(to) {
            return Err(WalkwayError::node_not_found(to));
        }
        if !Cost::is_valid_weight(weight) {
            return Err(WalkwayError::invalid_weight(from, to, weight));
        }

        let from_node = self.nodes.get_mut(from)?;
        if let Some(edge) = from_node
            .edges_leaving
            .iter_mut()
            .find(|e| &e.successor == to)
        {
            let previous = edge.weight;
            edge.weight = weight;
            return Ok(Some(previous));
        }
        from_node.edges_leaving.push(Edge {
            successor: to.clone(),
            weight,
        });

        self.nodes.get_mut(to)?.predecessors.push(from.clone());
        self.edge_count += 1;
        Ok(None)
    }

    /// Remove the directed edge `from -> to` and return its weight.
    pub fn remove_edge(&mut self, from: &K, to: &K) -> Result<f64> {
        let from_node = self
            .nodes
            .get_mut(from)
            .map_err(|_| WalkwayError::edge_not_found(from, to))?;
        let position = from_node
            .edges_leaving
            .iter()
            .position(|e| &e.successor == to)
            .ok_or_else(|| WalkwayError::edge_not_found(from, to))?;
        let edge = from_node.edges_leaving.remove(position);

        if let Ok(to_node) = self.nodes.get_mut(to) {
            remove_first(&mut to_node.predecessors, from);
        }
        self.edge_count -= 1;
        Ok(edge.weight)
    }

    /// Weight of the directed edge `from -> to`.
    pub fn get_edge(&self, from: &K, to: &K) -> Result<f64> {
        self.nodes
            .get(from)
            .ok()
            .and_then(|node| node.edge_to(to))
            .map(|edge| edge.weight)
            .ok_or_else(|| WalkwayError::edge_not_found(from, to))
    }

    /// Edges leaving `key`.
    pub fn successors(&self, key: &K) -> Result<&[Edge<K>]> {
        self.nodes
            .get(key)
            .map(|node| node.edges_leaving.as_slice())
            .map_err(|_| WalkwayError::node_not_found(key))
    }

    pub fn contains_node(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    /// Snapshot of every node key, in unspecified order.
    pub fn all_nodes(&self) -> Vec<K> {
        self.nodes.keys()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.size()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edge_count = 0;
    }
}

impl<K> Default for Graph<K>
where
    K: Hash + Eq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

fn remove_first<K: PartialEq>(keys: &mut Vec<K>, key: &K) {
    if let Some(position) = keys.iter().position(|k| k == key) {
        keys.swap_remove(position);
    }
}
