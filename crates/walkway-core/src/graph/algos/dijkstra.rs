use crate::error::{Result, WalkwayError};
use crate::graph::base::Graph;
use crate::graph::types::Cost;
use crate::map::KeyedMap;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

/// One candidate path discovered during a search: the node it ends at, its
/// accumulated cost, and the arena slot of the candidate it extends.
#[derive(Debug, Clone)]
pub struct SearchNode<K> {
    pub node: K,
    pub cost: Cost,
    pub predecessor: Option<usize>,
}

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub accumulated_cost: Cost,
    pub slot: usize,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    // Ties between equal costs are left unordered.
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .value()
            .total_cmp(&other.accumulated_cost.value())
    }
}

/// The search tree produced by [`Graph::compute_shortest_path`].
///
/// `nodes` is the arena of every candidate pushed during the search;
/// following `predecessor` slots from `end` reaches the start node.
#[derive(Debug, Clone)]
pub struct PathSearch<K> {
    nodes: Vec<SearchNode<K>>,
    end: usize,
    settled: usize,
}

impl<K: Clone> PathSearch<K> {
    /// Cost of the shortest path.
    pub fn cost(&self) -> Cost {
        self.nodes[self.end].cost
    }

    /// The settled search node for the destination.
    pub fn end(&self) -> &SearchNode<K> {
        &self.nodes[self.end]
    }

    /// Number of nodes settled before the search finished.
    pub fn settled_count(&self) -> usize {
        self.settled
    }

    /// Search nodes from start to end along the shortest path.
    pub fn chain(&self) -> Vec<&SearchNode<K>> {
        let mut chain = Vec::new();
        let mut current = Some(self.end);
        while let Some(slot) = current {
            let node = &self.nodes[slot];
            chain.push(node);
            current = node.predecessor;
        }
        chain.reverse();
        chain
    }

    /// Node keys from start to end along the shortest path.
    pub fn path(&self) -> Vec<K> {
        self.chain().into_iter().map(|n| n.node.clone()).collect()
    }
}

/// A shortest path with the weight of every hop along it.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<K> {
    pub nodes: Vec<K>,
    /// `hop_weights[i]` is the weight of the edge `nodes[i] -> nodes[i + 1]`.
    pub hop_weights: Vec<f64>,
    pub cost: Cost,
}

/// State tracked during a Dijkstra search
struct DijkstraState<K> {
    arena: Vec<SearchNode<K>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    settled: KeyedMap<K, usize>,
}

impl<K> DijkstraState<K>
where
    K: Hash + Eq + Clone + Debug,
{
    fn new(start: &K) -> Self {
        let mut state = Self {
            arena: Vec::new(),
            heap: BinaryHeap::new(),
            settled: KeyedMap::new(),
        };
        state.push(start.clone(), Cost::ZERO, None);
        state
    }

    fn push(&mut self, node: K, cost: Cost, predecessor: Option<usize>) {
        let slot = self.arena.len();
        self.arena.push(SearchNode {
            node,
            cost,
            predecessor,
        });
        self.heap.push(Reverse(HeapEntry {
            accumulated_cost: cost,
            slot,
        }));
    }

    /// Run the search until the frontier is exhausted, or until `stop_at`
    /// has been settled when one is given.
    fn run(&mut self, graph: &Graph<K>, stop_at: Option<&K>) -> Result<()> {
        while let Some(Reverse(HeapEntry {
            accumulated_cost,
            slot,
        })) = self.heap.pop()
        {
            let current = self.arena[slot].node.clone();

            // Stale entry: this node was settled at a lower or equal cost
            if self.settled.contains_key(&current) {
                continue;
            }
            self.settled.put(current.clone(), slot)?;

            if stop_at == Some(&current) {
                break;
            }

            for edge in graph.successors(&current)? {
                if !self.settled.contains_key(&edge.successor) {
                    let cost = accumulated_cost + Cost::new(edge.weight);
                    self.push(edge.successor.clone(), cost, Some(slot));
                }
            }
        }
        Ok(())
    }
}

impl<K> Graph<K>
where
    K: Hash + Eq + Clone + Debug,
{
    /// Dijkstra search from `start` to `end`.
    ///
    /// Fails with `NodeNotFound` when either endpoint is missing and with
    /// `NoPathExists` when `end` cannot be reached. Edge weights are
    /// non-negative by construction, which the search relies on.
    pub fn compute_shortest_path(&self, start: &K, end: &K) -> Result<PathSearch<K>> {
        let started = Instant::now();
        if !self.contains_node(start) {
            return Err(WalkwayError::node_not_found(start));
        }
        if !self.contains_node(end) {
            return Err(WalkwayError::node_not_found(end));
        }

        let mut state = DijkstraState::new(start);
        state.run(self, Some(end))?;

        let settled = state.settled.size();
        let end_slot = match state.settled.get(end) {
            Ok(slot) => *slot,
            Err(_) => {
                tracing::debug!(from = ?start, to = ?end, settled, "no_path");
                return Err(WalkwayError::no_path(start, end));
            }
        };

        tracing::debug!(
            from = ?start,
            to = ?end,
            settled,
            elapsed = ?started.elapsed(),
            "shortest_path"
        );

        Ok(PathSearch {
            nodes: state.arena,
            end: end_slot,
            settled,
        })
    }

    /// Node keys along the shortest path from `start` to `end`, inclusive.
    pub fn shortest_path_data(&self, start: &K, end: &K) -> Result<Vec<K>> {
        Ok(self.compute_shortest_path(start, end)?.path())
    }

    /// Total weight of the shortest path from `start` to `end`.
    pub fn shortest_path_cost(&self, start: &K, end: &K) -> Result<Cost> {
        Ok(self.compute_shortest_path(start, end)?.cost())
    }

    /// Shortest path with per-hop weights, computed by a single search.
    pub fn shortest_path(&self, start: &K, end: &K) -> Result<ShortestPath<K>> {
        let search = self.compute_shortest_path(start, end)?;
        let chain = search.chain();
        let hop_weights = chain
            .windows(2)
            .map(|pair| self.get_edge(&pair[0].node, &pair[1].node))
            .collect::<Result<Vec<f64>>>()?;

        Ok(ShortestPath {
            nodes: chain.iter().map(|n| n.node.clone()).collect(),
            hop_weights,
            cost: search.cost(),
        })
    }

    /// Single-source Dijkstra: the shortest-path cost from `start` to every
    /// node reachable from it, `start` included at cost zero. Order is the
    /// order in which nodes were settled (non-decreasing cost).
    pub fn shortest_costs_from(&self, start: &K) -> Result<Vec<(K, Cost)>> {
        let started = Instant::now();
        if !self.contains_node(start) {
            return Err(WalkwayError::node_not_found(start));
        }

        let mut state = DijkstraState::new(start);
        state.run(self, None)?;

        let mut slots: Vec<usize> = state.settled.values().copied().collect();
        slots.sort_by(|a, b| {
            state.arena[*a]
                .cost
                .value()
                .total_cmp(&state.arena[*b].cost.value())
                .then(a.cmp(b))
        });

        tracing::debug!(
            from = ?start,
            settled = slots.len(),
            elapsed = ?started.elapsed(),
            "shortest_costs_from"
        );

        Ok(slots
            .into_iter()
            .map(|slot| {
                let node = &state.arena[slot];
                (node.node.clone(), node.cost)
            })
            .collect())
    }
}
