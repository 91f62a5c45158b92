//! Campus query surfaces over a loaded walkway graph
//!
//! [`Navigator`] owns a string-keyed [`Graph`] and answers the three queries
//! the command line exposes: list every location, route between two
//! locations, and find every location reachable within a time budget.

use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::dataset::{self, EdgeRecord};
use crate::error::{Result, WalkwayError};
use crate::graph::{Cost, Graph, NodeId};

/// Shortest route between two locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub from: NodeId,
    pub to: NodeId,
    /// Locations from `from` to `to`, inclusive.
    pub stops: Vec<NodeId>,
    /// `legs[i]` is the walking time from `stops[i]` to `stops[i + 1]`.
    pub legs: Vec<f64>,
    pub total: Cost,
}

/// A location reachable from a start within a budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reachable {
    pub location: NodeId,
    pub cost: Cost,
}

/// Summary of a dataset load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub locations: usize,
    pub walkways: usize,
}

/// Query front end for a campus walkway graph.
pub struct Navigator {
    graph: Graph<NodeId>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Create a navigator whose node index starts with `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            graph: Graph::with_capacity(capacity)?,
        })
    }

    pub fn graph(&self) -> &Graph<NodeId> {
        &self.graph
    }

    /// Replace the current graph with the walkways in a `.dot` dataset.
    ///
    /// The file is parsed in full before the graph is touched, so a failed
    /// load leaves the previous data in place.
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub fn load_dataset(&mut self, path: &Path) -> Result<LoadSummary> {
        let start = Instant::now();
        let records = dataset::read_dataset(path)?;

        self.graph.clear();
        self.load_edges(records)?;

        let summary = LoadSummary {
            locations: self.graph.node_count(),
            walkways: self.graph.edge_count(),
        };
        info!(
            locations = summary.locations,
            walkways = summary.walkways,
            elapsed = ?start.elapsed(),
            "dataset_loaded"
        );
        Ok(summary)
    }

    /// Add walkways to the graph. Each record inserts both endpoints and an
    /// edge in each direction with the same weight.
    ///
    /// Every weight is checked before the first insertion, so a batch with
    /// an invalid record leaves the graph untouched.
    pub fn load_edges<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let records: Vec<EdgeRecord> = records.into_iter().collect();
        if let Some(bad) = records.iter().find(|r| !Cost::is_valid_weight(r.weight)) {
            return Err(WalkwayError::invalid_weight(&bad.from, &bad.to, bad.weight));
        }

        for EdgeRecord { from, to, weight } in records {
            self.graph.insert_node(from.clone())?;
            self.graph.insert_node(to.clone())?;
            self.graph.insert_edge(&from, &to, weight)?;
            self.graph.insert_edge(&to, &from, weight)?;
        }
        Ok(())
    }

    /// Every location name, sorted.
    pub fn locations(&self) -> Vec<NodeId> {
        let mut locations = self.graph.all_nodes();
        locations.sort();
        locations
    }

    /// Shortest route from `from` to `to`.
    ///
    /// Fails with `NodeNotFound` for an unknown location and `NoPathExists`
    /// when the two are not connected.
    #[tracing::instrument(skip(self))]
    pub fn route(&self, from: &str, to: &str) -> Result<Route> {
        let path = self
            .graph
            .shortest_path(&from.to_string(), &to.to_string())?;
        debug!(stops = path.nodes.len(), total = %path.cost, "route");

        Ok(Route {
            from: from.to_string(),
            to: to.to_string(),
            stops: path.nodes,
            legs: path.hop_weights,
            total: path.cost,
        })
    }

    /// Every location whose shortest-path cost from `from` is at most
    /// `budget`, `from` itself included. Sorted by cost, then name.
    ///
    /// An unknown start fails with `NodeNotFound` rather than returning an
    /// empty list. `budget` must be finite and non-negative.
    #[tracing::instrument(skip(self))]
    pub fn reachable_within(&self, from: &str, budget: f64) -> Result<Vec<Reachable>> {
        if !Cost::is_valid_weight(budget) {
            crate::bail_invalid!("travel budget", budget);
        }

        let mut reachable: Vec<Reachable> = self
            .graph
            .shortest_costs_from(&from.to_string())?
            .into_iter()
            .filter(|(_, cost)| cost.value() <= budget)
            .map(|(location, cost)| Reachable { location, cost })
            .collect();

        reachable.sort_by(|a, b| {
            a.cost
                .value()
                .total_cmp(&b.cost.value())
                .then_with(|| a.location.cmp(&b.location))
        });
        debug!(count = reachable.len(), "reachable_within");
        Ok(reachable)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
