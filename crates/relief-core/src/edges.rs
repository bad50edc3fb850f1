//! Edge store: undirected weighted connections with upsert semantics
//!
//! Connections are kept as a flat list in insertion order. A petgraph
//! `UnGraphMap` mirrors the same connections so shortest-path searches can
//! iterate a camp's neighbours without scanning the list.

use crate::error::{GraphError, Result};
use crate::model::{CampId, Connection, Weight};
use crate::registry::CampRegistry;
use petgraph::graphmap::UnGraphMap;
use std::collections::BTreeSet;
use tracing::{debug, warn};

/// What a successful `connect` did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    Inserted,
    Updated { previous: Weight },
}

#[derive(Clone, Default)]
pub struct EdgeStore {
    connections: Vec<Connection>,
    adjacency: UnGraphMap<CampId, Weight>,
}

impl std::fmt::Debug for EdgeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeStore")
            .field("connection_count", &self.connections.len())
            .finish()
    }
}

impl EdgeStore {
    pub fn new() -> Self {
        EdgeStore {
            connections: Vec::new(),
            adjacency: UnGraphMap::new(),
        }
    }

    /// Insert or re-cost the connection between `src` and `dest`.
    ///
    /// With `update_only` set, a missing connection is an error instead of
    /// being created. Weights must be non-negative. Either both directions
    /// change or nothing does.
    pub fn connect(
        &mut self,
        registry: &CampRegistry,
        src: CampId,
        dest: CampId,
        weight: Weight,
        update_only: bool,
    ) -> Result<ConnectOutcome> {
        if !registry.contains(src) || !registry.contains(dest) {
            warn!("Rejected connection {} - {}: unknown endpoint", src, dest);
            return Err(GraphError::InvalidEndpoint { src, dest });
        }
        if src == dest {
            warn!("Rejected self connection on camp {}", src);
            return Err(GraphError::SelfLoop(src));
        }
        if weight < 0 {
            warn!("Rejected negative cost {} on {} - {}", weight, src, dest);
            return Err(GraphError::NegativeWeight { src, dest, weight });
        }

        if let Some(existing) = self.connections.iter_mut().find(|c| c.joins(src, dest)) {
            let previous = existing.weight;
            existing.weight = weight;
            self.adjacency.add_edge(src, dest, weight);
            debug!("Connection {} - {} re-costed {} -> {}", src, dest, previous, weight);
            return Ok(ConnectOutcome::Updated { previous });
        }

        if update_only {
            return Err(GraphError::EdgeNotFound { a: src, b: dest });
        }

        self.connections.push(Connection::new(src, dest, weight));
        self.adjacency.add_edge(src, dest, weight);
        debug!("Connection {} - {} added with weight {}", src, dest, weight);
        Ok(ConnectOutcome::Inserted)
    }

    /// The connection between `a` and `b`, if any.
    pub fn find(&self, a: CampId, b: CampId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.joins(a, b))
    }

    /// Camps directly connected to `id`.
    pub fn neighbors_of(&self, id: CampId) -> BTreeSet<CampId> {
        self.connections
            .iter()
            .filter_map(|c| c.other(id))
            .filter(|&other| other != id)
            .collect()
    }

    /// Neighbours of `id` together with the weight of the connecting edge.
    pub fn weighted_neighbors(&self, id: CampId) -> impl Iterator<Item = (CampId, Weight)> + '_ {
        self.adjacency
            .edges(id)
            .map(move |(a, b, &weight)| if a == id { (b, weight) } else { (a, weight) })
    }

    /// Logical connections, in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Number of logical (undirected) connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
