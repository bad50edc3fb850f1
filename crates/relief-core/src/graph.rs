//! The camp network aggregate: registry plus edge store

use crate::cost::{CostInputs, CostModel};
use crate::edges::{ConnectOutcome, EdgeStore};
use crate::error::{GraphError, Result};
use crate::model::*;
use crate::mst::{self, SpanningForest};
use crate::registry::CampRegistry;
use crate::shortest_path::{self, DistanceTable, Route, ShortestPaths};
use std::collections::BTreeSet;
use tracing::info;

/// The relief camp network. Owns every camp and connection for the
/// lifetime of a session; callers serialize access.
#[derive(Clone, Default)]
pub struct ReliefGraph {
    registry: CampRegistry,
    edges: EdgeStore,
}

impl std::fmt::Debug for ReliefGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReliefGraph")
            .field("camp_count", &self.registry.len())
            .field("edge_count", &self.edges.len())
            .finish()
    }
}

impl ReliefGraph {
    pub fn new() -> Self {
        ReliefGraph {
            registry: CampRegistry::new(),
            edges: EdgeStore::new(),
        }
    }

    /// Register a camp, silently replacing any camp with the same id.
    /// Need and resources start from defaults; existing connections stay.
    pub fn register_camp(
        &mut self,
        id: CampId,
        name: impl Into<String>,
        address: impl Into<String>,
        contact: impl Into<String>,
    ) {
        self.registry.register(Camp::new(id, name, address, contact));
    }

    /// Get a camp by ID.
    pub fn camp(&self, id: CampId) -> Option<&Camp> {
        self.registry.lookup(id)
    }

    /// Iterate over all camps, ascending by id.
    pub fn camps(&self) -> impl Iterator<Item = &Camp> {
        self.registry.iter()
    }

    pub fn camp_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of undirected connections.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn registry(&self) -> &CampRegistry {
        &self.registry
    }

    pub fn edges(&self) -> &EdgeStore {
        &self.edges
    }

    /// Insert or re-cost a connection. See [`EdgeStore::connect`].
    pub fn connect(
        &mut self,
        src: CampId,
        dest: CampId,
        weight: Weight,
        update_only: bool,
    ) -> Result<ConnectOutcome> {
        self.edges.connect(&self.registry, src, dest, weight, update_only)
    }

    /// Add a connection whose cost is not known yet.
    pub fn link(&mut self, src: CampId, dest: CampId) -> Result<ConnectOutcome> {
        self.connect(src, dest, INFINITE, false)
    }

    /// Camps directly connected to `id`, without duplicates.
    pub fn neighbors_of(&self, id: CampId) -> BTreeSet<CampId> {
        self.edges.neighbors_of(id)
    }

    /// All connections in insertion order.
    pub fn all_edges(&self) -> &[Connection] {
        self.edges.connections()
    }

    /// Connections of a minimum spanning forest, in acceptance order.
    pub fn compute_mst(&self) -> Vec<Connection> {
        self.spanning_forest().edges
    }

    /// Minimum spanning forest with its total weight and component count.
    pub fn spanning_forest(&self) -> SpanningForest {
        let forest = mst::kruskal(&self.registry, &self.edges);
        info!(
            "Backbone over {} camps uses {} connections",
            self.registry.len(),
            forest.edges.len()
        );
        forest
    }

    /// Shortest distance from `source` to every registered camp.
    pub fn shortest_distances(&self, source: CampId) -> Result<DistanceTable> {
        Ok(self.shortest_paths(source)?.into_distances())
    }

    /// Full Dijkstra result from `source`, including predecessors.
    pub fn shortest_paths(&self, source: CampId) -> Result<ShortestPaths> {
        shortest_path::dijkstra(&self.registry, &self.edges, source)
    }

    /// Closest reachable camp to `source`, excluding `source` itself.
    pub fn nearest_camp(&self, source: CampId) -> Result<Option<(CampId, Weight)>> {
        Ok(self.shortest_paths(source)?.nearest())
    }

    /// Cheapest route from `source` to `target`, or `None` if unreachable.
    pub fn shortest_route(&self, source: CampId, target: CampId) -> Result<Option<Route>> {
        let paths = self.shortest_paths(source)?;
        if !self.registry.contains(target) {
            return Err(GraphError::UnknownId(target));
        }
        Ok(paths.route_to(target))
    }

    pub fn set_need(&mut self, id: CampId, need: Need) -> Result<()> {
        self.registry.set_need(id, need)
    }

    pub fn get_need(&self, id: CampId) -> Result<Need> {
        self.registry.need(id)
    }

    pub fn add_resource(&mut self, id: CampId, name: impl Into<String>, quantity: i64) -> Result<()> {
        self.registry.add_resource(id, name, quantity)
    }

    /// Cost an existing connection from field measurements and the stored
    /// need of both endpoints. Never creates a connection.
    pub fn assign_cost(
        &mut self,
        src: CampId,
        dest: CampId,
        inputs: CostInputs,
        model: &CostModel,
    ) -> Result<Weight> {
        if !self.registry.contains(src) || !self.registry.contains(dest) {
            return Err(GraphError::InvalidEndpoint { src, dest });
        }
        let weight = model.weight(self.get_need(src)?, self.get_need(dest)?, inputs);
        self.connect(src, dest, weight, true)?;
        info!("Connection {} - {} costed at {}", src, dest, weight);
        Ok(weight)
    }
}
