//! Single-source shortest paths (Dijkstra)

use crate::edges::EdgeStore;
use crate::error::{GraphError, Result};
use crate::model::{CampId, INFINITE, Weight};
use crate::registry::CampRegistry;
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use tracing::debug;

/// Best known distance from the source to every registered camp.
/// Unreachable camps hold `INFINITE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DistanceTable(BTreeMap<CampId, Weight>);

impl DistanceTable {
    pub fn get(&self, id: CampId) -> Option<Weight> {
        self.0.get(&id).copied()
    }

    pub fn is_reachable(&self, id: CampId) -> bool {
        self.get(id).is_some_and(|d| d != INFINITE)
    }

    /// Entries in ascending camp id order.
    pub fn iter(&self) -> impl Iterator<Item = (CampId, Weight)> + '_ {
        self.0.iter().map(|(&id, &d)| (id, d))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An ordered walk from source to target and its total cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub camps: Vec<CampId>,
    pub cost: Weight,
}

/// Output of one Dijkstra run: distances plus the predecessor of every
/// reached camp, so routes can be rebuilt without searching again.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: CampId,
    distances: DistanceTable,
    previous: BTreeMap<CampId, CampId>,
}

impl ShortestPaths {
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    pub fn into_distances(self) -> DistanceTable {
        self.distances
    }

    /// Closest reachable camp other than the source; lowest id wins ties.
    pub fn nearest(&self) -> Option<(CampId, Weight)> {
        self.distances
            .iter()
            .filter(|&(id, d)| id != self.source && d != INFINITE)
            .min_by_key(|&(id, d)| (d, id))
    }

    /// Walk the predecessor chain back from `target`.
    pub fn route_to(&self, target: CampId) -> Option<Route> {
        if !self.distances.is_reachable(target) {
            return None;
        }

        let mut camps = vec![target];
        let mut current = target;
        while current != self.source {
            current = *self.previous.get(&current)?;
            camps.push(current);
        }
        camps.reverse();

        Some(Route {
            camps,
            cost: self.distances.get(target)?,
        })
    }
}

/// Run Dijkstra from `source` over every registered camp.
///
/// Edge weights must be non-negative. Stale frontier entries are skipped
/// on pop instead of being decreased in place.
pub fn dijkstra(registry: &CampRegistry, edges: &EdgeStore, source: CampId) -> Result<ShortestPaths> {
    if !registry.contains(source) {
        return Err(GraphError::UnknownSource(source));
    }

    let mut dist: BTreeMap<CampId, Weight> = registry.ids().map(|id| (id, INFINITE)).collect();
    let mut previous = BTreeMap::new();
    let mut frontier = BinaryHeap::new();

    dist.insert(source, 0);
    frontier.push(Reverse((0, source)));

    let mut settled = 0usize;
    while let Some(Reverse((cost, node))) = frontier.pop() {
        if cost > dist.get(&node).copied().unwrap_or(INFINITE) {
            continue;
        }
        settled += 1;

        for (next, weight) in edges.weighted_neighbors(node) {
            let candidate = cost.saturating_add(weight);
            let best = dist.entry(next).or_insert(INFINITE);
            if candidate < *best {
                *best = candidate;
                previous.insert(next, node);
                frontier.push(Reverse((candidate, next)));
            }
        }
    }

    debug!("Dijkstra from {}: settled {} of {} camps", source, settled, dist.len());

    Ok(ShortestPaths {
        source,
        distances: DistanceTable(dist),
        previous,
    })
}
