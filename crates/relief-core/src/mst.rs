//! Minimum spanning tree (Kruskal)

use crate::edges::EdgeStore;
use crate::model::{Connection, Weight};
use crate::registry::CampRegistry;
use crate::union_find::DisjointSet;
use serde::Serialize;
use tracing::{debug, warn};

/// Result of one Kruskal run. A disconnected network yields a forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningForest {
    /// Chosen connections, in the order Kruskal accepted them.
    pub edges: Vec<Connection>,
    /// Sum of chosen weights, saturating at the unknown-cost sentinel.
    pub total_weight: Weight,
    /// Connected components among registered camps.
    pub components: usize,
}

impl SpanningForest {
    pub fn is_tree(&self) -> bool {
        self.components <= 1
    }
}

/// Build a minimum spanning forest over every registered camp.
///
/// Edges are sorted by weight with a stable sort, so equal weights keep
/// insertion order and repeated runs give identical output.
pub fn kruskal(registry: &CampRegistry, edges: &EdgeStore) -> SpanningForest {
    let mut sorted: Vec<Connection> = edges.connections().to_vec();
    sorted.sort_by_key(|c| c.weight);

    let mut forest = DisjointSet::from_ids(registry.ids());
    let mut chosen = Vec::with_capacity(registry.len().saturating_sub(1));
    let mut total: Weight = 0;

    for edge in sorted {
        match forest.union(edge.src, edge.dest) {
            Ok(true) => {
                total = total.saturating_add(edge.weight);
                chosen.push(edge);
            }
            Ok(false) => {}
            Err(e) => {
                warn!("Skipping connection {} - {}: {}", edge.src, edge.dest, e);
            }
        }
    }

    debug!(
        "Spanning forest: {} edges, weight {}, {} components",
        chosen.len(),
        total,
        forest.set_count()
    );

    SpanningForest {
        edges: chosen,
        total_weight: total,
        components: forest.set_count(),
    }
}
