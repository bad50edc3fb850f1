//! Disjoint-set forest over camp ids
//!
//! Iterative `find` with path compression and union by rank, so parent
//! chains stay short regardless of how many camps are merged.

use crate::error::{GraphError, Result};
use crate::model::CampId;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: HashMap<CampId, CampId>,
    rank: HashMap<CampId, u32>,
    sets: usize,
}

impl DisjointSet {
    pub fn new() -> Self {
        DisjointSet::default()
    }

    /// One singleton set per id.
    pub fn from_ids(ids: impl IntoIterator<Item = CampId>) -> Self {
        let mut forest = DisjointSet::new();
        for id in ids {
            forest.make_set(id);
        }
        forest
    }

    /// Add `id` as its own root. No-op if already present.
    pub fn make_set(&mut self, id: CampId) {
        if self.parent.contains_key(&id) {
            return;
        }
        self.parent.insert(id, id);
        self.rank.insert(id, 0);
        self.sets += 1;
    }

    /// Root of the set containing `id`.
    pub fn find(&mut self, id: CampId) -> Result<CampId> {
        let mut root = *self.parent.get(&id).ok_or(GraphError::UnknownId(id))?;
        while let Some(&next) = self.parent.get(&root) {
            if next == root {
                break;
            }
            root = next;
        }

        // Point every node on the walked path straight at the root.
        let mut current = id;
        while current != root {
            let next = self.parent[&current];
            self.parent.insert(current, root);
            current = next;
        }
        Ok(root)
    }

    /// Merge the sets containing `x` and `y`.
    /// Returns false when they already share a root.
    pub fn union(&mut self, x: CampId, y: CampId) -> Result<bool> {
        let x_root = self.find(x)?;
        let y_root = self.find(y)?;
        if x_root == y_root {
            return Ok(false);
        }

        let x_rank = self.rank.get(&x_root).copied().unwrap_or(0);
        let y_rank = self.rank.get(&y_root).copied().unwrap_or(0);
        if x_rank < y_rank {
            self.parent.insert(x_root, y_root);
        } else if x_rank > y_rank {
            self.parent.insert(y_root, x_root);
        } else {
            self.parent.insert(y_root, x_root);
            self.rank.insert(x_root, x_rank + 1);
        }
        self.sets -= 1;
        Ok(true)
    }

    pub fn same_set(&mut self, x: CampId, y: CampId) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Number of disjoint sets currently in the forest.
    pub fn set_count(&self) -> usize {
        self.sets
    }
}
