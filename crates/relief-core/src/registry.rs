//! Camp registry: the authoritative set of camps, keyed by id

use crate::error::{GraphError, Result};
use crate::model::{Camp, CampId, Need, Resource};
use std::collections::BTreeMap;
use tracing::debug;

/// Registered camps, iterated in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct CampRegistry {
    camps: BTreeMap<CampId, Camp>,
}

impl CampRegistry {
    pub fn new() -> Self {
        CampRegistry {
            camps: BTreeMap::new(),
        }
    }

    /// Insert a camp, replacing any earlier record with the same id.
    /// Returns the replaced record.
    pub fn register(&mut self, camp: Camp) -> Option<Camp> {
        let id = camp.id;
        let previous = self.camps.insert(id, camp);
        if previous.is_some() {
            debug!("Camp {} re-registered, previous record replaced", id);
        } else {
            debug!("Camp {} registered", id);
        }
        previous
    }

    /// Look up a camp by id.
    pub fn lookup(&self, id: CampId) -> Option<&Camp> {
        self.camps.get(&id)
    }

    fn lookup_mut(&mut self, id: CampId) -> Result<&mut Camp> {
        self.camps.get_mut(&id).ok_or(GraphError::UnknownId(id))
    }

    pub fn contains(&self, id: CampId) -> bool {
        self.camps.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.camps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.camps.is_empty()
    }

    /// All camp ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = CampId> + '_ {
        self.camps.keys().copied()
    }

    /// All camps, ascending by id.
    pub fn iter(&self) -> impl Iterator<Item = &Camp> {
        self.camps.values()
    }

    pub fn need(&self, id: CampId) -> Result<Need> {
        self.lookup(id)
            .map(|camp| camp.need)
            .ok_or(GraphError::UnknownId(id))
    }

    pub fn set_need(&mut self, id: CampId, need: Need) -> Result<()> {
        self.lookup_mut(id)?.need = need;
        debug!("Camp {} need set to {}", id, need);
        Ok(())
    }

    /// Append a resource entry; earlier entries with the same name are kept.
    pub fn add_resource(&mut self, id: CampId, name: impl Into<String>, quantity: i64) -> Result<()> {
        let name = name.into();
        debug!("Camp {} records {} x {}", id, quantity, name);
        self.lookup_mut(id)?.resources.push(Resource { name, quantity });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = CampRegistry::new();
        assert!(registry.register(Camp::new(CampId(3), "North", "Hill Rd", "555")).is_none());

        let camp = registry.lookup(CampId(3)).unwrap();
        assert_eq!(camp.name, "North");
        assert_eq!(camp.need, 0);
        assert!(registry.lookup(CampId(4)).is_none());
    }

    #[test]
    fn test_reregister_resets_need_and_resources() {
        let mut registry = CampRegistry::new();
        registry.register(Camp::new(CampId(1), "Old", "a", "b"));
        registry.set_need(CampId(1), 7).unwrap();
        registry.add_resource(CampId(1), "water", 40).unwrap();

        let previous = registry.register(Camp::new(CampId(1), "New", "c", "d"));
        assert_eq!(previous.map(|c| c.name), Some("Old".to_string()));

        let camp = registry.lookup(CampId(1)).unwrap();
        assert_eq!(camp.name, "New");
        assert_eq!(camp.need, 0);
        assert!(camp.resources.is_empty());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_need_on_unknown_camp() {
        let mut registry = CampRegistry::new();
        assert_eq!(registry.need(CampId(9)), Err(GraphError::UnknownId(CampId(9))));
        assert_eq!(
            registry.set_need(CampId(9), 1),
            Err(GraphError::UnknownId(CampId(9)))
        );
    }

    #[test]
    fn test_resources_keep_order() {
        let mut registry = CampRegistry::new();
        registry.register(Camp::new(CampId(2), "South", "", ""));
        registry.add_resource(CampId(2), "rice", 10).unwrap();
        registry.add_resource(CampId(2), "blankets", 3).unwrap();
        registry.add_resource(CampId(2), "rice", 5).unwrap();

        let names: Vec<_> = registry
            .lookup(CampId(2))
            .unwrap()
            .resources
            .iter()
            .map(|r| (r.name.as_str(), r.quantity))
            .collect();
        assert_eq!(names, vec![("rice", 10), ("blankets", 3), ("rice", 5)]);
    }

    #[test]
    fn test_ids_are_ascending() {
        let mut registry = CampRegistry::new();
        for id in [5, 1, 3] {
            registry.register(Camp::new(CampId(id), "", "", ""));
        }
        let ids: Vec<_> = registry.ids().collect();
        assert_eq!(ids, vec![CampId(1), CampId(3), CampId(5)]);
    }
}
