//! Name index for employee lookups
//!
//! Maps a name to every registered employee carrying it. Buckets keep
//! insertion order so lookups return employees in the order they were named.

use crate::graph::EmployeeId;
use std::collections::BTreeMap;

/// Index from employee name to the employees sharing it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex {
    /// Name -> employee ids, in registration order
    index: BTreeMap<String, Vec<EmployeeId>>,
}

impl NameIndex {
    pub fn new() -> Self {
        Self {
            index: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, id: EmployeeId) {
        let bucket = self.index.entry(name.to_string()).or_default();
        if !bucket.contains(&id) {
            bucket.push(id);
        }
    }

    pub fn remove(&mut self, name: &str, id: EmployeeId) {
        if let Some(bucket) = self.index.get_mut(name) {
            bucket.retain(|existing| *existing != id);
            if bucket.is_empty() {
                self.index.remove(name);
            }
        }
    }

    pub fn get(&self, name: &str) -> &[EmployeeId] {
        self.index.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, name: &str, id: EmployeeId) -> bool {
        self.get(name).contains(&id)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of indexed employees across all names
    pub fn entry_count(&self) -> usize {
        self.index.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EmployeeId])> {
        self.index
            .iter()
            .map(|(name, ids)| (name.as_str(), ids.as_slice()))
    }

    pub fn clear(&mut self) {
        self.index.clear();
    }
}
