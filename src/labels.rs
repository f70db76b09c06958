use std::collections::HashMap;

/// Ordered mapping from class label name to integer class index.
///
/// Labels are registered in capture-file discovery order and the first
/// label gets index 0. The order is part of the emitted artifact, so it
/// must never be re-sorted.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    /// Map from label name to index
    index_by_name: HashMap<String, u32>,
    /// Names in discovery order, indexed by label index
    names: Vec<String>,
}

impl LabelTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered labels
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if the table contains no labels
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Register a label, returning its index.
    /// Re-registering an existing label returns the index it already has.
    pub fn register(&mut self, name: &str) -> u32 {
        if let Some(&index) = self.index_by_name.get(name) {
            index
        } else {
            let index = self.names.len() as u32;
            self.index_by_name.insert(name.to_string(), index);
            self.names.push(name.to_string());
            index
        }
    }

    /// Index of a registered label, exact match only
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.index_by_name.get(name).copied()
    }

    /// Label name for an index
    pub fn name(&self, index: u32) -> Option<&str> {
        self.names.get(index as usize).map(String::as_str)
    }

    /// Iterate over all (name, index) pairs in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.as_str(), index as u32))
    }
}
