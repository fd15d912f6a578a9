//! Name-keyed lookup tables
//!
//! Elements and containers are indexed by the value of their tag
//! attribute. Iteration follows first-insertion order; a later entry with
//! the same name replaces the value in place.

use std::collections::HashMap;

use ancillary_dom::{DomTree, NodeId};

/// Insertion-ordered map from name to value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameIndex<T> {
    entries: Vec<(String, T)>,
    by_name: HashMap<String, usize>,
}

impl<T> NameIndex<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Insert or overwrite, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        let name = name.into();
        if let Some(&index) = self.by_name.get(&name) {
            return Some(std::mem::replace(&mut self.entries[index].1, value));
        }
        self.by_name.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
        None
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<T> Default for NameIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: Into<String>> FromIterator<(S, T)> for NameIndex<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (name, value) in iter {
            index.insert(name, value);
        }
        index
    }
}

/// Index every descendant of `root` that carries `attribute` with a
/// non-empty value. `root` itself is not considered. Duplicate names keep
/// the node that comes last in document order.
pub fn index_tagged(tree: &DomTree, root: NodeId, attribute: &str) -> NameIndex<NodeId> {
    let mut index = NameIndex::new();

    for (id, _) in tree.descendants(root) {
        match tree.get_attribute(id, attribute) {
            Some(name) if !name.is_empty() => {
                if index.insert(name, id).is_some() {
                    tracing::debug!("Duplicate {}=\"{}\", keeping {:?}", attribute, name, id);
                }
            }
            _ => {}
        }
    }

    index
}
