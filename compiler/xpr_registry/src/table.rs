//! Insertion-ordered name table.

use rustc_hash::FxHashMap;

/// A name → value map that remembers registration order.
///
/// Replacing an existing name keeps its original position; removing a name
/// shifts later entries down.
#[derive(Clone)]
pub struct Table<T> {
    entries: Vec<(String, T)>,
    index: FxHashMap<String, usize>,
}

impl<T> Table<T> {
    pub fn new() -> Self {
        Table {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Insert or replace. Returns the previous value if `name` was present.
    pub fn insert(&mut self, name: &str, value: T) -> Option<T> {
        if let Some(&slot) = self.index.get(name) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.index.insert(name.to_owned(), self.entries.len());
        self.entries.push((name.to_owned(), value));
        None
    }

    pub fn remove(&mut self, name: &str) -> Option<T> {
        let slot = self.index.remove(name)?;
        let (_, value) = self.entries.remove(slot);
        for (_, position) in self.index.iter_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        Some(value)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}
