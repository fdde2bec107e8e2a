//! In-memory store
//!
//! Used as the fallback when the data directory is unusable, and as the test fake.

use super::{KeyValueStore, Result};
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("nothing").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn set_then_get_and_overwrite() {
        let mut store = MemoryStore::new();
        store.set("lives", "6").unwrap();
        store.set("lives", "3").unwrap();

        assert_eq!(store.get("lives").unwrap().as_deref(), Some("3"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = MemoryStore::new();
        store.set("outcome", "won").unwrap();
        store.remove("outcome").unwrap();
        store.remove("outcome").unwrap();

        assert_eq!(store.get("outcome").unwrap(), None);
    }

    #[test]
    fn works_through_box_dyn() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
