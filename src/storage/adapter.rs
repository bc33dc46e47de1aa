use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{KeyValueStore, StorageError};

/// Typed access to a [`KeyValueStore`].
///
/// Loads are infallible from the caller's point of view: absence, a read
/// failure and a malformed value all come back as `None`. Saves report
/// errors so the caller can log them.
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Raw string value for `key`, if present and readable.
    pub fn load_raw(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read persisted value");
                None
            }
        }
    }

    /// JSON-decoded value for `key`. Malformed data yields `None`.
    pub fn load_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.load_raw(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding malformed persisted value");
                None
            }
        }
    }

    pub fn load_json_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load_json(key).unwrap_or_default()
    }

    pub fn save_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.set(key, value)
    }

    pub fn save_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            source: e,
        })?;
        self.store.set(key, &encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn persistence() -> (Arc<MemoryStore>, Persistence) {
        let store = Arc::new(MemoryStore::new());
        let persistence = Persistence::new(store.clone());
        (store, persistence)
    }

    #[test]
    fn missing_key_loads_as_none() {
        let (_, p) = persistence();
        assert!(p.load_raw("absent").is_none());
        assert!(p.load_json::<Vec<String>>("absent").is_none());
    }

    #[test]
    fn malformed_json_loads_as_default() {
        let (store, p) = persistence();
        store.set("k", "{not json").unwrap();
        let value: Vec<String> = p.load_json_or_default("k");
        assert!(value.is_empty());
    }

    #[test]
    fn wrong_shape_loads_as_none() {
        let (store, p) = persistence();
        store.set("k", r#"{"movies": []}"#).unwrap();
        assert!(p.load_json::<Vec<String>>("k").is_none());
    }

    #[test]
    fn json_values_survive_a_save() {
        let (_, p) = persistence();
        p.save_json("k", &vec!["a".to_string(), "b".to_string()]).unwrap();
        let value: Vec<String> = p.load_json_or_default("k");
        assert_eq!(value, vec!["a", "b"]);
    }

    #[test]
    fn read_only_store_rejects_saves() {
        let (store, p) = persistence();
        store.set_read_only(true);
        assert!(matches!(p.save_raw("k", "v"), Err(StorageError::ReadOnly)));
    }
}
