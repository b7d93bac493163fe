//! Key-value persistence seam for Taxflow
//!
//! The rest of the workspace never talks to a concrete storage technology.
//! Everything goes through [`KeyValueStore`]:
//! - [`MemoryStore`] for tests and ephemeral demo sessions
//! - [`JsonFileStore`] for durable local-first storage (one JSON document,
//!   rewritten whole on every mutation, last-write-wins)
//!
//! Values are opaque strings; callers serialize their own records.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Injected storage boundary
///
/// Mirrors the browser local-storage surface the application was designed
/// around: string keys, string values, prefix enumeration.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value
    fn put(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`; removing an absent key is not an error
    fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// All `(key, value)` pairs whose key starts with `prefix`
    ///
    /// Order is unspecified; callers sort by their own criteria.
    fn list_by_prefix(&self, prefix: &str) -> Result<Vec<(String, String)>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("missing").unwrap(), None);

        store.put("tax_return_a", "{\"v\":1}").unwrap();
        store.put("tax_return_b", "{\"v\":2}").unwrap();
        store.put("session", "{}").unwrap();

        assert_eq!(store.get("tax_return_a").unwrap().as_deref(), Some("{\"v\":1}"));

        let mut keys: Vec<String> = store
            .list_by_prefix("tax_return_")
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        keys.sort();
        assert_eq!(keys, vec!["tax_return_a", "tax_return_b"]);

        store.delete("tax_return_a").unwrap();
        assert_eq!(store.get("tax_return_a").unwrap(), None);
        // Deleting again is fine
        store.delete("tax_return_a").unwrap();
    }

    #[test]
    fn memory_store_contract() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn file_store_contract() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("data.json")).unwrap();
        exercise(&store);
    }
}
