use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use anyhow::{Context, anyhow};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::task::Task;

pub const DEFAULT_TASKS_KEY: &str = "tasks";
pub const DEFAULT_THEME_KEY: &str = "theme";

/// Synchronous string key/value storage, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub tasks: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: DEFAULT_TASKS_KEY.to_string(),
            theme: DEFAULT_THEME_KEY.to_string(),
        }
    }
}

/// In-memory backend. Clones share the same map, so a test can keep a
/// handle while a session owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<BTreeMap<String, String>>>,
    fail_reads: Rc<Cell<bool>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Raw stored text, bypassing failure switches.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        if self.fail_reads.get() {
            return Err(anyhow!("storage unavailable"));
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        if self.fail_writes.get() {
            return Err(anyhow!("storage quota exceeded"));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-encoding adapter over a [`KeyValueStore`].
///
/// `try_load` and `try_save` report failures; `load` and `save` are the
/// public contract and discard them after logging. Reads fall back to the
/// caller's default and writes are never retried, so the in-memory state
/// stays authoritative for the session.
#[derive(Debug, Clone)]
pub struct PersistentStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// `Ok(None)` when the key is absent or holds an empty string.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Option<T>> {
        let raw = self
            .backend
            .get_item(key)
            .with_context(|| format!("failed reading storage key {key}"))?;
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            return Ok(None);
        };

        let value = serde_json::from_str(&raw)
            .with_context(|| format!("failed parsing storage key {key}"))?;
        Ok(Some(value))
    }

    pub fn try_save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string(value)
            .with_context(|| format!("failed serializing storage key {key}"))?;
        self.backend
            .set_item(key, &json)
            .with_context(|| format!("failed writing storage key {key}"))
    }

    #[tracing::instrument(skip(self, default))]
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                debug!(key, "storage key absent, using default");
                default
            }
            Err(err) => {
                warn!(key, error = %format!("{err:#}"), "storage read failed, using default");
                default
            }
        }
    }

    #[tracing::instrument(skip(self, value))]
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_save(key, value) {
            warn!(key, error = %format!("{err:#}"), "storage write dropped");
        }
    }

    /// Loads the task list, dropping blank records and repeated ids.
    #[tracing::instrument(skip(self))]
    pub fn load_tasks(&self, key: &str) -> Vec<Task> {
        let loaded: Vec<Task> = self.load(key, Vec::new());
        let before = loaded.len();

        let mut seen = BTreeSet::new();
        let tasks: Vec<Task> = loaded
            .into_iter()
            .filter(|task| task.has_text() && seen.insert(task.id.clone()))
            .collect();

        if tasks.len() != before {
            warn!(
                key,
                before,
                after = tasks.len(),
                "dropped invalid stored tasks"
            );
        }
        debug!(key, count = tasks.len(), "loaded tasks");
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_counts_as_absent() {
        let store = PersistentStore::new(MemoryStore::new().with_item("theme", ""));
        let loaded: Option<String> = store.try_load("theme").expect("load empty");
        assert_eq!(loaded, None);
    }

    #[test]
    fn read_failure_is_reported_by_try_load() {
        let backend = MemoryStore::new().with_item("tasks", "[]");
        backend.set_fail_reads(true);
        let store = PersistentStore::new(backend);
        assert!(store.try_load::<Vec<Task>>("tasks").is_err());
        assert!(store.load::<Vec<Task>>("tasks", vec![]).is_empty());
    }

    #[test]
    fn write_failure_is_reported_by_try_save_and_swallowed_by_save() {
        let backend = MemoryStore::new();
        backend.set_fail_writes(true);
        let store = PersistentStore::new(backend.clone());

        assert!(store.try_save("theme", "dark").is_err());
        store.save("theme", "dark");
        assert_eq!(backend.raw("theme"), None);
    }

    #[test]
    fn load_tasks_drops_blank_and_duplicate_records() {
        let raw = r#"[
            {"id":"a","text":"Keep me","completed":false},
            {"id":"b","text":"   ","completed":false},
            {"id":"a","text":"Duplicate","completed":true}
        ]"#;
        let store = PersistentStore::new(MemoryStore::new().with_item("tasks", raw));
        let tasks = store.load_tasks("tasks");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Keep me");
    }
}
