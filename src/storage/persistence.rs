/// Habit list persistence on top of a key-value slot
///
/// Persistence is best-effort. `load` always produces a usable store and
/// `save`/`clear` never fail; problems are logged and the in-memory store
/// stays authoritative. The `try_*` variants expose the underlying errors
/// for callers that want them.

use crate::domain::HabitStore;
use crate::storage::{KeyValueStore, StorageError};

/// Slot name the habit list is stored under
pub const STORAGE_KEY: &str = "habit-tracker-data";

pub struct HabitPersistence<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> HabitPersistence<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read and parse the stored list; `Ok(None)` when nothing is stored
    ///
    /// A list in which two habits share an id is rejected as incompatible.
    pub fn try_load(&self) -> Result<Option<HabitStore>, StorageError> {
        let raw = match self.backend.get(&self.key)? {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let store: HabitStore = serde_json::from_str(&raw)?;
        if let Some(id) = store.duplicate_id() {
            return Err(StorageError::Incompatible(format!("habit id '{}' appears more than once", id)));
        }

        Ok(Some(store))
    }

    /// The stored list, or the default habits if it is absent or unreadable
    pub fn load(&self) -> HabitStore {
        match self.try_load() {
            Ok(Some(store)) => {
                tracing::info!("Loaded {} habits from slot '{}'", store.len(), self.key);
                store
            }
            Ok(None) => {
                tracing::info!("No saved habits under '{}', starting with defaults", self.key);
                HabitStore::defaults()
            }
            Err(e) => {
                tracing::warn!("Failed to load habits from '{}', using defaults: {}", self.key, e);
                HabitStore::defaults()
            }
        }
    }

    pub fn try_save(&self, store: &HabitStore) -> Result<(), StorageError> {
        let payload = serde_json::to_string(store)?;
        self.backend.set(&self.key, &payload)
    }

    /// Write `store` under the slot key; returns whether the write landed
    pub fn save(&self, store: &HabitStore) -> bool {
        match self.try_save(store) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to save habits to '{}': {}", self.key, e);
                false
            }
        }
    }

    /// Erase the stored list
    pub fn clear(&self) {
        if let Err(e) = self.backend.remove(&self.key) {
            tracing::error!("Failed to clear '{}': {}", self.key, e);
        }
    }

    /// Byte length of the stored serialized list, 0 if nothing is stored
    pub fn size_of(&self) -> usize {
        match self.backend.get(&self.key) {
            Ok(value) => value.map_or(0, |raw| raw.len()),
            Err(e) => {
                tracing::warn!("Failed to read '{}' for size: {}", self.key, e);
                0
            }
        }
    }
}
