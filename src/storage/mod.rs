/// Storage layer for persisting habit data
///
/// The habit list lives in a single key-value slot, the way a browser keeps
/// it in local storage. `KeyValueStore` is the slot abstraction; SQLite and an
/// in-memory map implement it. `HabitPersistence` sits on top and owns the
/// load-with-fallback / best-effort-save policy.

pub mod memory;
pub mod migrations;
pub mod persistence;
pub mod sqlite;

// Re-export the main storage types
pub use memory::MemoryStore;
pub use persistence::{HabitPersistence, STORAGE_KEY};
pub use sqlite::SqliteStore;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("Stored data is incompatible: {0}")]
    Incompatible(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Migration error: {0}")]
    Migration(String),
}

/// A durable string-to-string slot store
///
/// Methods take `&self`; implementations that need mutation use interior
/// mutability since everything runs on one thread.
pub trait KeyValueStore {
    /// Read the value under `key`, `Ok(None)` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Erase `key`; erasing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
