/// Public library interface for the Habit Grid tracker
///
/// This module exports the habit data model, its derived views, the
/// persistence adapter, and the MCP tool server that drives them.

use std::path::PathBuf;
use thiserror::Error;

// Internal modules
mod domain;
mod storage;
mod analytics;
mod tracker;
pub mod tools;
pub mod mcp;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    HabitPersistence, KeyValueStore, MemoryStore, SqliteStore, StorageError, STORAGE_KEY,
};
pub use analytics::{
    average_completion_rate, habit_completion_rate, total_completions, HabitWindowStats,
    WindowStats,
};
pub use tracker::{HabitTracker, SubscriptionId, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};
pub use mcp::McpServer;

/// Errors that can occur during server operation
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Storage error: {0}")]
    Storage(#[from] storage::StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where the habit data lives
#[derive(Debug, Clone, PartialEq)]
pub enum StorageLocation {
    /// A SQLite database file
    Database(PathBuf),
    /// Process memory only; nothing survives exit
    Ephemeral,
}

/// Open a tracker on `location` and serve it over stdin/stdout
///
/// An unopenable database is an error here; once a session is running,
/// storage failures are logged and the session carries on in memory.
pub async fn run_server(location: StorageLocation, window_days: u32) -> Result<(), ServerError> {
    match location {
        StorageLocation::Database(db_path) => {
            tracing::info!("Initializing Habit Grid with database: {:?}", db_path);
            let backend = SqliteStore::new(&db_path)?;
            serve_stdio(backend, window_days).await
        }
        StorageLocation::Ephemeral => {
            tracing::info!("Initializing Habit Grid with in-memory storage");
            serve_stdio(MemoryStore::new(), window_days).await
        }
    }
}

async fn serve_stdio<S: KeyValueStore>(backend: S, window_days: u32) -> Result<(), ServerError> {
    let tracker = HabitTracker::open(HabitPersistence::new(backend), window_days);
    tracing::info!(
        "Server started, {} habits loaded, {}-day window",
        tracker.store().len(),
        tracker.window_days()
    );

    let mut server = McpServer::new(tracker);
    server.run().await
}
