/// Tools for inspecting and resetting saved data
///
/// This module implements the storage_info and habit_reset MCP tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;
use crate::tracker::HabitTracker;

/// Parameters for storage_info and habit_reset (none)
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct EmptyParams {}

#[derive(Debug, Serialize)]
pub struct StorageInfoResponse {
    pub key: String,
    pub bytes: usize,
    pub habit_count: usize,
    pub message: String,
}

pub fn storage_info<S: KeyValueStore>(tracker: &HabitTracker<S>) -> StorageInfoResponse {
    let key = tracker.persistence().key().to_string();
    let bytes = tracker.persisted_size();

    StorageInfoResponse {
        message: format!("'{}' holds {} bytes.", key, bytes),
        key,
        bytes,
        habit_count: tracker.store().len(),
    }
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub habit_count: usize,
    pub message: String,
}

/// Erase saved data and go back to the default habits
pub fn reset_habits<S: KeyValueStore>(tracker: &mut HabitTracker<S>) -> ResetResponse {
    let store = tracker.reset();

    ResetResponse {
        habit_count: store.len(),
        message: format!("Reset to {} default habits.", store.len()),
    }
}
