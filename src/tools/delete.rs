/// Tool for deleting habits
///
/// This module implements the habit_delete MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::HabitId;
use crate::storage::KeyValueStore;
use crate::tracker::HabitTracker;

/// Parameters for deleting a habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteHabitParams {
    /// ID of the habit to delete
    pub habit_id: String,
}

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub deleted: bool,
    pub habit_count: usize,
    pub message: String,
}

/// Permanently remove a habit and its history; unknown ids are ignored
pub fn delete_habit<S: KeyValueStore>(
    tracker: &mut HabitTracker<S>,
    params: DeleteHabitParams,
) -> DeleteHabitResponse {
    let id = HabitId::from_string(params.habit_id);
    let name = tracker.store().get_habit(&id).map(|h| h.name.clone());
    let store = tracker.delete_habit(&id);

    DeleteHabitResponse {
        deleted: name.is_some(),
        habit_count: store.len(),
        message: match name {
            Some(name) => format!("Deleted habit '{}'.", name),
            None => "Nothing deleted.".to_string(),
        },
    }
}
