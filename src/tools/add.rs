/// Tool for adding habits
///
/// This module implements the habit_add MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;
use crate::tracker::HabitTracker;

/// Parameters for adding a habit
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddHabitParams {
    /// Name of the habit; surrounding whitespace is trimmed
    pub name: String,
}

/// Response from adding a habit
#[derive(Debug, Serialize)]
pub struct AddHabitResponse {
    pub added: bool,
    pub habit_id: Option<String>,
    pub habit_count: usize,
    pub message: String,
}

/// Add a habit; a blank name leaves the list as it was
pub fn add_habit<S: KeyValueStore>(
    tracker: &mut HabitTracker<S>,
    params: AddHabitParams,
) -> AddHabitResponse {
    let before = tracker.store().len();
    let store = tracker.add_habit(&params.name);

    if store.len() == before {
        return AddHabitResponse {
            added: false,
            habit_id: None,
            habit_count: before,
            message: "Nothing added.".to_string(),
        };
    }

    // add_habit appends, so the new habit is last
    let habit = store.habits().last();
    AddHabitResponse {
        added: true,
        habit_id: habit.map(|h| h.id.to_string()),
        habit_count: store.len(),
        message: match habit {
            Some(h) => format!("Added habit '{}'.", h.name),
            None => "Added habit.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{HabitPersistence, MemoryStore};

    fn tracker() -> HabitTracker<MemoryStore> {
        HabitTracker::open(HabitPersistence::new(MemoryStore::new()), 7)
    }

    #[test]
    fn test_add_reports_new_id() {
        let mut tracker = tracker();
        let response = add_habit(&mut tracker, AddHabitParams { name: " Yoga ".to_string() });

        assert!(response.added);
        assert_eq!(response.habit_count, 4);
        let id = response.habit_id.unwrap();
        assert_eq!(tracker.store().habits()[3].id.as_str(), id);
        assert_eq!(response.message, "Added habit 'Yoga'.");
    }

    #[test]
    fn test_blank_add_reports_nothing() {
        let mut tracker = tracker();
        let response = add_habit(&mut tracker, AddHabitParams { name: "  ".to_string() });

        assert!(!response.added);
        assert_eq!(response.habit_id, None);
        assert_eq!(tracker.store().len(), 3);
    }
}
