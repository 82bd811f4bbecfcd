/// Tool for marking a habit done or not done on a day
///
/// This module implements the habit_toggle MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{day_key, format_for_display, DomainError, HabitId};
use crate::storage::KeyValueStore;
use crate::tools::resolve_date;
use crate::tracker::HabitTracker;

/// Parameters for toggling a habit's completion
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ToggleParams {
    /// ID of the habit to toggle
    pub habit_id: String,
    /// Day to toggle (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
}

/// Response from toggling a habit
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub habit_id: String,
    pub date: String,
    /// New state for the day, None if the habit doesn't exist
    pub completed: Option<bool>,
    pub message: String,
}

/// Flip one habit's completion for one day
pub fn toggle_habit<S: KeyValueStore>(
    tracker: &mut HabitTracker<S>,
    params: ToggleParams,
) -> Result<ToggleResponse, DomainError> {
    let date = resolve_date(params.date.as_deref())?;
    let id = HabitId::from_string(params.habit_id);

    let store = tracker.toggle_completion(&id, date);
    let habit = store.get_habit(&id);
    let completed = habit.map(|h| h.is_completed_on(date));

    let message = match habit {
        Some(h) if h.is_completed_on(date) => {
            format!("Marked '{}' done for {}.", h.name, format_for_display(date))
        }
        Some(h) => format!("Marked '{}' not done for {}.", h.name, format_for_display(date)),
        None => "No such habit.".to_string(),
    };

    Ok(ToggleResponse {
        habit_id: id.to_string(),
        date: day_key(date),
        completed,
        message,
    })
}
