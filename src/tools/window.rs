/// Tool for resizing the calendar window
///
/// This module implements the habit_window MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;
use crate::tracker::{HabitTracker, MAX_WINDOW_DAYS};

/// Parameters for changing the calendar window
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WindowParams {
    /// Number of days to show, typically 7 or 30; zero or less shows nothing,
    /// and anything above 366 shows 366
    pub days: i64,
}

#[derive(Debug, Serialize)]
pub struct WindowResponse {
    pub window_days: u32,
    pub message: String,
}

pub fn change_window<S: KeyValueStore>(
    tracker: &mut HabitTracker<S>,
    params: WindowParams,
) -> WindowResponse {
    let days = u32::try_from(params.days.clamp(0, i64::from(MAX_WINDOW_DAYS))).unwrap_or(MAX_WINDOW_DAYS);
    tracker.change_window(days);

    WindowResponse {
        window_days: tracker.window_days(),
        message: format!("Calendar now shows the last {} days.", tracker.window_days()),
    }
}
