/// Tool for window statistics
///
/// This module implements the habit_stats MCP tool.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analytics::WindowStats;
use crate::domain::DomainError;
use crate::storage::KeyValueStore;
use crate::tools::resolve_date;
use crate::tracker::HabitTracker;

/// Parameters for window statistics
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct StatsParams {
    /// Last day of the window (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: WindowStats,
    pub message: String,
}

pub fn get_stats<S: KeyValueStore>(
    tracker: &HabitTracker<S>,
    params: StatsParams,
) -> Result<StatsResponse, DomainError> {
    let reference = resolve_date(params.date.as_deref())?;
    let stats = tracker.window_stats(reference);

    let mut message = format!(
        "Last {} days: {} completions across {} habits, {:.1}% average",
        stats.window_days, stats.total_completions, stats.habit_count, stats.average_completion_rate
    );
    for habit in &stats.habits {
        message.push_str(&format!(
            "\n- {}: {} ({:.1}%)",
            habit.name, habit.completions, habit.completion_rate
        ));
    }

    Ok(StatsResponse { stats, message })
}
