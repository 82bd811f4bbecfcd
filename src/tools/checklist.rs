/// Tool for the daily checklist view
///
/// This module implements the habit_checklist MCP tool: one row per habit
/// with its state for a single day.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{day_key, format_for_display, DomainError, HabitStore, Streak};
use crate::storage::KeyValueStore;
use crate::tools::resolve_date;
use crate::tracker::HabitTracker;

/// Parameters for the checklist view
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ChecklistParams {
    /// Day to show (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistRow {
    pub habit_id: String,
    pub name: String,
    pub completed: bool,
    pub current_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct ChecklistView {
    pub date: String,
    pub label: String,
    pub rows: Vec<ChecklistRow>,
    pub completed_count: usize,
}

impl ChecklistView {
    pub fn build(store: &HabitStore, date: NaiveDate) -> Self {
        let rows: Vec<ChecklistRow> = store
            .iter()
            .map(|habit| ChecklistRow {
                habit_id: habit.id.to_string(),
                name: habit.name.clone(),
                completed: habit.is_completed_on(date),
                current_streak: Streak::calculate(habit, date).current_streak,
            })
            .collect();
        let completed_count = rows.iter().filter(|row| row.completed).count();

        Self {
            date: day_key(date),
            label: format_for_display(date),
            rows,
            completed_count,
        }
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "No habits yet. Add one to get started.".to_string();
        }

        let mut out = format!(
            "{}: {} of {} done\n",
            self.label,
            self.completed_count,
            self.rows.len()
        );
        for row in &self.rows {
            let mark = if row.completed { "[x]" } else { "[ ]" };
            out.push_str(&format!("{} {} ({})", mark, row.name, row.habit_id));
            if row.current_streak > 1 {
                out.push_str(&format!(" streak {}", row.current_streak));
            }
            out.push('\n');
        }
        out
    }
}

pub fn get_checklist<S: KeyValueStore>(
    tracker: &HabitTracker<S>,
    params: ChecklistParams,
) -> Result<ChecklistView, DomainError> {
    let date = resolve_date(params.date.as_deref())?;
    Ok(ChecklistView::build(tracker.store(), date))
}
