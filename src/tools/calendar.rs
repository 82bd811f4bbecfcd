/// Tool for the calendar grid view and its cell tooltips
///
/// This module implements the habit_calendar and habit_tooltip MCP tools.
/// The grid has one column per day of the tracker's window and one row per
/// habit.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{
    day_key, day_of_week, format_for_display, is_weekend, DomainError, Habit, HabitId, HabitStore,
};
use crate::storage::KeyValueStore;
use crate::tools::resolve_date;
use crate::tracker::HabitTracker;

/// Parameters for the calendar view
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct CalendarParams {
    /// Last day of the window (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
}

/// Parameters for a single cell's tooltip
#[derive(Debug, Deserialize, JsonSchema)]
pub struct TooltipParams {
    /// ID of the habit
    pub habit_id: String,
    /// Day of the cell (YYYY-MM-DD)
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct CalendarColumn {
    pub date: String,
    pub label: String,
    pub weekday: &'static str,
    pub weekend: bool,
}

#[derive(Debug, Serialize)]
pub struct CalendarCell {
    pub date: String,
    pub completed: bool,
    pub tooltip: String,
}

#[derive(Debug, Serialize)]
pub struct CalendarRow {
    pub habit_id: String,
    pub name: String,
    pub cells: Vec<CalendarCell>,
    pub completions: usize,
}

#[derive(Debug, Serialize)]
pub struct CalendarGrid {
    pub columns: Vec<CalendarColumn>,
    pub rows: Vec<CalendarRow>,
}

/// Hover text for one habit on one day
pub fn cell_tooltip(habit: &Habit, date: NaiveDate) -> String {
    let state = if habit.is_completed_on(date) { "done" } else { "not done" };
    format!("{} {}: {}", habit.name, format_for_display(date), state)
}

/// Tooltip text for `id` on `date`, None for an unknown habit
pub fn tooltip_for(store: &HabitStore, id: &HabitId, date: NaiveDate) -> Option<String> {
    store.get_habit(id).map(|habit| cell_tooltip(habit, date))
}

impl CalendarGrid {
    pub fn build(store: &HabitStore, window: &[NaiveDate]) -> Self {
        let columns = window
            .iter()
            .map(|&date| CalendarColumn {
                date: day_key(date),
                label: format_for_display(date),
                weekday: day_of_week(date),
                weekend: is_weekend(date),
            })
            .collect();

        let rows = store
            .iter()
            .map(|habit| CalendarRow {
                habit_id: habit.id.to_string(),
                name: habit.name.clone(),
                cells: window
                    .iter()
                    .map(|&date| CalendarCell {
                        date: day_key(date),
                        completed: habit.is_completed_on(date),
                        tooltip: cell_tooltip(habit, date),
                    })
                    .collect(),
                completions: habit.completions_within(window),
            })
            .collect();

        Self { columns, rows }
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "No habits yet. Add one to get started.".to_string();
        }

        let name_width = self.rows.iter().map(|row| row.name.chars().count()).max().unwrap_or(0);
        let header: String = self
            .columns
            .iter()
            .map(|col| if col.weekend { col.weekday.to_uppercase() } else { col.weekday.to_string() })
            .collect::<Vec<_>>()
            .join(" ");

        let mut out = match (self.columns.first(), self.columns.last()) {
            (Some(first), Some(last)) => format!("{} to {}\n", first.date, last.date),
            _ => String::new(),
        };
        out.push_str(&format!("{:width$}  {}\n", "", header, width = name_width));

        for row in &self.rows {
            let cells: String = row
                .cells
                .iter()
                .map(|cell| if cell.completed { " # " } else { " . " })
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!(
                "{:width$}  {}  {}/{}\n",
                row.name,
                cells,
                row.completions,
                row.cells.len(),
                width = name_width
            ));
        }
        out
    }
}

pub fn get_calendar<S: KeyValueStore>(
    tracker: &HabitTracker<S>,
    params: CalendarParams,
) -> Result<CalendarGrid, DomainError> {
    let reference = resolve_date(params.date.as_deref())?;
    Ok(CalendarGrid::build(tracker.store(), &tracker.window_dates(reference)))
}

pub fn get_tooltip<S: KeyValueStore>(
    tracker: &HabitTracker<S>,
    params: TooltipParams,
) -> Result<Option<String>, DomainError> {
    let date = resolve_date(Some(&params.date))?;
    let id = HabitId::from_string(params.habit_id);
    Ok(tooltip_for(tracker.store(), &id, date))
}
