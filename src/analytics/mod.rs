/// Aggregate statistics over a date window
///
/// Everything here is a direct containment scan (habits × window days). The
/// store holds tens of habits and the window tens of days, so no index is kept.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Habit, HabitStore};

/// Completions of every habit that fall inside `window`
pub fn total_completions(store: &HabitStore, window: &[NaiveDate]) -> usize {
    store.iter().map(|habit| habit.completions_within(window)).sum()
}

/// Share of habit-days completed in `window`, as a percentage to one decimal
///
/// Zero when there are no habits or the window is empty.
pub fn average_completion_rate(store: &HabitStore, window: &[NaiveDate]) -> f64 {
    let possible = store.len() * window.len();
    if possible == 0 {
        return 0.0;
    }
    percentage(total_completions(store, window), possible)
}

/// Completion rate for a single habit over `window`
pub fn habit_completion_rate(habit: &Habit, window: &[NaiveDate]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    percentage(habit.completions_within(window), window.len())
}

fn percentage(done: usize, possible: usize) -> f64 {
    let raw = done as f64 / possible as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Per-habit slice of the window statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitWindowStats {
    pub habit_id: String,
    pub name: String,
    pub completions: usize,
    pub completion_rate: f64,
}

/// Summary of the whole store over one window
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowStats {
    pub window_days: usize,
    pub habit_count: usize,
    pub total_completions: usize,
    pub average_completion_rate: f64,
    pub habits: Vec<HabitWindowStats>,
}

impl WindowStats {
    pub fn compute(store: &HabitStore, window: &[NaiveDate]) -> Self {
        let habits = store
            .iter()
            .map(|habit| HabitWindowStats {
                habit_id: habit.id.to_string(),
                name: habit.name.clone(),
                completions: habit.completions_within(window),
                completion_rate: habit_completion_rate(habit, window),
            })
            .collect();

        Self {
            window_days: window.len(),
            habit_count: store.len(),
            total_completions: total_completions(store, window),
            average_completion_rate: average_completion_rate(store, window),
            habits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{date_window, parse_day, HabitId};

    fn day(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    fn two_habit_store() -> HabitStore {
        HabitStore::from_habits(vec![
            Habit::from_existing(
                HabitId::from("a"),
                "A".to_string(),
                [day("2024-03-01"), day("2024-03-09"), day("2024-03-10")],
            ),
            Habit::from_existing(HabitId::from("b"), "B".to_string(), [day("2024-03-01")]),
        ])
    }

    #[test]
    fn test_window_totals_and_rate() {
        let store = two_habit_store();
        let window = date_window(3, day("2024-03-10"));

        assert_eq!(total_completions(&store, &window), 2);
        assert_eq!(average_completion_rate(&store, &window), 33.3);
    }

    #[test]
    fn test_empty_store_rate_is_zero() {
        let window = date_window(7, day("2024-03-10"));
        let rate = average_completion_rate(&HabitStore::new(), &window);

        assert_eq!(rate, 0.0);
        assert!(!rate.is_nan());
    }

    #[test]
    fn test_empty_window_rate_is_zero() {
        assert_eq!(average_completion_rate(&two_habit_store(), &[]), 0.0);
    }

    #[test]
    fn test_window_stats_per_habit() {
        let stats = WindowStats::compute(&two_habit_store(), &date_window(3, day("2024-03-10")));

        assert_eq!(stats.window_days, 3);
        assert_eq!(stats.habit_count, 2);
        assert_eq!(stats.habits[0].completions, 2);
        assert_eq!(stats.habits[0].completion_rate, 66.7);
        assert_eq!(stats.habits[1].completions, 0);
        assert_eq!(stats.habits[1].completion_rate, 0.0);
    }
}
