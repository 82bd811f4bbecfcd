/// Streak calculation for a habit's completion set
///
/// Streaks count consecutive calendar days. The current streak is still alive
/// if today isn't done yet but yesterday was.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::domain::{Habit, HabitId};

/// Calculated streak information for a habit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Streak {
    /// Which habit this streak data is for
    pub habit_id: HabitId,
    /// Consecutive days completed up to today (or yesterday)
    pub current_streak: u32,
    /// Best run of consecutive days ever recorded
    pub longest_streak: u32,
    /// When the habit was last completed (None if never completed)
    pub last_completed: Option<NaiveDate>,
    /// Total number of days this habit has been completed
    pub total_completions: u32,
}

impl Streak {
    /// Create a streak record with zero values
    pub fn new(habit_id: HabitId) -> Self {
        Self {
            habit_id,
            current_streak: 0,
            longest_streak: 0,
            last_completed: None,
            total_completions: 0,
        }
    }

    /// Calculate streak information for `habit` as seen on `today`
    pub fn calculate(habit: &Habit, today: NaiveDate) -> Self {
        if habit.completed_dates.is_empty() {
            return Self::new(habit.id.clone());
        }

        let current_streak = Self::calculate_current_streak(habit, today);
        let longest_streak = Self::calculate_longest_streak(habit);

        Self {
            habit_id: habit.id.clone(),
            current_streak,
            longest_streak: longest_streak.max(current_streak),
            last_completed: habit.last_completed(),
            total_completions: habit.total_completions() as u32,
        }
    }

    fn calculate_current_streak(habit: &Habit, today: NaiveDate) -> u32 {
        let mut checking = if habit.is_completed_on(today) {
            Some(today)
        } else {
            today.checked_sub_days(Days::new(1))
        };

        let mut streak = 0;
        while let Some(date) = checking {
            if !habit.is_completed_on(date) {
                break;
            }
            streak += 1;
            checking = date.checked_sub_days(Days::new(1));
        }
        streak
    }

    fn calculate_longest_streak(habit: &Habit) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;

        // completed_dates iterates in ascending order
        for &date in &habit.completed_dates {
            let consecutive = previous
                .and_then(|prev| prev.checked_add_days(Days::new(1)))
                .map_or(false, |next| next == date);
            run = if consecutive { run + 1 } else { 1 };
            longest = longest.max(run);
            previous = Some(date);
        }

        longest
    }
}
