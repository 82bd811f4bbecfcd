/// HabitStore: the ordered collection of habits
///
/// The store is a value. Each operation takes `&self` and returns the next
/// store, leaving the previous snapshot untouched for whoever still reads it.
/// Empty names and unknown ids are not errors; the operation simply returns an
/// equal store.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Habit, HabitId};

/// Names of the habits a fresh installation starts with
pub const DEFAULT_HABIT_NAMES: [&str; 3] = ["Drink water", "Exercise", "Read a book"];

/// Every habit the user tracks, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_habits(habits: Vec<Habit>) -> Self {
        Self { habits }
    }

    /// The starter list used when nothing usable is persisted
    pub fn defaults() -> Self {
        let habits = DEFAULT_HABIT_NAMES
            .iter()
            .filter_map(|name| Habit::new(name).ok())
            .collect();
        Self { habits }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Habit> {
        self.habits.iter()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Append a habit named `name` (trimmed); blank names are ignored
    pub fn add_habit(&self, name: &str) -> Self {
        match Habit::new(name) {
            Ok(habit) => {
                tracing::debug!("Added habit: {} ({})", habit.name, habit.id);
                let mut habits = self.habits.clone();
                habits.push(habit);
                Self { habits }
            }
            Err(e) => {
                tracing::debug!("Ignoring add: {}", e);
                self.clone()
            }
        }
    }

    /// Remove the habit with `id`, if present
    pub fn delete_habit(&self, id: &HabitId) -> Self {
        let habits = self
            .habits
            .iter()
            .filter(|habit| &habit.id != id)
            .cloned()
            .collect();
        Self { habits }
    }

    pub fn get_habit(&self, id: &HabitId) -> Option<&Habit> {
        self.habits.iter().find(|habit| &habit.id == id)
    }

    pub fn contains(&self, id: &HabitId) -> bool {
        self.get_habit(id).is_some()
    }

    /// The first id shared by two habits, if any
    ///
    /// Stores built through `add_habit` never have one; lists read back from
    /// storage might.
    pub fn duplicate_id(&self) -> Option<&HabitId> {
        let mut seen = HashSet::new();
        self.habits
            .iter()
            .map(|habit| &habit.id)
            .find(|id| !seen.insert(*id))
    }

    /// Flip `date` for the habit with `id`; other habits are carried over as-is
    pub fn toggle_completion(&self, id: &HabitId, date: NaiveDate) -> Self {
        let habits = self
            .habits
            .iter()
            .map(|habit| {
                if &habit.id == id {
                    habit.with_toggled(date)
                } else {
                    habit.clone()
                }
            })
            .collect();
        Self { habits }
    }
}

impl<'a> IntoIterator for &'a HabitStore {
    type Item = &'a Habit;
    type IntoIter = std::slice::Iter<'a, Habit>;

    fn into_iter(self) -> Self::IntoIter {
        self.habits.iter()
    }
}
