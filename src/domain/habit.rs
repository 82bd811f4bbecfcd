/// Habit entity and its completion set
///
/// A habit is a name plus the set of days it was done. Every change produces
/// a new value; nothing here mutates a habit that someone else may hold.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId};

/// Something the user wants to do every day
///
/// Serialized as `{ "id", "name", "completedDates" }`. Unknown fields are
/// ignored and a missing `completedDates` reads as empty, so older or newer
/// saved shapes still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// Display name, trimmed at creation
    pub name: String,
    /// Days this habit was marked done
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
}

impl Habit {
    /// Create a new habit with a fresh id and nothing completed
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        Ok(Self {
            id: HabitId::new(),
            name: name.to_string(),
            completed_dates: BTreeSet::new(),
        })
    }

    /// Rebuild a habit from stored data without validation
    pub fn from_existing(
        id: HabitId,
        name: String,
        completed_dates: impl IntoIterator<Item = NaiveDate>,
    ) -> Self {
        Self {
            id,
            name,
            completed_dates: completed_dates.into_iter().collect(),
        }
    }

    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// A copy of this habit with `date` flipped in or out of the completion set
    pub fn with_toggled(&self, date: NaiveDate) -> Self {
        let mut next = self.clone();
        if !next.completed_dates.remove(&date) {
            next.completed_dates.insert(date);
        }
        next
    }

    /// How many of the given days this habit was completed on
    pub fn completions_within(&self, window: &[NaiveDate]) -> usize {
        window.iter().filter(|date| self.is_completed_on(**date)).count()
    }

    pub fn total_completions(&self) -> usize {
        self.completed_dates.len()
    }

    pub fn last_completed(&self) -> Option<NaiveDate> {
        self.completed_dates.iter().next_back().copied()
    }

    fn validate_name(name: &str) -> Result<&str, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        Ok(trimmed)
    }
}
