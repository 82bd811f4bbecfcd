/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, HabitStore, Streak), the
/// calendar-day helpers the views are built on, and their validation rules.

pub mod calendar;
pub mod habit;
pub mod store;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use calendar::*;
pub use habit::*;
pub use store::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
