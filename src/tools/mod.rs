/// MCP tools for habit management
///
/// Each tool takes the caller's intent, applies it to the tracker, and returns
/// a serializable view plus a short text rendering for the client.

pub mod add;
pub mod calendar;
pub mod checklist;
pub mod delete;
pub mod stats;
pub mod storage;
pub mod toggle;
pub mod window;

// Re-export tool functions for easy access
pub use add::*;
pub use calendar::*;
pub use checklist::*;
pub use delete::*;
pub use stats::*;
pub use storage::*;
pub use toggle::*;
pub use window::*;

use chrono::NaiveDate;

use crate::domain::{parse_day, today, DomainError};

/// The requested day, or today when the caller left it out
pub(crate) fn resolve_date(date: Option<&str>) -> Result<NaiveDate, DomainError> {
    match date {
        Some(text) => parse_day(text),
        None => Ok(today()),
    }
}
