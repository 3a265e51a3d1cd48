//! Error types for calendar handling.

use thiserror::Error;

/// Errors from instant construction or timestamp parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is out of range (month 13, February 30, hour 24, ...).
    #[error("invalid calendar date/time: {0}")]
    InvalidCalendar(String),
    /// A timestamp string could not be parsed.
    #[error("cannot parse timestamp: {0}")]
    Parse(String),
}
