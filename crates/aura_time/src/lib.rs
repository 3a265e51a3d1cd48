//! Calendar time to Julian Day conversion.
//!
//! This crate provides:
//! - `UtcTime`, the validated UTC instant used throughout the engine
//! - The standard Gregorian Julian Day algorithm (`calendar_to_jd`)
//! - Timestamp parsing and birth-date reference instants

pub mod error;
pub mod julian;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, hours_from_hms,
};
pub use utc_time::UtcTime;
