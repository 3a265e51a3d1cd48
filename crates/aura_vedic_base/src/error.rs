//! Error types for Vedic table lookups.

use thiserror::Error;

/// Errors from parsing sign or body names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// The name matches neither a Sanskrit nor a Western sign name.
    #[error("unknown rashi: {0}")]
    UnknownRashi(String),
    /// The name matches neither a Sanskrit nor an English graha name.
    #[error("unknown graha: {0}")]
    UnknownGraha(String),
}
