//! Error types for chart and report computation.

use aura_core::EngineError;
use aura_time::TimeError;
use thiserror::Error;

/// Errors from chart assembly and the derived layers built on it.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Error from the position engine.
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    /// Error from instant construction or conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
