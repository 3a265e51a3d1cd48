//! Unified error type for the convenience API.

use aura_config::ConfigError;
use aura_core::EngineError;
use aura_search::SearchError;
use aura_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuraError {
    /// [`crate::init`] has not been called.
    #[error("aura engine not initialized; call aura_rs::init first")]
    NotInitialized,
    /// [`crate::init`] was called more than once.
    #[error("aura engine already initialized")]
    AlreadyInitialized,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
