//! Process-wide engine, set once at startup.

use std::path::Path;
use std::sync::OnceLock;

use aura_config::AuraConfig;
use aura_core::Engine;

use crate::error::AuraError;

/// The engine plus the configuration it was built from.
#[derive(Debug)]
pub(crate) struct Runtime {
    pub(crate) engine: Engine,
    pub(crate) config: AuraConfig,
}

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Build the global engine from `config`.
///
/// The provider strategy is chosen here, once, for the life of the
/// process. A second call fails with [`AuraError::AlreadyInitialized`].
pub fn init(config: AuraConfig) -> Result<(), AuraError> {
    if RUNTIME.get().is_some() {
        return Err(AuraError::AlreadyInitialized);
    }
    config.validate()?;
    let engine = Engine::new(config.engine_config())?;
    RUNTIME
        .set(Runtime { engine, config })
        .map_err(|_| AuraError::AlreadyInitialized)?;
    tracing::debug!("global engine initialized");
    Ok(())
}

/// Load configuration from `path` (if any) and the environment, then
/// [`init`].
pub fn init_from_env(path: Option<&Path>) -> Result<(), AuraError> {
    init(AuraConfig::load(path)?)
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}

pub(crate) fn runtime() -> Result<&'static Runtime, AuraError> {
    RUNTIME.get().ok_or(AuraError::NotInitialized)
}

/// The global engine.
pub fn engine() -> Result<&'static Engine, AuraError> {
    Ok(&runtime()?.engine)
}

/// The configuration the global engine was built from.
pub fn config() -> Result<&'static AuraConfig, AuraError> {
    Ok(&runtime()?.config)
}
