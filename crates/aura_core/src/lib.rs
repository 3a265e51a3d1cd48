//! Position engine and ephemeris strategy selection.
//!
//! This crate provides the primary [`Engine`], which owns exactly one
//! [`PositionProvider`] chosen at construction time: the precise strategy
//! backed by an external [`SiderealSource`], or the deterministic
//! [`MeanMotionProvider`]. The choice is made once and never revisited;
//! a precise-source failure at query time is returned as an error, not
//! answered by the fallback.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use aura_time::UtcTime;
use aura_vedic_base::Graha;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mean_motion;
pub mod precise;
pub mod provider;
#[cfg(feature = "swisseph")]
pub mod swe;

pub use mean_motion::{
    MEAN_ELEMENTS, MeanMotionProvider, SYNODIC_WINDOWS, approx_retrograde, mean_tropical_longitude,
};
pub use precise::{PreciseProvider, SiderealSource};
pub use provider::{PositionProvider, ProviderKind, SiderealPoint};

/// Ephemeris directory used when none is configured.
pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";

/// Which strategy [`Engine::new`] should select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    /// Precise if the source is compiled in and its data path exists,
    /// otherwise mean-motion.
    #[default]
    Auto,
    /// Precise or fail with [`EngineError::PreciseUnavailable`].
    Precise,
    /// Always mean-motion.
    Fallback,
}

impl ProviderMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Precise => "precise",
            Self::Fallback => "fallback",
        }
    }
}

impl Display for ProviderMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "precise" => Ok(Self::Precise),
            "fallback" | "mean-motion" => Ok(Self::Fallback),
            _ => Err(EngineError::InvalidConfig(
                "provider must be one of auto, precise, fallback",
            )),
        }
    }
}

/// Engine configuration used at startup time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub provider: ProviderMode,
    /// Ephemeris data directory for the precise source.
    /// `None` uses [`DEFAULT_EPHEMERIS_PATH`].
    pub ephemeris_path: Option<PathBuf>,
}

impl EngineConfig {
    /// Configuration that always selects the mean-motion strategy.
    pub fn fallback() -> Self {
        Self {
            provider: ProviderMode::Fallback,
            ephemeris_path: None,
        }
    }

    /// Effective ephemeris directory.
    pub fn resolved_ephemeris_path(&self) -> &Path {
        self.ephemeris_path
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_EPHEMERIS_PATH))
    }

    fn validate(&self) -> Result<(), EngineError> {
        if let Some(path) = &self.ephemeris_path {
            if path.as_os_str().is_empty() {
                return Err(EngineError::InvalidConfig("ephemeris_path must not be empty"));
            }
        }
        Ok(())
    }
}

/// Core engine errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The active strategy does not compute this body directly.
    #[error("unsupported body: {0}")]
    UnsupportedBody(Graha),
    /// The precise source failed to answer.
    #[error("external ephemeris source error: {0}")]
    ExternalSource(String),
    /// The precise strategy was required but cannot be opened.
    #[error("precise ephemeris unavailable: {0}")]
    PreciseUnavailable(String),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
}

/// Core position engine.
///
/// `Engine` is [`Send`] + [`Sync`] and holds no mutable state, so it can be
/// shared across threads via `Arc<Engine>` or a process-wide static.
pub struct Engine {
    config: EngineConfig,
    provider: Box<dyn PositionProvider>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("provider", &self.provider.kind())
            .finish()
    }
}

impl Engine {
    /// Create a new engine, selecting the position strategy from the config.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let provider: Box<dyn PositionProvider> = match config.provider {
            ProviderMode::Fallback => Box::new(MeanMotionProvider::new()),
            ProviderMode::Precise => open_precise(&config)?,
            ProviderMode::Auto => match open_precise(&config) {
                Ok(p) => p,
                Err(e) => {
                    tracing::debug!(reason = %e, "precise source not available");
                    Box::new(MeanMotionProvider::new())
                }
            },
        };
        tracing::info!(
            mode = %config.provider,
            provider = provider.kind().name(),
            "position provider selected"
        );
        Ok(Self { config, provider })
    }

    /// Engine around an already constructed provider.
    pub fn with_provider(config: EngineConfig, provider: Box<dyn PositionProvider>) -> Self {
        Self { config, provider }
    }

    /// Engine using the mean-motion strategy.
    pub fn fallback() -> Self {
        Self::with_provider(EngineConfig::fallback(), Box::new(MeanMotionProvider::new()))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Which strategy was selected.
    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    /// Julian Day of an instant, via the active strategy.
    pub fn julian_day(&self, t: &UtcTime) -> f64 {
        self.provider.julian_day(t)
    }

    /// Lahiri ayanamsha in degrees.
    pub fn ayanamsa(&self, jd: f64) -> Result<f64, EngineError> {
        self.provider.ayanamsa(jd)
    }

    /// Sidereal longitude and retrograde flag of a directly computed body.
    pub fn position(&self, graha: Graha, jd: f64) -> Result<SiderealPoint, EngineError> {
        if !jd.is_finite() {
            return Err(EngineError::InvalidQuery("jd must be finite"));
        }
        self.provider.position(graha, jd)
    }

    /// Whether the active ayanamsha model is trusted at `jd`.
    pub fn ayanamsa_is_reliable(&self, jd: f64) -> bool {
        self.provider.ayanamsa_is_reliable(jd)
    }
}

#[cfg(feature = "swisseph")]
fn open_precise(config: &EngineConfig) -> Result<Box<dyn PositionProvider>, EngineError> {
    let source = swe::SwissSource::open(config.resolved_ephemeris_path())?;
    Ok(Box::new(PreciseProvider::new(source)?))
}

#[cfg(not(feature = "swisseph"))]
fn open_precise(_config: &EngineConfig) -> Result<Box<dyn PositionProvider>, EngineError> {
    Err(EngineError::PreciseUnavailable(
        "built without the swisseph feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_mode_selects_mean_motion() {
        let engine = Engine::new(EngineConfig::fallback()).unwrap();
        assert_eq!(engine.provider_kind(), ProviderKind::MeanMotion);
    }

    #[cfg(not(feature = "swisseph"))]
    #[test]
    fn auto_without_precise_source_falls_back() {
        let engine = Engine::new(EngineConfig::default()).unwrap();
        assert_eq!(engine.provider_kind(), ProviderKind::MeanMotion);
    }

    #[cfg(not(feature = "swisseph"))]
    #[test]
    fn precise_mode_without_source_fails() {
        let config = EngineConfig {
            provider: ProviderMode::Precise,
            ephemeris_path: None,
        };
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::PreciseUnavailable(_))
        ));
    }

    #[test]
    fn engine_rejects_empty_ephemeris_path() {
        let config = EngineConfig {
            provider: ProviderMode::Auto,
            ephemeris_path: Some(PathBuf::new()),
        };
        assert!(matches!(
            Engine::new(config),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn default_ephemeris_path() {
        let config = EngineConfig::default();
        assert_eq!(
            config.resolved_ephemeris_path(),
            Path::new(DEFAULT_EPHEMERIS_PATH)
        );
    }

    #[test]
    fn position_rejects_non_finite_jd() {
        let engine = Engine::fallback();
        assert!(matches!(
            engine.position(Graha::Surya, f64::NAN),
            Err(EngineError::InvalidQuery(_))
        ));
    }

    #[test]
    fn provider_mode_parsing() {
        assert_eq!("AUTO".parse::<ProviderMode>().unwrap(), ProviderMode::Auto);
        assert_eq!("fallback".parse::<ProviderMode>().unwrap(), ProviderMode::Fallback);
        assert_eq!("precise".parse::<ProviderMode>().unwrap(), ProviderMode::Precise);
        assert!("fast".parse::<ProviderMode>().is_err());
    }

    #[test]
    fn unsupported_body_message() {
        let e = EngineError::UnsupportedBody(Graha::Ketu);
        assert_eq!(e.to_string(), "unsupported body: Ketu");
    }

    // Compile-time assertion: Engine must be Send + Sync.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<Engine>();
        }
    };
}
