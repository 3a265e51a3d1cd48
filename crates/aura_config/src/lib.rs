//! Configuration for the aura engine: an optional TOML file, then
//! environment overrides.
//!
//! Layering order, later wins:
//! 1. built-in defaults
//! 2. the TOML file, when a path is given
//! 3. `AURA_PROVIDER`, `SWISS_EPHEMERIS_PATH`, `AURA_DEFAULT_BIRTH_HOUR`

use std::path::{Path, PathBuf};

use aura_core::{EngineConfig, ProviderMode};
use aura_search::BatteryRules;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the provider mode.
pub const ENV_PROVIDER: &str = "AURA_PROVIDER";
/// Environment variable naming the precise ephemeris directory.
pub const ENV_EPHEMERIS_PATH: &str = "SWISS_EPHEMERIS_PATH";
/// Environment variable for the reference hour used when no birth time is known.
pub const ENV_DEFAULT_BIRTH_HOUR: &str = "AURA_DEFAULT_BIRTH_HOUR";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// `[engine]` table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSection {
    pub provider: ProviderMode,
    pub ephemeris_path: Option<PathBuf>,
}

fn default_hour() -> u32 {
    12
}

/// `[birth]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BirthSection {
    /// UTC hour used for a birth date with no recorded time.
    #[serde(default = "default_hour")]
    pub default_hour: u32,
}

impl Default for BirthSection {
    fn default() -> Self {
        Self {
            default_hour: default_hour(),
        }
    }
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuraConfig {
    pub engine: EngineSection,
    pub birth: BirthSection,
    pub battery: BatteryRules,
}

impl AuraConfig {
    /// Defaults, then the file at `path` if given, then the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        tracing::debug!(
            file = ?path,
            provider = %config.engine.provider,
            default_hour = config.birth.default_hour,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Parse and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text. Missing tables and keys keep their
    /// defaults; unknown keys are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_PROVIDER) {
            self.engine.provider = raw
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("{ENV_PROVIDER}: {e}")))?;
        }
        if let Some(raw) = lookup(ENV_EPHEMERIS_PATH) {
            self.engine.ephemeris_path = Some(PathBuf::from(raw));
        }
        if let Some(raw) = lookup(ENV_DEFAULT_BIRTH_HOUR) {
            self.birth.default_hour = raw.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{ENV_DEFAULT_BIRTH_HOUR}: not an hour: {raw:?}"))
            })?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.birth.default_hour > 23 {
            return Err(ConfigError::Invalid(format!(
                "birth.default_hour must be 0..=23, got {}",
                self.birth.default_hour
            )));
        }
        if let Some(path) = &self.engine.ephemeris_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "engine.ephemeris_path must not be empty".into(),
                ));
            }
        }
        self.battery
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// The engine part of the configuration.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            provider: self.engine.provider,
            ephemeris_path: self.engine.ephemeris_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AuraConfig::default();
        assert_eq!(config.engine.provider, ProviderMode::Auto);
        assert_eq!(config.engine.ephemeris_path, None);
        assert_eq!(config.birth.default_hour, 12);
        assert_eq!(config.battery, BatteryRules::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_text_is_default() {
        assert_eq!(AuraConfig::from_toml_str("").unwrap(), AuraConfig::default());
    }

    #[test]
    fn engine_config_mirrors_section() {
        let mut config = AuraConfig::default();
        config.engine.provider = ProviderMode::Fallback;
        config.engine.ephemeris_path = Some(PathBuf::from("/data/ephe"));
        let engine = config.engine_config();
        assert_eq!(engine.provider, ProviderMode::Fallback);
        assert_eq!(engine.ephemeris_path, Some(PathBuf::from("/data/ephe")));
    }

    #[test]
    fn rejects_hour_24() {
        let err = AuraConfig::from_toml_str("[birth]\ndefault_hour = 24").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
