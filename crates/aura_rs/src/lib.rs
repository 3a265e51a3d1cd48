//! Convenience wrapper for the aura sidereal transit engine.
//!
//! Provides a global engine, built once from [`AuraConfig`], and
//! functions over UTC instants that use it.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use aura_rs::*;
//!
//! init(AuraConfig::default()).expect("engine init");
//!
//! let birth = birth_instant("1995-06-15".parse().unwrap(), None).unwrap();
//! let now = UtcTime::now();
//! println!("{}", format_report(&birth, &now).unwrap());
//! ```

pub mod convenience;
pub mod error;
pub mod global;

pub use convenience::{
    assemble_chart, ayanamsa, battery, birth_instant, current_mahadasha, daily_context,
    format_positions_at, format_report, julian_day, mahadashas, position, sun_sign_from_birth_date,
    transits,
};
pub use error::AuraError;
pub use global::{config, engine, init, init_from_env, is_initialized};

// Re-export the types callers see so they need not depend on the lower crates.
pub use aura_config::{AuraConfig, BirthSection, ConfigError, EngineSection};
pub use aura_core::{Engine, EngineConfig, EngineError, ProviderKind, ProviderMode};
pub use aura_search::{
    BatteryLevel, BatteryRules, BodyPosition, Chart, DailyContext, ReferenceMoon, ScoreResult,
    SearchError, TransitAspect, TransitRecord,
};
pub use aura_time::{TimeError, UtcTime};
pub use aura_vedic_base::{AspectKind, DashaPeriod, Graha, Nakshatra, Rashi};
