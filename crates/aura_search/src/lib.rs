//! Chart assembly and the derived layers built on it: transits, aspects,
//! the cosmic-battery score, text reports and dasha lookup.
//!
//! Every operation here is a pure function of its inputs and the
//! [`aura_core::Engine`] it is given.

pub mod battery;
pub mod chart;
pub mod chart_types;
pub mod dasha;
pub mod error;
pub mod report;
pub mod transit;

pub use battery::{BatteryLevel, BatteryRules, ScoreResult, score_transits};
pub use chart::{assemble_chart, reference_moon};
pub use chart_types::{BodyPosition, Chart, ReferenceMoon};
pub use dasha::{current_mahadasha, mahadashas_for_birth};
pub use error::SearchError;
pub use report::{DailyContext, daily_context, format_positions_at, format_report};
pub use transit::{
    MAX_ASPECTS_PER_BODY, NO_MAJOR_ASPECTS, TransitAspect, TransitRecord, analyze_transits,
};
