//! The position-provider capability shared by both ephemeris strategies.

use aura_time::UtcTime;
use aura_vedic_base::Graha;

use crate::EngineError;

/// Which strategy a provider implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// External high-precision ephemeris.
    Precise,
    /// Deterministic mean-motion model.
    MeanMotion,
}

impl ProviderKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Precise => "precise",
            Self::MeanMotion => "mean-motion",
        }
    }
}

/// Sidereal position of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealPoint {
    /// Sidereal ecliptic longitude in degrees, [0, 360).
    pub longitude: f64,
    pub is_retrograde: bool,
}

/// A source of sidereal longitudes.
///
/// Implementations never compute Ketu; it is derived from Rahu by the chart
/// assembler. Rahu is always reported retrograde.
pub trait PositionProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Julian Day of an instant.
    fn julian_day(&self, t: &UtcTime) -> f64 {
        t.julian_day()
    }

    /// Lahiri ayanamsha in degrees.
    fn ayanamsa(&self, jd: f64) -> Result<f64, EngineError>;

    /// Sidereal longitude and retrograde flag for a directly computed body.
    fn position(&self, graha: Graha, jd: f64) -> Result<SiderealPoint, EngineError>;

    /// Whether the ayanamsha model is trusted at `jd`.
    fn ayanamsa_is_reliable(&self, _jd: f64) -> bool {
        true
    }
}
