//! Precise strategy over an external sidereal ephemeris.

use aura_time::UtcTime;
use aura_vedic_base::{Graha, normalize_360};

use crate::EngineError;
use crate::provider::{PositionProvider, ProviderKind, SiderealPoint};

/// An external high-precision ephemeris answering in the sidereal frame.
pub trait SiderealSource: Send + Sync {
    /// Select the Lahiri sidereal standard. Called once, before any query.
    fn set_lahiri_mode(&mut self) -> Result<(), EngineError>;

    /// Julian Day of an instant, using the source's own calendar routine.
    fn julian_day(&self, t: &UtcTime) -> f64;

    /// Ayanamsha in degrees.
    fn ayanamsa(&self, jd: f64) -> Result<f64, EngineError>;

    /// Sidereal longitude (deg) and longitudinal speed (deg/day).
    fn sidereal_lon_speed(&self, graha: Graha, jd: f64) -> Result<(f64, f64), EngineError>;
}

/// Position provider backed by a [`SiderealSource`].
///
/// Source failures propagate unchanged; there is no per-call fallback.
#[derive(Debug)]
pub struct PreciseProvider<S> {
    source: S,
}

impl<S: SiderealSource> PreciseProvider<S> {
    /// Wrap a source, performing its one-time sidereal-mode setup.
    pub fn new(mut source: S) -> Result<Self, EngineError> {
        source.set_lahiri_mode()?;
        Ok(Self { source })
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: SiderealSource> PositionProvider for PreciseProvider<S> {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Precise
    }

    fn julian_day(&self, t: &UtcTime) -> f64 {
        self.source.julian_day(t)
    }

    fn ayanamsa(&self, jd: f64) -> Result<f64, EngineError> {
        self.source.ayanamsa(jd)
    }

    fn position(&self, graha: Graha, jd: f64) -> Result<SiderealPoint, EngineError> {
        if graha == Graha::Ketu {
            return Err(EngineError::UnsupportedBody(graha));
        }
        let (lon, speed) = self.source.sidereal_lon_speed(graha, jd)?;
        if !lon.is_finite() || !speed.is_finite() {
            return Err(EngineError::ExternalSource(format!(
                "non-finite result for {graha} at jd {jd}"
            )));
        }
        Ok(SiderealPoint {
            longitude: normalize_360(lon),
            is_retrograde: graha == Graha::Rahu || speed < 0.0,
        })
    }
}
