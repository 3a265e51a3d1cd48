//! Mean-motion fallback ephemeris.
//!
//! Each directly modeled body advances linearly from its J2000.0 mean
//! tropical longitude: `L = (L0 + n * d) mod 360`, `d = jd - J2000`. The
//! sidereal longitude subtracts the linear Lahiri ayanamsha. Retrograde
//! motion is approximated by a fixed synodic cycle and window per planet,
//! `(d mod cycle) < window`, with no phase alignment to a real epoch.

use aura_time::J2000_JD;
use aura_vedic_base::{
    Graha, linear_ayanamsa_is_reliable, linear_lahiri_ayanamsha, normalize_360,
};

use crate::EngineError;
use crate::provider::{PositionProvider, ProviderKind, SiderealPoint};

/// (body, mean tropical longitude at J2000.0 in deg, mean daily motion in deg/day).
pub const MEAN_ELEMENTS: [(Graha, f64, f64); 8] = [
    (Graha::Surya, 280.46646, 0.98564736),
    (Graha::Chandra, 218.316, 13.176396),
    (Graha::Buddh, 252.251, 4.09233445),
    (Graha::Shukra, 181.979, 1.60213034),
    (Graha::Mangal, 355.433, 0.52402068),
    (Graha::Guru, 34.351, 0.08308529),
    (Graha::Shani, 50.077, 0.03344414),
    (Graha::Rahu, 125.04452, -0.0529538083),
];

/// (body, synodic cycle in days, retrograde window in days).
pub const SYNODIC_WINDOWS: [(Graha, f64, f64); 5] = [
    (Graha::Buddh, 116.0, 22.0),
    (Graha::Shukra, 584.0, 42.0),
    (Graha::Mangal, 780.0, 72.0),
    (Graha::Guru, 399.0, 121.0),
    (Graha::Shani, 378.0, 140.0),
];

/// Mean tropical longitude `d` days after J2000.0, or `None` for a body the
/// model does not cover (Ketu).
pub fn mean_tropical_longitude(graha: Graha, d: f64) -> Option<f64> {
    MEAN_ELEMENTS
        .iter()
        .find(|(g, _, _)| *g == graha)
        .map(|&(_, l0, n)| normalize_360(l0 + n * d))
}

/// Synodic-window retrograde approximation.
///
/// Nodes are always retrograde; the Sun and Moon never are.
pub fn approx_retrograde(graha: Graha, d: f64) -> bool {
    if graha.is_node() {
        return true;
    }
    SYNODIC_WINDOWS
        .iter()
        .find(|(g, _, _)| *g == graha)
        .is_some_and(|&(_, cycle, window)| d.rem_euclid(cycle) < window)
}

/// Deterministic mean-motion strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanMotionProvider;

impl MeanMotionProvider {
    pub const fn new() -> Self {
        Self
    }
}

impl PositionProvider for MeanMotionProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::MeanMotion
    }

    fn ayanamsa(&self, jd: f64) -> Result<f64, EngineError> {
        Ok(linear_lahiri_ayanamsha(jd))
    }

    fn position(&self, graha: Graha, jd: f64) -> Result<SiderealPoint, EngineError> {
        let d = jd - J2000_JD;
        let tropical =
            mean_tropical_longitude(graha, d).ok_or(EngineError::UnsupportedBody(graha))?;
        let longitude = normalize_360(tropical - linear_lahiri_ayanamsha(jd));
        Ok(SiderealPoint {
            longitude,
            is_retrograde: approx_retrograde(graha, d),
        })
    }

    fn ayanamsa_is_reliable(&self, jd: f64) -> bool {
        linear_ayanamsa_is_reliable(jd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAN_2024: f64 = 2_460_325.0;

    #[test]
    fn sun_at_epoch_is_exact_constant() {
        let p = MeanMotionProvider.position(Graha::Surya, J2000_JD).unwrap();
        assert!((p.longitude - 256.46646).abs() < 1e-9);
        assert!(!p.is_retrograde);
    }

    #[test]
    fn rahu_at_epoch() {
        let p = MeanMotionProvider.position(Graha::Rahu, J2000_JD).unwrap();
        assert!((p.longitude - 101.04452).abs() < 1e-9);
        assert!(p.is_retrograde);
    }

    #[test]
    fn ketu_is_unsupported() {
        assert_eq!(
            MeanMotionProvider.position(Graha::Ketu, J2000_JD),
            Err(EngineError::UnsupportedBody(Graha::Ketu))
        );
    }

    #[test]
    fn sun_january_2024() {
        let p = MeanMotionProvider.position(Graha::Surya, JAN_2024).unwrap();
        assert!((p.longitude - 270.114_474_946_474_8).abs() < 1e-6, "{}", p.longitude);
    }

    #[test]
    fn mars_january_2024_direct() {
        let p = MeanMotionProvider.position(Graha::Mangal, JAN_2024).unwrap();
        assert!((p.longitude - 251.999).abs() < 1e-3, "{}", p.longitude);
        assert!(!p.is_retrograde);
    }

    #[test]
    fn retrograde_windows_at_epoch() {
        // d = 0 lies inside every window
        for (g, _, _) in SYNODIC_WINDOWS {
            assert!(approx_retrograde(g, 0.0), "{g}");
        }
        assert!(!approx_retrograde(Graha::Surya, 0.0));
        assert!(!approx_retrograde(Graha::Chandra, 0.0));
    }

    #[test]
    fn mercury_window_edges() {
        assert!(approx_retrograde(Graha::Buddh, 21.9));
        assert!(!approx_retrograde(Graha::Buddh, 22.0));
        assert!(approx_retrograde(Graha::Buddh, 116.0));
        // floor modulo for dates before the epoch
        assert!(approx_retrograde(Graha::Buddh, -100.0));
        assert!(!approx_retrograde(Graha::Buddh, -10.0));
    }

    #[test]
    fn longitudes_are_normalized() {
        for (g, _, _) in MEAN_ELEMENTS {
            for jd in [2_415_021.0, J2000_JD, JAN_2024, 2_488_434.5] {
                let p = MeanMotionProvider.position(g, jd).unwrap();
                assert!((0.0..360.0).contains(&p.longitude), "{g} at {jd}");
            }
        }
    }

    #[test]
    fn reliability_follows_linear_window() {
        assert!(MeanMotionProvider.ayanamsa_is_reliable(JAN_2024));
        assert!(!MeanMotionProvider.ayanamsa_is_reliable(2_415_021.0));
    }
}
