//! Combustion (Asta) detection for transiting grahas.
//!
//! A graha is combust when it is too close to the Sun. The transit rule
//! uses a wide 12 deg orb for the Moon and 6 deg for every other planet.

use crate::graha::Graha;
use crate::util::angular_separation;

/// Combustion orb (degrees from Sun) for a graha.
///
/// Returns `None` for Sun, Rahu, and Ketu (not applicable).
pub const fn combustion_threshold(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
        Graha::Chandra => Some(12.0),
        _ => Some(6.0),
    }
}

/// Check if a graha is combust (too close to the Sun).
///
/// Uses the minimal angular distance on the ecliptic circle. A graha at
/// exactly the threshold distance is **not** combust (strict less-than).
/// Returns `false` for Sun, Rahu, and Ketu.
pub fn is_combust(graha: Graha, graha_sid_lon: f64, sun_sid_lon: f64) -> bool {
    match combustion_threshold(graha) {
        Some(threshold) => angular_separation(graha_sid_lon, sun_sid_lon) < threshold,
        None => false,
    }
}
