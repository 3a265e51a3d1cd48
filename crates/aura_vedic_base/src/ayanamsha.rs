//! Linear Lahiri ayanamsha.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! This module carries a first-order model: the Lahiri value at J2000.0 plus
//! a constant annual precession rate. It drifts from the true non-linear
//! precession over long spans and is only trusted within
//! [`LINEAR_AYANAMSA_VALID_YEARS`] of the epoch.

use aura_time::J2000_JD;

/// Lahiri ayanamsha at J2000.0 in the linear model (degrees).
pub const LAHIRI_J2000_DEG: f64 = 24.0;

/// Annual precession rate of the linear model (degrees per Julian year).
pub const LAHIRI_RATE_DEG_PER_YEAR: f64 = 0.0139696;

/// Days per Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Half-width of the window around J2000.0 in which the linear model is
/// considered reliable (Julian years).
pub const LINEAR_AYANAMSA_VALID_YEARS: f64 = 50.0;

/// Julian years elapsed since J2000.0 (negative before the epoch).
pub fn years_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR
}

/// Linear Lahiri ayanamsha in degrees at a Julian Day.
pub fn linear_lahiri_ayanamsha(jd: f64) -> f64 {
    LAHIRI_J2000_DEG + LAHIRI_RATE_DEG_PER_YEAR * years_since_j2000(jd)
}

/// Whether `jd` lies inside the linear model's validity window.
pub fn linear_ayanamsa_is_reliable(jd: f64) -> bool {
    years_since_j2000(jd).abs() <= LINEAR_AYANAMSA_VALID_YEARS
}
