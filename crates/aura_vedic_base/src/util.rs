//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// Inputs that round up to exactly 360.0 are folded to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Minimal angular separation between two longitudes, in [0, 180].
///
/// Both inputs are expected in [0, 360).
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let diff = (a - b).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}
