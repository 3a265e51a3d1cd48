//! Julian Day from a proleptic Gregorian calendar date.
//!
//! January and February are treated as months 13 and 14 of the previous
//! year, the Gregorian leap correction `B = 2 - A + A/4` is applied, and the
//! time of day is added as a fraction of a day. No leap seconds are modeled.

/// Julian Day of the J2000.0 epoch (2000-01-01T12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Day of the Unix epoch (1970-01-01T00:00:00).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Decimal hours from hour, minute, second.
pub fn hours_from_hms(hour: u32, minute: u32, second: f64) -> f64 {
    hour as f64 + minute as f64 / 60.0 + second / 3600.0
}

/// Julian Day for a Gregorian calendar date plus decimal hours.
///
/// `month` is 1-based. The caller is responsible for passing valid fields;
/// `UtcTime::new` is the validating entry point.
pub fn calendar_to_jd(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    let jd = (365.25 * (y + 4716) as f64).trunc() + (30.6001 * (m + 1) as f64).trunc()
        + day as f64
        + b as f64
        - 1524.5;
    jd + hours / 24.0
}
