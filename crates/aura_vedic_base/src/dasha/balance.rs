//! Unexpired share of the first mahadasha at birth.

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN_27, Nakshatra, nakshatra_from_longitude};

use super::types::DAYS_PER_YEAR;
use super::vimshottari::vimshottari_years;

/// Where the Moon stands in its birth nakshatra and what remains of that
/// nakshatra lord's period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    pub nakshatra: Nakshatra,
    /// Lord of the first mahadasha.
    pub lord: Graha,
    /// Share of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Days left in the first mahadasha.
    pub balance_days: f64,
}

impl BirthBalance {
    pub fn balance_years(&self) -> f64 {
        self.balance_days / DAYS_PER_YEAR
    }
}

/// Birth balance for a sidereal Moon longitude.
pub fn birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let elapsed_fraction = info.degrees_in_nakshatra / NAKSHATRA_SPAN_27;
    let full_days = vimshottari_years(info.lord) * DAYS_PER_YEAR;
    BirthBalance {
        nakshatra: info.nakshatra,
        lord: info.lord,
        elapsed_fraction,
        balance_days: full_days * (1.0 - elapsed_fraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_period_at_nakshatra_start() {
        let b = birth_balance(0.0);
        assert_eq!(b.nakshatra, Nakshatra::Ashwini);
        assert_eq!(b.lord, Graha::Ketu);
        assert!(b.elapsed_fraction.abs() < 1e-12);
        assert!((b.balance_years() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn half_period_at_midpoint() {
        let b = birth_balance(NAKSHATRA_SPAN_27 / 2.0);
        assert!((b.elapsed_fraction - 0.5).abs() < 1e-10);
        assert!((b.balance_days - 7.0 * DAYS_PER_YEAR * 0.5).abs() < 1e-6);
    }

    #[test]
    fn small_balance_near_end() {
        let b = birth_balance(NAKSHATRA_SPAN_27 - 0.001);
        assert_eq!(b.nakshatra, Nakshatra::Ashwini);
        assert!(b.balance_days < 1.0);
    }

    #[test]
    fn uttara_ashadha_sun_balance() {
        // 1995-06-15 noon on the mean-motion model
        let b = birth_balance(268.385_771_736_070_24);
        assert_eq!(b.nakshatra, Nakshatra::UttaraAshadha);
        assert_eq!(b.lord, Graha::Surya);
        assert!((b.balance_days - 1_908.943_593_030_3).abs() < 1e-6);
    }
}
