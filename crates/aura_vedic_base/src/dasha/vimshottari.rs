//! Vimshottari mahadasha sequence.

use crate::graha::Graha;

use super::balance::birth_balance;
use super::types::{DAYS_PER_YEAR, DashaPeriod};

/// Graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_ORDER: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha length in years, aligned with [`VIMSHOTTARI_ORDER`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Full cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Mahadasha length in years for a graha.
pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_ORDER
        .iter()
        .position(|&g| g == graha)
        .map(|i| VIMSHOTTARI_YEARS[i])
        .unwrap_or(0.0)
}

/// The nine mahadashas from birth.
///
/// The first period belongs to the lord of the Moon's nakshatra and lasts
/// only its unexpired balance; it starts at `birth_jd`.
pub fn mahadasha_sequence(moon_sidereal_lon: f64, birth_jd: f64) -> Vec<DashaPeriod> {
    let balance = birth_balance(moon_sidereal_lon);
    let start_idx = VIMSHOTTARI_ORDER
        .iter()
        .position(|&g| g == balance.lord)
        .unwrap_or(0);

    let mut periods = Vec::with_capacity(VIMSHOTTARI_ORDER.len());
    let mut cursor = birth_jd;
    for offset in 0..VIMSHOTTARI_ORDER.len() {
        let seq_idx = (start_idx + offset) % VIMSHOTTARI_ORDER.len();
        let duration = if offset == 0 {
            balance.balance_days
        } else {
            VIMSHOTTARI_YEARS[seq_idx] * DAYS_PER_YEAR
        };
        let end = cursor + duration;
        periods.push(DashaPeriod {
            lord: VIMSHOTTARI_ORDER[seq_idx],
            start_jd: cursor,
            end_jd: end,
            order: offset as u8 + 1,
        });
        cursor = end;
    }
    periods
}

/// The period containing `jd`, if any.
pub fn mahadasha_at(periods: &[DashaPeriod], jd: f64) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(jd))
}
