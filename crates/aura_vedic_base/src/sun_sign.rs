//! Tropical (Western) sun sign from a birth month and day.
//!
//! This is a display helper only. It uses fixed calendar cutoffs and has no
//! relation to the sidereal machinery in the rest of the crate. Cutoff days
//! are inclusive on both ends of each range; Capricorn wraps the year end and
//! any date outside the listed ranges falls through to Pisces.

use crate::rashi::Rashi;

/// (sign, start month, start day, end month, end day), inclusive.
const TROPICAL_RANGES: [(Rashi, u32, u32, u32, u32); 11] = [
    (Rashi::Mesha, 3, 21, 4, 19),
    (Rashi::Vrishabha, 4, 20, 5, 20),
    (Rashi::Mithuna, 5, 21, 6, 20),
    (Rashi::Karka, 6, 21, 7, 22),
    (Rashi::Simha, 7, 23, 8, 22),
    (Rashi::Kanya, 8, 23, 9, 22),
    (Rashi::Tula, 9, 23, 10, 22),
    (Rashi::Vrischika, 10, 23, 11, 21),
    (Rashi::Dhanu, 11, 22, 12, 21),
    (Rashi::Makara, 12, 22, 1, 19),
    (Rashi::Kumbha, 1, 20, 2, 18),
];

/// Tropical sun sign for a birth `month` (1-12) and `day` (1-31).
pub fn sun_sign_from_birth_date(month: u32, day: u32) -> Rashi {
    TROPICAL_RANGES
        .iter()
        .find(|&&(_, sm, sd, em, ed)| (month == sm && day >= sd) || (month == em && day <= ed))
        .map(|&(sign, ..)| sign)
        .unwrap_or(Rashi::Meena)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_day_of_each_range() {
        let cases = [
            ((3, 21), Rashi::Mesha),
            ((4, 19), Rashi::Mesha),
            ((4, 20), Rashi::Vrishabha),
            ((5, 20), Rashi::Vrishabha),
            ((5, 21), Rashi::Mithuna),
            ((6, 20), Rashi::Mithuna),
            ((6, 21), Rashi::Karka),
            ((7, 22), Rashi::Karka),
            ((7, 23), Rashi::Simha),
            ((8, 22), Rashi::Simha),
            ((8, 23), Rashi::Kanya),
            ((9, 22), Rashi::Kanya),
            ((9, 23), Rashi::Tula),
            ((10, 22), Rashi::Tula),
            ((10, 23), Rashi::Vrischika),
            ((11, 21), Rashi::Vrischika),
            ((11, 22), Rashi::Dhanu),
            ((12, 21), Rashi::Dhanu),
            ((12, 22), Rashi::Makara),
            ((1, 19), Rashi::Makara),
            ((1, 20), Rashi::Kumbha),
            ((2, 18), Rashi::Kumbha),
            ((2, 19), Rashi::Meena),
            ((3, 20), Rashi::Meena),
        ];
        for ((m, d), expected) in cases {
            assert_eq!(sun_sign_from_birth_date(m, d), expected, "{m}/{d}");
        }
    }

    #[test]
    fn capricorn_wraps_year_end() {
        assert_eq!(sun_sign_from_birth_date(12, 31), Rashi::Makara);
        assert_eq!(sun_sign_from_birth_date(1, 1), Rashi::Makara);
    }

    #[test]
    fn mid_june_is_gemini() {
        assert_eq!(sun_sign_from_birth_date(6, 15), Rashi::Mithuna);
    }
}
