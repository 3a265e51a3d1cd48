//! Vedic planet (graha) enum and rashi lordship.
//!
//! Nine bodies are tracked: the seven classical planets plus the lunar
//! ascending node (Rahu) and its antipode (Ketu). Ketu is never computed on
//! its own; it is always derived from Rahu.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in chart order. Rahu precedes Ketu so the node can be
/// derived in the same pass.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// True for Rahu and Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }
}

impl Display for Graha {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

impl FromStr for Graha {
    type Err = VedicError;

    /// Case-insensitive match on either the Sanskrit or the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| {
                g.name().eq_ignore_ascii_case(needle)
                    || g.english_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| VedicError::UnknownGraha(s.to_string()))
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment:
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn all_grahas_indexed_in_order() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn rahu_before_ketu() {
        assert!(Graha::Rahu.index() < Graha::Ketu.index());
    }

    #[test]
    fn nodes() {
        assert!(Graha::Rahu.is_node());
        assert!(Graha::Ketu.is_node());
        assert_eq!(ALL_GRAHAS.iter().filter(|g| g.is_node()).count(), 2);
    }

    #[test]
    fn lords_are_sapta_grahas() {
        for r in ALL_RASHIS {
            assert!(!rashi_lord(r).is_node());
        }
    }

    #[test]
    fn specific_lords() {
        assert_eq!(rashi_lord(Rashi::Simha), Graha::Surya);
        assert_eq!(rashi_lord(Rashi::Karka), Graha::Chandra);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Meena), Graha::Guru);
    }

    #[test]
    fn parse_either_name() {
        assert_eq!("Moon".parse::<Graha>().unwrap(), Graha::Chandra);
        assert_eq!("shani".parse::<Graha>().unwrap(), Graha::Shani);
        assert_eq!("RAHU".parse::<Graha>().unwrap(), Graha::Rahu);
        assert!(matches!("Pluto".parse::<Graha>(), Err(VedicError::UnknownGraha(_))));
    }

    #[test]
    fn display_is_english() {
        assert_eq!(Graha::Buddh.to_string(), "Mercury");
    }
}
