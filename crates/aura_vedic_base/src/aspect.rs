//! Major angular aspects between two longitudes.
//!
//! Four aspects are recognized, each with an 8 deg half-width orb:
//! conjunction (0), opposition (180), trine (120), square (90). The windows
//! do not overlap, but classification still checks them in that fixed order
//! and takes the first match.

use serde::{Deserialize, Serialize};

use crate::util::angular_separation;

/// Half-width of every aspect window (degrees).
pub const ASPECT_ORB_DEG: f64 = 8.0;

/// A major aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
}

/// Aspects in classification order.
pub const ASPECT_ORDER: [AspectKind; 4] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
];

impl AspectKind {
    /// Exact angle of the aspect.
    pub const fn angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
        }
    }

    /// Word used in rendered labels ("conjunct Mars", "opposite Venus").
    pub const fn verb(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunct",
            Self::Opposition => "opposite",
            Self::Trine => "trine",
            Self::Square => "square",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
        }
    }
}

/// Classify a separation in [0, 180] as one of the major aspects.
pub fn classify_separation(separation: f64) -> Option<AspectKind> {
    ASPECT_ORDER
        .into_iter()
        .find(|kind| (separation - kind.angle()).abs() < ASPECT_ORB_DEG)
}

/// Aspect formed between two sidereal longitudes, if any.
pub fn aspect_between(lon_a: f64, lon_b: f64) -> Option<AspectKind> {
    classify_separation(angular_separation(lon_a, lon_b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conjunction_inside_orb() {
        assert_eq!(classify_separation(0.0), Some(AspectKind::Conjunction));
        assert_eq!(classify_separation(7.99), Some(AspectKind::Conjunction));
        assert_eq!(classify_separation(8.0), None);
    }

    #[test]
    fn opposition_trine_square() {
        assert_eq!(classify_separation(175.0), Some(AspectKind::Opposition));
        assert_eq!(classify_separation(113.0), Some(AspectKind::Trine));
        assert_eq!(classify_separation(97.9), Some(AspectKind::Square));
    }

    #[test]
    fn gaps_between_windows() {
        assert_eq!(classify_separation(45.0), None);
        assert_eq!(classify_separation(105.0), None);
        assert_eq!(classify_separation(150.0), None);
    }

    #[test]
    fn between_longitudes_wraps() {
        // Sun and Jupiter at J2000 in the mean-motion model
        assert_eq!(aspect_between(256.46646, 10.351), Some(AspectKind::Trine));
        assert_eq!(aspect_between(356.0, 3.0), Some(AspectKind::Conjunction));
    }

    #[test]
    fn exact_orb_across_zero_is_not_an_aspect() {
        assert_eq!(aspect_between(355.0, 3.0), None);
        assert_eq!(aspect_between(3.0, 355.0), None);
    }

    #[test]
    fn verbs() {
        assert_eq!(AspectKind::Opposition.verb(), "opposite");
        assert_eq!(AspectKind::Conjunction.verb(), "conjunct");
    }
}
