//! Types for assembled charts.

use aura_vedic_base::{
    Graha, Nakshatra, Rashi, house_from_reference, nakshatra_from_longitude,
    rashi_from_longitude,
};
use serde::{Deserialize, Serialize};

/// One body located at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub graha: Graha,
    /// Sidereal longitude in degrees [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    /// Degrees into `rashi`, [0, 30).
    pub sign_degree: f64,
    pub nakshatra: Nakshatra,
    /// Pada (1-4).
    pub pada: u8,
    pub is_retrograde: bool,
    /// House from the reference Moon sign, when a reference was given.
    pub house: Option<u8>,
}

impl BodyPosition {
    /// Classify a sidereal longitude.
    pub fn classify(
        graha: Graha,
        longitude: f64,
        is_retrograde: bool,
        reference: Option<Rashi>,
    ) -> Self {
        let rashi = rashi_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        Self {
            graha,
            longitude,
            rashi: rashi.rashi,
            sign_degree: rashi.degrees_in_rashi,
            nakshatra: nak.nakshatra,
            pada: nak.pada,
            is_retrograde,
            house: reference.map(|r| house_from_reference(rashi.rashi, r)),
        }
    }
}

/// Positions of all nine bodies at one instant, in `ALL_GRAHAS` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Julian Day of the chart instant.
    pub jd: f64,
    /// Ayanamsha applied at `jd` (degrees).
    pub ayanamsa: f64,
    /// Reference Moon sign used for houses, if any.
    pub reference_rashi: Option<Rashi>,
    pub bodies: Vec<BodyPosition>,
}

impl Chart {
    /// Position of a specific body.
    pub fn get(&self, graha: Graha) -> Option<&BodyPosition> {
        self.bodies.iter().find(|b| b.graha == graha)
    }

    /// Positions in chart order.
    pub fn iter(&self) -> std::slice::Iter<'_, BodyPosition> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl<'a> IntoIterator for &'a Chart {
    type Item = &'a BodyPosition;
    type IntoIter = std::slice::Iter<'a, BodyPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

/// The reference (natal) Moon used for houses and the report header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMoon {
    pub jd: f64,
    pub longitude: f64,
    pub rashi: Rashi,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}
