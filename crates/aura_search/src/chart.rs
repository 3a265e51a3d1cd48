//! Chart assembly over the active position provider.

use aura_core::{Engine, EngineError, SiderealPoint};
use aura_time::UtcTime;
use aura_vedic_base::{
    ALL_GRAHAS, Graha, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
};

use crate::chart_types::{BodyPosition, Chart, ReferenceMoon};
use crate::error::SearchError;

/// Locate the Moon at a reference instant.
pub fn reference_moon(engine: &Engine, reference: &UtcTime) -> Result<ReferenceMoon, SearchError> {
    let jd = engine.julian_day(reference);
    let moon = engine.position(Graha::Chandra, jd)?;
    let nak = nakshatra_from_longitude(moon.longitude);
    Ok(ReferenceMoon {
        jd,
        longitude: moon.longitude,
        rashi: rashi_from_longitude(moon.longitude).rashi,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
    })
}

/// Positions of all nine bodies at `at`.
///
/// When `reference` is given, houses are counted from the Moon's sign at
/// that instant. Ketu is placed exactly opposite Rahu and is always
/// retrograde; it is never requested from the provider.
pub fn assemble_chart(
    engine: &Engine,
    at: &UtcTime,
    reference: Option<&UtcTime>,
) -> Result<Chart, SearchError> {
    let reference_rashi = match reference {
        Some(r) => Some(reference_moon(engine, r)?.rashi),
        None => None,
    };

    let jd = engine.julian_day(at);
    if !engine.ayanamsa_is_reliable(jd) {
        tracing::warn!(jd, "ayanamsha evaluated outside its validity window");
    }
    let ayanamsa = engine.ayanamsa(jd)?;

    let mut bodies = Vec::with_capacity(ALL_GRAHAS.len());
    let mut rahu: Option<SiderealPoint> = None;
    for graha in ALL_GRAHAS {
        let point = match graha {
            Graha::Ketu => {
                let rahu = rahu.ok_or(EngineError::UnsupportedBody(Graha::Ketu))?;
                SiderealPoint {
                    longitude: normalize_360(rahu.longitude + 180.0),
                    is_retrograde: true,
                }
            }
            _ => {
                let p = engine.position(graha, jd)?;
                if graha == Graha::Rahu {
                    rahu = Some(p);
                }
                p
            }
        };
        bodies.push(BodyPosition::classify(
            graha,
            point.longitude,
            point.is_retrograde,
            reference_rashi,
        ));
    }

    tracing::debug!(
        jd,
        ayanamsa,
        provider = engine.provider_kind().name(),
        reference = ?reference_rashi,
        "chart assembled"
    );

    Ok(Chart {
        jd,
        ayanamsa,
        reference_rashi,
        bodies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_vedic_base::Rashi;

    fn j2000() -> UtcTime {
        UtcTime::new(2000, 1, 1, 12, 0, 0.0).unwrap()
    }

    #[test]
    fn nine_bodies_in_order() {
        let chart = assemble_chart(&Engine::fallback(), &j2000(), None).unwrap();
        let order: Vec<Graha> = chart.iter().map(|b| b.graha).collect();
        assert_eq!(order, ALL_GRAHAS.to_vec());
        assert!(chart.iter().all(|b| b.house.is_none()));
    }

    #[test]
    fn ketu_opposite_rahu() {
        let chart = assemble_chart(&Engine::fallback(), &j2000(), None).unwrap();
        let rahu = chart.get(Graha::Rahu).unwrap();
        let ketu = chart.get(Graha::Ketu).unwrap();
        assert_eq!(ketu.longitude, normalize_360(rahu.longitude + 180.0));
        assert!(ketu.is_retrograde && rahu.is_retrograde);
        assert_eq!(ketu.rashi, Rashi::Makara);
    }

    #[test]
    fn reference_moon_at_j2000() {
        let moon = reference_moon(&Engine::fallback(), &j2000()).unwrap();
        assert_eq!(moon.rashi, Rashi::Tula);
        assert_eq!(moon.pada, 3);
        assert_eq!(moon.jd, 2_451_545.0);
    }

    #[test]
    fn houses_from_reference() {
        let t = j2000();
        let chart = assemble_chart(&Engine::fallback(), &t, Some(&t)).unwrap();
        assert_eq!(chart.reference_rashi, Some(Rashi::Tula));
        assert_eq!(chart.get(Graha::Chandra).unwrap().house, Some(1));
        assert_eq!(chart.get(Graha::Surya).unwrap().house, Some(3));
    }
}
