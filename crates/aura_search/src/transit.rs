//! Transit records: house, combustion and aspects per body.

use std::fmt::{Display, Formatter};

use aura_vedic_base::{
    AspectKind, Graha, Rashi, aspect_between, house_from_reference, is_combust,
};
use serde::{Deserialize, Serialize};

use crate::chart_types::Chart;

/// Aspects kept per body, in chart order.
pub const MAX_ASPECTS_PER_BODY: usize = 3;

/// Summary used when a body forms no major aspect.
pub const NO_MAJOR_ASPECTS: &str = "No major aspects";

/// One aspect from a transiting body to another body in the same chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitAspect {
    pub kind: AspectKind,
    pub other: Graha,
}

impl Display for TransitAspect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind.verb(), self.other.english_name())
    }
}

/// Transit state of one body relative to a reference sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitRecord {
    pub graha: Graha,
    pub rashi: Rashi,
    /// House from the reference sign (1-12).
    pub house: u8,
    pub is_retrograde: bool,
    pub is_combust: bool,
    /// At most [`MAX_ASPECTS_PER_BODY`] aspects, in chart order.
    pub aspects: Vec<TransitAspect>,
}

impl TransitRecord {
    /// Comma-separated aspect labels, or [`NO_MAJOR_ASPECTS`].
    pub fn aspect_summary(&self) -> String {
        if self.aspects.is_empty() {
            return NO_MAJOR_ASPECTS.to_string();
        }
        self.aspects
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Transit records for every body in `chart`, in chart order.
///
/// Combustion is measured against the chart's Sun. Each body is compared
/// with every other body; a pair matches at most one aspect.
pub fn analyze_transits(chart: &Chart, reference: Rashi) -> Vec<TransitRecord> {
    let sun_lon = chart.get(Graha::Surya).map(|s| s.longitude);

    chart
        .iter()
        .map(|body| {
            let aspects = chart
                .iter()
                .filter(|other| other.graha != body.graha)
                .filter_map(|other| {
                    aspect_between(body.longitude, other.longitude).map(|kind| TransitAspect {
                        kind,
                        other: other.graha,
                    })
                })
                .take(MAX_ASPECTS_PER_BODY)
                .collect();

            TransitRecord {
                graha: body.graha,
                rashi: body.rashi,
                house: house_from_reference(body.rashi, reference),
                is_retrograde: body.is_retrograde,
                is_combust: sun_lon.is_some_and(|sun| is_combust(body.graha, body.longitude, sun)),
                aspects,
            }
        })
        .collect()
}
