//! Cosmic-battery score: a fixed per-body rule table folded over transits.
//!
//! The rule table and level thresholds are content, not astronomy. Houses
//! are always counted from the reference Moon sign.

use std::fmt::{Display, Formatter};

use aura_vedic_base::Graha;
use serde::{Deserialize, Serialize};

use crate::transit::TransitRecord;

/// One house bucket of a body rule. An empty `houses` slice matches any
/// house not claimed by an earlier bucket.
#[derive(Debug, Clone, Copy)]
struct FactorRule {
    houses: &'static [u8],
    delta: i32,
    lead: &'static str,
    tail: &'static str,
}

impl FactorRule {
    fn matches(&self, house: u8) -> bool {
        self.houses.is_empty() || self.houses.contains(&house)
    }

    fn factor(&self, house: u8) -> String {
        format!("{}{}th{}", self.lead, house, self.tail)
    }
}

#[derive(Debug, Clone, Copy)]
enum BodyRule {
    ByHouse(&'static [FactorRule]),
    WhenRetrograde { delta: i32, factor: &'static str },
}

const fn bucket(
    houses: &'static [u8],
    delta: i32,
    lead: &'static str,
    tail: &'static str,
) -> FactorRule {
    FactorRule {
        houses,
        delta,
        lead,
        tail,
    }
}

const MOON_RULES: [FactorRule; 3] = [
    bucket(&[1, 4, 5, 7, 9, 10, 11], 12, "Moon in ", " house (favorable) ✨"),
    bucket(&[6, 8, 12], -15, "Moon in ", " house (challenging) ⚠️"),
    bucket(&[], 3, "Moon in ", " house (neutral)"),
];

const JUPITER_RULES: [FactorRule; 2] = [
    bucket(&[1, 5, 9, 11], 10, "Jupiter blessing ", " house (excellent) 🌟"),
    bucket(&[6, 8, 12], -5, "Jupiter in ", " house (muted benefits)"),
];

const SATURN_RULES: [FactorRule; 2] = [
    bucket(&[3, 6, 11], 5, "Saturn in ", " house (productive)"),
    bucket(&[1, 4, 7, 8, 10, 12], -10, "Saturn in ", " house (heavy energy) 🪨"),
];

const MARS_RULES: [FactorRule; 2] = [
    bucket(&[3, 6, 10, 11], 6, "Mars energizing ", " house (drive) 🔥"),
    bucket(&[1, 4, 7, 8, 12], -8, "Mars agitating ", " house (tension)"),
];

const VENUS_RULES: [FactorRule; 1] = [bucket(
    &[1, 4, 5, 7, 9, 11],
    5,
    "Venus gracing ",
    " house (pleasure) 💫",
)];

const RAHU_RULES: [FactorRule; 2] = [
    bucket(&[3, 6, 10, 11], 3, "Rahu in ", " (amplifying ambition)"),
    bucket(&[], -5, "Rahu in ", " (creating confusion)"),
];

/// Scoring rule per body. The Sun and Ketu do not score.
const fn body_rule(graha: Graha) -> Option<BodyRule> {
    match graha {
        Graha::Chandra => Some(BodyRule::ByHouse(&MOON_RULES)),
        Graha::Guru => Some(BodyRule::ByHouse(&JUPITER_RULES)),
        Graha::Shani => Some(BodyRule::ByHouse(&SATURN_RULES)),
        Graha::Mangal => Some(BodyRule::ByHouse(&MARS_RULES)),
        Graha::Shukra => Some(BodyRule::ByHouse(&VENUS_RULES)),
        Graha::Buddh => Some(BodyRule::WhenRetrograde {
            delta: -7,
            factor: "Mercury retrograde (communication disrupted) ☿️",
        }),
        Graha::Rahu => Some(BodyRule::ByHouse(&RAHU_RULES)),
        Graha::Surya | Graha::Ketu => None,
    }
}

/// Delta and factor contributed by one transit record, if any.
fn evaluate(record: &TransitRecord) -> Option<(i32, String)> {
    match body_rule(record.graha)? {
        BodyRule::ByHouse(buckets) => buckets
            .iter()
            .find(|b| b.matches(record.house))
            .map(|b| (b.delta, b.factor(record.house))),
        BodyRule::WhenRetrograde { delta, factor } => {
            record.is_retrograde.then(|| (delta, factor.to_string()))
        }
    }
}

fn default_base() -> i32 {
    60
}

fn default_min() -> i32 {
    5
}

fn default_max() -> i32 {
    98
}

fn default_max_factors() -> usize {
    5
}

/// Tunable bounds of the score. The per-body table itself is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatteryRules {
    /// Starting score before any rule applies.
    #[serde(default = "default_base")]
    pub base: i32,
    /// Lower clamp bound.
    #[serde(default = "default_min")]
    pub min: i32,
    /// Upper clamp bound.
    #[serde(default = "default_max")]
    pub max: i32,
    /// Factors kept in the result, in evaluation order.
    #[serde(default = "default_max_factors")]
    pub max_factors: usize,
}

impl Default for BatteryRules {
    fn default() -> Self {
        Self {
            base: default_base(),
            min: default_min(),
            max: default_max(),
            max_factors: default_max_factors(),
        }
    }
}

impl BatteryRules {
    /// Check that the base and the clamp range lie within [0, 100] and the
    /// range is non-empty.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0..=100).contains(&self.base) {
            return Err("battery base must lie within 0..=100");
        }
        if self.min < 0 || self.max > 100 {
            return Err("battery bounds must lie within 0..=100");
        }
        if self.min > self.max {
            return Err("battery min must not exceed max");
        }
        Ok(())
    }
}

/// Level band of a clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryLevel {
    Peak,
    Good,
    Neutral,
    Low,
    Critical,
}

impl BatteryLevel {
    /// Band for a score: >=80 peak, >=60 good, >=40 neutral, >=20 low.
    pub const fn from_score(score: i32) -> Self {
        if score >= 80 {
            Self::Peak
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Neutral
        } else if score >= 20 {
            Self::Low
        } else {
            Self::Critical
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Peak => "peak",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Low => "low",
            Self::Critical => "critical",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Peak => {
                "Star Power at PEAK. The cosmos is literally your hype person today. \
                 Ask for that raise, confess your feelings, take the risk."
            }
            Self::Good => {
                "Cosmic vibes are strong. Good day for decisions. \
                 Trust your gut — it's cosmically calibrated right now."
            }
            Self::Neutral => {
                "Mixed energy day. Not bad, not amazing. Stick to routine. \
                 Don't start fights or situationships."
            }
            Self::Low => {
                "Low energy day. Self-care mode activated. Cancel plans guilt-free. \
                 The stars say rest."
            }
            Self::Critical => {
                "CRITICAL LOW. Do NOT engage. Don't text, don't argue, \
                 don't even look at your ex's stories. Hibernate."
            }
        }
    }
}

impl Display for BatteryLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of [`score_transits`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Clamped score.
    pub percentage: u8,
    pub level: BatteryLevel,
    /// Contributing factors in evaluation order, truncated.
    pub factors: Vec<String>,
    pub message: String,
}

/// Fold the rule table over `records` in order, then clamp and band.
pub fn score_transits(records: &[TransitRecord], rules: &BatteryRules) -> ScoreResult {
    let mut score = rules.base;
    let mut factors = Vec::new();
    for (delta, factor) in records.iter().filter_map(evaluate) {
        score = score.saturating_add(delta);
        factors.push(factor);
    }

    let clamped = score.max(rules.min).min(rules.max).clamp(0, 100);
    let level = BatteryLevel::from_score(clamped);
    tracing::debug!(
        raw = score,
        score = clamped,
        level = level.name(),
        factors = factors.len(),
        "battery scored"
    );
    factors.truncate(rules.max_factors);

    ScoreResult {
        percentage: clamped as u8,
        level,
        factors,
        message: level.message().to_string(),
    }
}
