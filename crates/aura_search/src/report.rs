//! Text reports over an assembled chart.
//!
//! The daily report is consumed verbatim downstream, so its layout is part
//! of the contract: identical inputs must render byte-identical text.

use std::fmt::{Display, Formatter};

use aura_core::Engine;
use aura_time::UtcTime;
use aura_vedic_base::{Rashi, sun_sign_from_birth_date};

use crate::battery::{BatteryRules, ScoreResult, score_transits};
use crate::chart::{assemble_chart, reference_moon};
use crate::chart_types::{Chart, ReferenceMoon};
use crate::error::SearchError;
use crate::transit::{TransitRecord, analyze_transits};

const RULE_WIDTH: usize = 50;

/// Everything the daily report shows, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyContext {
    pub current: UtcTime,
    pub reference: UtcTime,
    /// Tropical sun sign of the reference date.
    pub sun_sign: Rashi,
    pub moon: ReferenceMoon,
    pub chart: Chart,
    pub transits: Vec<TransitRecord>,
    pub battery: ScoreResult,
}

/// Chart, transits and score at `current`, relative to the Moon at
/// `reference`.
pub fn daily_context(
    engine: &Engine,
    reference: &UtcTime,
    current: &UtcTime,
    rules: &BatteryRules,
) -> Result<DailyContext, SearchError> {
    let moon = reference_moon(engine, reference)?;
    let chart = assemble_chart(engine, current, Some(reference))?;
    let transits = analyze_transits(&chart, moon.rashi);
    let battery = score_transits(&transits, rules);
    Ok(DailyContext {
        current: *current,
        reference: *reference,
        sun_sign: sun_sign_from_birth_date(reference.month(), reference.day()),
        moon,
        chart,
        transits,
        battery,
    })
}

impl Display for DailyContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Current Date: {}",
            self.current.format("%B %d, %Y %H:%M UTC")
        )?;
        writeln!(f, "User's Sun Sign: {}", self.sun_sign)?;
        writeln!(f, "User's Moon Sign (Rashi): {}", self.moon.rashi)?;
        writeln!(
            f,
            "User's Birth Nakshatra: {} (Pada {})",
            self.moon.nakshatra.name(),
            self.moon.pada
        )?;
        writeln!(f)?;
        writeln!(f, "CURRENT PLANETARY TRANSITS (Sidereal/Lahiri):")?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for t in &self.transits {
            write!(f, "  {}: {}", t.graha, t.rashi)?;
            if t.is_retrograde {
                f.write_str(" [RETROGRADE]")?;
            }
            if t.is_combust {
                f.write_str(" [COMBUST]")?;
            }
            write!(f, " — {}th house from Moon", t.house)?;
            if !t.aspects.is_empty() {
                write!(f, " | Aspects: {}", t.aspect_summary())?;
            }
            writeln!(f)?;
        }

        writeln!(f)?;
        write!(
            f,
            "COSMIC BATTERY: {}% ({})",
            self.battery.percentage, self.battery.level
        )?;
        for factor in &self.battery.factors {
            write!(f, "\n  • {factor}")?;
        }
        Ok(())
    }
}

/// Render the daily transit report.
pub fn format_report(
    engine: &Engine,
    reference: &UtcTime,
    current: &UtcTime,
    rules: &BatteryRules,
) -> Result<String, SearchError> {
    Ok(daily_context(engine, reference, current, rules)?.to_string())
}

/// Render every body's sign, degree and nakshatra at `timestamp`.
pub fn format_positions_at(
    engine: &Engine,
    timestamp: &UtcTime,
    reference: &UtcTime,
) -> Result<String, SearchError> {
    let chart = assemble_chart(engine, timestamp, Some(reference))?;
    let mut out = format!(
        "Planetary positions at {}: ",
        timestamp.format("%I:%M %p on %B %d, %Y")
    );
    for body in &chart {
        out.push_str(&format!(
            "\n  {}: {} {}°{} in {}",
            body.graha,
            body.rashi,
            short_degree(body.sign_degree),
            if body.is_retrograde { " (R)" } else { "" },
            body.nakshatra.name()
        ));
    }
    Ok(out)
}

/// Degrees rounded to two places with trailing zeros dropped, keeping at
/// least one decimal: 12.0, 19.5, 16.47.
fn short_degree(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
