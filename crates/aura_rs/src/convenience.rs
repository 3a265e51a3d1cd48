use aura_core::EngineError;
use aura_search::{
    BodyPosition, Chart, DailyContext, ScoreResult, TransitRecord, analyze_transits,
};
use aura_time::UtcTime;
use aura_vedic_base::{DashaPeriod, Graha, Rashi};
use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::AuraError;
use crate::global::{engine, runtime};

/// Reference instant for a birth record. A missing time uses the
/// configured default hour (UTC).
pub fn birth_instant(date: NaiveDate, time: Option<NaiveTime>) -> Result<UtcTime, AuraError> {
    let hour = runtime()?.config.birth.default_hour;
    Ok(UtcTime::from_birth(date, time, hour)?)
}

/// Tropical sun sign for a birth date. Needs no engine.
pub fn sun_sign_from_birth_date(date: NaiveDate) -> Rashi {
    aura_vedic_base::sun_sign_from_birth_date(date.month(), date.day())
}

pub fn julian_day(at: &UtcTime) -> Result<f64, AuraError> {
    Ok(engine()?.julian_day(at))
}

pub fn ayanamsa(at: &UtcTime) -> Result<f64, AuraError> {
    let eng = engine()?;
    Ok(eng.ayanamsa(eng.julian_day(at))?)
}

/// Sidereal position of a single body. Ketu is derived from Rahu.
pub fn position(graha: Graha, at: &UtcTime) -> Result<BodyPosition, AuraError> {
    let chart = assemble_chart(at, None)?;
    chart
        .get(graha)
        .copied()
        .ok_or(AuraError::Engine(EngineError::UnsupportedBody(graha)))
}

pub fn assemble_chart(at: &UtcTime, reference: Option<&UtcTime>) -> Result<Chart, AuraError> {
    Ok(aura_search::assemble_chart(engine()?, at, reference)?)
}

/// Transit records at `at`, houses from the Moon sign at `reference`.
pub fn transits(reference: &UtcTime, at: &UtcTime) -> Result<Vec<TransitRecord>, AuraError> {
    let eng = engine()?;
    let moon = aura_search::reference_moon(eng, reference)?;
    let chart = aura_search::assemble_chart(eng, at, Some(reference))?;
    Ok(analyze_transits(&chart, moon.rashi))
}

/// Cosmic-battery score with the configured bounds.
pub fn battery(reference: &UtcTime, at: &UtcTime) -> Result<ScoreResult, AuraError> {
    Ok(daily_context(reference, at)?.battery)
}

pub fn daily_context(reference: &UtcTime, current: &UtcTime) -> Result<DailyContext, AuraError> {
    let rt = runtime()?;
    Ok(aura_search::daily_context(
        &rt.engine,
        reference,
        current,
        &rt.config.battery,
    )?)
}

/// The daily transit report.
pub fn format_report(reference: &UtcTime, current: &UtcTime) -> Result<String, AuraError> {
    Ok(daily_context(reference, current)?.to_string())
}

pub fn format_positions_at(timestamp: &UtcTime, reference: &UtcTime) -> Result<String, AuraError> {
    Ok(aura_search::format_positions_at(
        engine()?,
        timestamp,
        reference,
    )?)
}

pub fn mahadashas(birth: &UtcTime) -> Result<Vec<DashaPeriod>, AuraError> {
    Ok(aura_search::mahadashas_for_birth(engine()?, birth)?)
}

pub fn current_mahadasha(birth: &UtcTime, now: &UtcTime) -> Result<Option<DashaPeriod>, AuraError> {
    Ok(aura_search::current_mahadasha(engine()?, birth, now)?)
}
