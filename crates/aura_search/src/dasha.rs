//! Dasha orchestration: bridges the position engine with the pure
//! Vimshottari computation in aura_vedic_base.

use aura_core::Engine;
use aura_time::UtcTime;
use aura_vedic_base::{DashaPeriod, mahadasha_at, mahadasha_sequence};

use crate::chart::reference_moon;
use crate::error::SearchError;

/// The nine mahadashas from `birth`, keyed on the Moon at that instant.
pub fn mahadashas_for_birth(
    engine: &Engine,
    birth: &UtcTime,
) -> Result<Vec<DashaPeriod>, SearchError> {
    let moon = reference_moon(engine, birth)?;
    Ok(mahadasha_sequence(moon.longitude, moon.jd))
}

/// The mahadasha running at `now`, or `None` before birth or after the
/// 120-year cycle.
pub fn current_mahadasha(
    engine: &Engine,
    birth: &UtcTime,
    now: &UtcTime,
) -> Result<Option<DashaPeriod>, SearchError> {
    let periods = mahadashas_for_birth(engine, birth)?;
    Ok(mahadasha_at(&periods, engine.julian_day(now)).copied())
}
