//! Vimshottari dasha (planetary period) tables and level-0 generation.
//!
//! The 120-year Vimshottari cycle walks nine grahas in a fixed order. The
//! first mahadasha at birth belongs to the lord of the Moon's nakshatra and
//! only its unexpired balance remains; the following eight run in full.

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, birth_balance};
pub use types::{DAYS_PER_YEAR, DashaPeriod};
pub use vimshottari::{
    VIMSHOTTARI_ORDER, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, mahadasha_at,
    mahadasha_sequence, vimshottari_years,
};
