//! Sidereal classification tables and pure Vedic derivations.
//!
//! This crate provides:
//! - The linear Lahiri ayanamsha and its validity window
//! - Rashi (sign) and nakshatra/pada classification of a longitude
//! - House-from-reference offsets, sign elements and lords
//! - The transit combustion rule and major-aspect classification
//! - Vimshottari dasha tables and mahadasha sequences
//! - The tropical sun-sign calendar table
//!
//! Everything here is a total function over static tables; nothing depends
//! on which ephemeris strategy produced the longitude.

pub mod aspect;
pub mod ayanamsha;
pub mod combustion;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod sun_sign;
pub mod util;

pub use aspect::{ASPECT_ORB_DEG, ASPECT_ORDER, AspectKind, aspect_between, classify_separation};
pub use ayanamsha::{
    LAHIRI_J2000_DEG, LAHIRI_RATE_DEG_PER_YEAR, LINEAR_AYANAMSA_VALID_YEARS,
    linear_ayanamsa_is_reliable, linear_lahiri_ayanamsha, years_since_j2000,
};
pub use combustion::{combustion_threshold, is_combust};
pub use dasha::{
    BirthBalance, DAYS_PER_YEAR, DashaPeriod, VIMSHOTTARI_ORDER, VIMSHOTTARI_TOTAL_YEARS,
    VIMSHOTTARI_YEARS, birth_balance, mahadasha_at, mahadasha_sequence, vimshottari_years,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, rashi_lord};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_lord,
};
pub use rashi::{
    ALL_RASHIS, Dms, Element, Rashi, RashiInfo, deg_to_dms, house_from_reference, rashi_from_longitude,
};
pub use sun_sign::sun_sign_from_birth_date;
pub use util::{angular_separation, normalize_360};
