//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the canonical instant used throughout the engine.
//! Every `UtcTime` holds a valid proleptic Gregorian date and time of day;
//! out-of-range fields are rejected at construction.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, hours_from_hms};

/// Accepted naive timestamp layouts, tried in order after RFC 3339.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcTime {
    inner: NaiveDateTime,
}

impl UtcTime {
    /// Build a validated UTC instant.
    ///
    /// `second` may carry a fractional part and must lie in [0, 60).
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::InvalidCalendar(format!("{year:04}-{month:02}-{day:02}"))
        })?;
        if !second.is_finite() || !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidCalendar(format!("second {second}")));
        }
        let whole = second.trunc() as u32;
        let nanos = ((second - whole as f64) * 1e9).round().min(999_999_999.0) as u32;
        let time = NaiveTime::from_hms_nano_opt(hour, minute, whole, nanos).ok_or_else(|| {
            TimeError::InvalidCalendar(format!("{hour:02}:{minute:02}:{second}"))
        })?;
        Ok(Self {
            inner: date.and_time(time),
        })
    }

    /// Wrap a chrono naive timestamp, interpreted as UTC.
    ///
    /// Leap-second nanoseconds (>= 1e9) are folded into the last
    /// representable instant of the minute.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        let inner = if dt.nanosecond() >= 1_000_000_000 {
            dt.with_nanosecond(999_999_999).unwrap_or(dt)
        } else {
            dt
        };
        Self { inner }
    }

    /// Convert from a chrono UTC timestamp.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self::from_naive(dt.naive_utc())
    }

    /// The current wall-clock instant.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Reference instant for a recorded birth date.
    ///
    /// When no birth time is recorded, `default_hour:00:00` is used.
    pub fn from_birth(
        date: NaiveDate,
        time: Option<NaiveTime>,
        default_hour: u32,
    ) -> Result<Self, TimeError> {
        let time = match time {
            Some(t) => t,
            None => NaiveTime::from_hms_opt(default_hour, 0, 0).ok_or_else(|| {
                TimeError::InvalidCalendar(format!("default birth hour {default_hour}"))
            })?,
        };
        Ok(Self::from_naive(date.and_time(time)))
    }

    /// Instant for a Julian Day, rounded to the nearest nanosecond.
    pub fn from_julian_day(jd: f64) -> Result<Self, TimeError> {
        if !jd.is_finite() {
            return Err(TimeError::InvalidCalendar(format!("julian day {jd}")));
        }
        let secs = (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY;
        let whole = secs.floor();
        let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
        DateTime::<Utc>::from_timestamp(whole as i64, nanos)
            .map(|dt| Self::from_datetime(&dt))
            .ok_or_else(|| TimeError::InvalidCalendar(format!("julian day {jd}")))
    }

    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    /// Seconds including the fractional part, [0, 60).
    pub fn second(&self) -> f64 {
        self.inner.second() as f64 + self.inner.nanosecond() as f64 / 1e9
    }

    /// Calendar date part.
    pub fn date(&self) -> NaiveDate {
        self.inner.date()
    }

    /// Underlying chrono timestamp (UTC).
    pub fn as_naive(&self) -> NaiveDateTime {
        self.inner
    }

    /// Decimal hours into the day.
    pub fn day_hours(&self) -> f64 {
        hours_from_hms(self.hour(), self.minute(), self.second())
    }

    /// Julian Day via the standard Gregorian algorithm.
    pub fn julian_day(&self) -> f64 {
        calendar_to_jd(self.year(), self.month(), self.day(), self.day_hours())
    }

    /// Render with a chrono `strftime` pattern.
    pub fn format(&self, pattern: &str) -> String {
        self.inner.format(pattern).to_string()
    }
}

impl From<NaiveDateTime> for UtcTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_naive(dt)
    }
}

impl From<DateTime<Utc>> for UtcTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(&dt)
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[.fff](Z|±hh:mm)`, the same without an
    /// offset (taken as UTC), a space instead of `T`, minute precision, or a
    /// bare `YYYY-MM-DD` (midnight).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self::from_datetime(&dt.with_timezone(&Utc)));
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Ok(Self::from_naive(dt));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::from_naive(date.and_time(NaiveTime::default())));
        }
        Err(TimeError::Parse(s.to_string()))
    }
}

impl Display for UtcTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let second = self.second();
        let whole = second.trunc() as u32;
        if (second - whole as f64).abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year(),
                self.month(),
                self.day(),
                self.hour(),
                self.minute(),
                whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year(),
                self.month(),
                self.day(),
                self.hour(),
                self.minute(),
                second
            )
        }
    }
}
