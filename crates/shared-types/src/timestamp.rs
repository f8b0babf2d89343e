//! # Timestamp
//!
//! Second-level, timezone-less point in time used for submission ordering.
//!
//! Accepted ISO-8601 inputs:
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `2026-01-15` | midnight of that day |
//! | `2026-01-15T10:30:00` / `2026-01-15 10:30:00.250` | wall-clock time |
//! | `2026-01-15T10:30:00+01:00` / `...Z` | offset dropped, wall-clock kept |

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::errors::TimestampError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A point in time without timezone.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr,
)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Sorts after every real timestamp. Used as "no group boost".
    pub const MAX: Timestamp = Timestamp(NaiveDateTime::MAX);

    /// Wraps a naive date-time.
    pub fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    /// Current local wall-clock time.
    pub fn now() -> Self {
        Self(chrono::Local::now().naive_local())
    }

    /// Midnight of the given calendar day, if the date is valid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
    }

    /// Returns the wrapped date-time.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Returns true for the `MAX` sentinel.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::MAX
    }

    /// Whole seconds from `earlier` to `self`, truncated toward zero.
    pub fn whole_seconds_since(&self, earlier: Timestamp) -> i64 {
        self.0.signed_duration_since(earlier.0).num_seconds()
    }

    /// Shifts the timestamp by `secs` seconds.
    pub fn plus_seconds(&self, secs: i64) -> Result<Self, TimestampError> {
        self.0
            .checked_add_signed(Duration::seconds(secs))
            .map(Self)
            .ok_or(TimestampError::OutOfRange)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(inner: NaiveDateTime) -> Self {
        Self(inner)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.f"))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        if let Ok(with_offset) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self(with_offset.naive_local()));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(Self(naive));
            }
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
            .ok_or_else(|| TimestampError::Malformed {
                input: s.to_string(),
            })
    }
}
