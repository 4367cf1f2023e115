//! Time-of-day values and intervals
//!
//! Times are stored as minutes since midnight (0..=1439), parsed once at
//! the boundary from a strict `hh:mm` shape and rendered back to
//! zero-padded `hh:mm` only for output. Comparisons are numeric, so the
//! ordering never depends on string formatting.
//!
//! Domain rule: midnight is never a valid boundary. Any start or end time
//! used by a roster must lie in `00:01..=23:59`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RosterError;

/// Earliest valid boundary time (00:01).
const MIN_BOUNDARY: u16 = 1;

/// Latest valid boundary time (23:59).
const MAX_BOUNDARY: u16 = 23 * 60 + 59;

/// A time of day in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Returns true if the input has the exact `hh:mm` shape:
    /// two digits, a colon, two digits.
    pub fn is_well_formed(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 5
            && bytes[0].is_ascii_digit()
            && bytes[1].is_ascii_digit()
            && bytes[2] == b':'
            && bytes[3].is_ascii_digit()
            && bytes[4].is_ascii_digit()
    }

    /// Returns the hour component (0..=23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Returns the minute component (0..=59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Returns the raw minutes-since-midnight value.
    pub fn minutes(&self) -> u16 {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = RosterError;

    /// Parses a strict `hh:mm` time. A string that does not match the
    /// shape is a format error; a matching string whose hour exceeds 23
    /// or minute exceeds 59 is a bounds error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_well_formed(s) {
            return Err(RosterError::TimeFormat);
        }

        let bytes = s.as_bytes();
        let hour = u16::from((bytes[0] - b'0') * 10 + (bytes[1] - b'0'));
        let minute = u16::from((bytes[3] - b'0') * 10 + (bytes[4] - b'0'));

        if hour > 23 || minute > 59 {
            return Err(RosterError::TimeBounds);
        }

        Ok(Self(hour * 60 + minute))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// A bounded interval of the day with `start < end`.
///
/// A valid range never touches midnight: start is at least 00:01 and end
/// is at most 23:59. Overlap treats ranges as open (touching endpoints do
/// not overlap); containment treats them as closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeRange {
    /// Parses and validates a start/end pair.
    ///
    /// Both strings must be well-formed before any bounds check runs, so
    /// a malformed time is always reported as a format error even when
    /// the other time is out of bounds.
    pub fn parse(start: &str, end: &str) -> Result<Self, RosterError> {
        if !TimeOfDay::is_well_formed(start) || !TimeOfDay::is_well_formed(end) {
            return Err(RosterError::TimeFormat);
        }

        let start: TimeOfDay = start.parse()?;
        let end: TimeOfDay = end.parse()?;
        Self::new(start, end)
    }

    /// Builds a range from already-parsed times, enforcing the boundary
    /// rule: start >= 00:01, end <= 23:59, start < end.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Result<Self, RosterError> {
        if start.minutes() < MIN_BOUNDARY || end.minutes() > MAX_BOUNDARY || start >= end {
            return Err(RosterError::TimeBounds);
        }
        Ok(Self { start, end })
    }

    /// Returns the start time.
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Returns the end time.
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// Returns true if the two ranges overlap.
    ///
    /// Touching endpoints do not count: one range may end exactly when
    /// another begins.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }

    /// Returns true if `inner` lies entirely within this range,
    /// endpoints included.
    pub fn contains(&self, inner: &TimeRange) -> bool {
        self.start <= inner.start && inner.end <= self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
