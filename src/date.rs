//! Date values measured from the reference epoch (1 January 2001, UTC).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time interval between two dates, in seconds.
pub type TimeInterval = f64;

/// Seconds between the Unix epoch (1 January 1970) and the reference epoch
/// (1 January 2001). Leap seconds are ignored.
pub const EPOCH_DELTA_SECONDS: TimeInterval = 978_307_200.0;

const MICROS_PER_SECOND: TimeInterval = 1_000_000.0;

/// Comparison and arithmetic over anything that is a point on the reference
/// timeline.
///
/// Implementors supply construction from an offset and the offset accessor;
/// the rest is derived from those two.
pub trait DateLike: Copy {
    /// Creates the date at `seconds` from the reference epoch.
    fn from_offset(seconds: TimeInterval) -> Self;

    /// Seconds between this date and the reference epoch.
    fn offset(&self) -> TimeInterval;

    /// Seconds elapsed from `other` to `self`.
    fn difference(&self, other: &Self) -> TimeInterval {
        self.offset() - other.offset()
    }

    /// Returns a new date `delta` seconds after this one.
    #[must_use]
    fn advanced_by(&self, delta: TimeInterval) -> Self {
        Self::from_offset(self.offset() + delta)
    }

    /// Orders two dates by offset. `None` when either offset is NaN.
    fn compare_to(&self, other: &Self) -> Option<Ordering> {
        self.offset().partial_cmp(&other.offset())
    }
}

/// An instant stored as seconds from the reference epoch.
///
/// Any `f64` is accepted as an offset, including NaN and the infinities.
/// Equality is exact float equality.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceDate {
    offset_seconds: TimeInterval,
}

impl ReferenceDate {
    /// The reference epoch itself.
    pub const REFERENCE_EPOCH: Self = Self::from_offset(0.0);

    /// The Unix epoch expressed on the reference timeline.
    pub const UNIX_EPOCH: Self = Self::from_offset(-EPOCH_DELTA_SECONDS);

    /// Samples the system wall clock.
    #[must_use]
    pub fn now() -> Self {
        Self::from_offset(offset_at(SystemTime::now()))
    }

    /// Creates a date from an offset in seconds, without validation.
    #[must_use]
    pub const fn from_offset(seconds: TimeInterval) -> Self {
        Self { offset_seconds: seconds }
    }

    /// Creates a date from seconds since the Unix epoch.
    #[must_use]
    pub fn from_unix_seconds(seconds: TimeInterval) -> Self {
        Self::from_offset(seconds - EPOCH_DELTA_SECONDS)
    }

    /// Seconds between this date and the reference epoch.
    #[must_use]
    pub const fn offset(self) -> TimeInterval {
        self.offset_seconds
    }

    /// Seconds between this date and the Unix epoch.
    #[must_use]
    pub fn unix_seconds(self) -> TimeInterval {
        self.offset_seconds + EPOCH_DELTA_SECONDS
    }

    /// Seconds elapsed from `other` to `self`.
    #[must_use]
    pub fn difference(self, other: Self) -> TimeInterval {
        self.offset_seconds - other.offset_seconds
    }

    /// Returns a new date `delta` seconds after this one.
    #[must_use]
    pub fn advanced_by(self, delta: TimeInterval) -> Self {
        Self::from_offset(self.offset_seconds + delta)
    }

    /// Orders two dates by offset. `None` when either offset is NaN.
    #[must_use]
    pub fn compare_to(self, other: Self) -> Option<Ordering> {
        self.partial_cmp(&other)
    }

    /// Converts to a chrono UTC timestamp.
    ///
    /// Returns `None` for non-finite offsets and for offsets outside the
    /// range chrono can represent.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let unix = self.unix_seconds();
        if !unix.is_finite() {
            return None;
        }
        let whole = unix.floor();
        if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
            return None;
        }
        let micros = ((unix - whole) * MICROS_PER_SECOND).round() as u32;
        // Rounding can carry a full second.
        let (secs, micros) =
            if micros >= 1_000_000 { (whole as i64 + 1, 0) } else { (whole as i64, micros) };
        DateTime::from_timestamp(secs, micros * 1_000)
    }
}

impl DateLike for ReferenceDate {
    fn from_offset(seconds: TimeInterval) -> Self {
        Self::from_offset(seconds)
    }

    fn offset(&self) -> TimeInterval {
        self.offset_seconds
    }
}

impl fmt::Display for ReferenceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.offset_seconds)
    }
}

impl Sub for ReferenceDate {
    type Output = TimeInterval;

    fn sub(self, rhs: Self) -> TimeInterval {
        self.difference(rhs)
    }
}

impl Add<TimeInterval> for ReferenceDate {
    type Output = Self;

    fn add(self, rhs: TimeInterval) -> Self {
        self.advanced_by(rhs)
    }
}

impl Sub<TimeInterval> for ReferenceDate {
    type Output = Self;

    fn sub(self, rhs: TimeInterval) -> Self {
        self.advanced_by(-rhs)
    }
}

impl From<DateTime<Utc>> for ReferenceDate {
    fn from(value: DateTime<Utc>) -> Self {
        Self::from_offset(combine(value.timestamp(), value.timestamp_subsec_micros()))
    }
}

/// Converts a system time into a reference-epoch offset.
///
/// Whole seconds and microseconds are read separately and combined after the
/// epoch shift, so the fraction is not lost against a ~10^9 second count.
/// Times before the Unix epoch are negated part by part.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn offset_at(time: SystemTime) -> TimeInterval {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => combine(since.as_secs() as i64, since.subsec_micros()),
        Err(err) => {
            let before = err.duration();
            let secs = before.as_secs() as i64;
            let micros = before.subsec_micros();
            // -(secs + frac) == -(secs + 1) + (1 - frac)
            if micros == 0 {
                combine(-secs, 0)
            } else {
                combine(-secs - 1, 1_000_000 - micros)
            }
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn combine(unix_secs: i64, micros: u32) -> TimeInterval {
    let seconds = unix_secs as TimeInterval - EPOCH_DELTA_SECONDS;
    seconds + TimeInterval::from(micros) / MICROS_PER_SECOND
}
