//! Clock-face time values.
//!
//! [`ClockTime`] is the duration type shared by the timer and the stopwatch. It
//! behaves like a time of day: components are bounded to `0..24` hours and
//! `0..60` minutes/seconds, and the stopwatch wraps past `23:59:59.999` back to
//! zero. The timer never goes below zero, see [`ClockTime::sub_secs`].
//!
//! ```rust
//! use bubbletea_clock::clock_time::ClockTime;
//!
//! let t = ClockTime::new(0, 5, 0).unwrap();
//! assert_eq!(t.format_hms(), "00:05:00");
//! assert_eq!(t.sub_secs(301), ClockTime::ZERO);
//! ```

use crate::error::{DurationError, Field};
use std::fmt;
use std::str::FromStr;

const MS_PER_SEC: u32 = 1_000;
const MS_PER_MIN: u32 = 60 * MS_PER_SEC;
const MS_PER_HOUR: u32 = 60 * MS_PER_MIN;
const MS_PER_DAY: u32 = 24 * MS_PER_HOUR;

/// An immutable, non-negative time span below 24 hours with millisecond
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime {
    total_ms: u32,
}

impl ClockTime {
    /// The zero duration. Reaching it ends a countdown.
    pub const ZERO: ClockTime = ClockTime { total_ms: 0 };

    /// Builds a time from whole components, rejecting anything outside
    /// `h < 24`, `m < 60`, `s < 60`.
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Result<Self, DurationError> {
        Self::from_signed(hours as i64, minutes as i64, seconds as i64)
    }

    /// Like [`ClockTime::new`] but also rejects negative components, which
    /// integer text fields can produce.
    pub fn from_signed(hours: i64, minutes: i64, seconds: i64) -> Result<Self, DurationError> {
        for (field, value) in [
            (Field::Hours, hours),
            (Field::Minutes, minutes),
            (Field::Seconds, seconds),
        ] {
            if value < 0 {
                return Err(DurationError::Negative { field, value });
            }
            if value >= field.limit() {
                return Err(DurationError::OutOfRange { field, value });
            }
        }
        let total_ms =
            hours as u32 * MS_PER_HOUR + minutes as u32 * MS_PER_MIN + seconds as u32 * MS_PER_SEC;
        Ok(Self { total_ms })
    }

    /// Builds a time from a millisecond count, wrapping at 24 hours.
    pub fn from_total_millis(total_ms: u64) -> Self {
        Self {
            total_ms: (total_ms % MS_PER_DAY as u64) as u32,
        }
    }

    /// Milliseconds since `00:00:00.000`.
    pub fn total_millis(&self) -> u64 {
        self.total_ms as u64
    }

    /// Hours component, `0..24`.
    pub fn hours(&self) -> u32 {
        self.total_ms / MS_PER_HOUR
    }

    /// Minutes component, `0..60`.
    pub fn minutes(&self) -> u32 {
        self.total_ms % MS_PER_HOUR / MS_PER_MIN
    }

    /// Seconds component, `0..60`.
    pub fn seconds(&self) -> u32 {
        self.total_ms % MS_PER_MIN / MS_PER_SEC
    }

    /// Milliseconds component, `0..1000`.
    pub fn millis(&self) -> u32 {
        self.total_ms % MS_PER_SEC
    }

    /// Hundredths of a second, truncated.
    pub fn hundredths(&self) -> u32 {
        self.millis() / 10
    }

    /// True for `00:00:00.000`.
    pub fn is_zero(&self) -> bool {
        self.total_ms == 0
    }

    /// Subtracts whole seconds, stopping at zero.
    #[must_use]
    pub fn sub_secs(self, secs: u32) -> Self {
        Self {
            total_ms: self.total_ms.saturating_sub(secs.saturating_mul(MS_PER_SEC)),
        }
    }

    /// Adds milliseconds, wrapping past midnight.
    #[must_use]
    pub fn add_millis(self, ms: u64) -> Self {
        Self::from_total_millis(self.total_ms as u64 + ms)
    }

    /// Formats as `hh:mm:ss`. Sub-second parts are dropped.
    pub fn format_hms(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }

    /// Formats as `hh:mm:ss.cc` with truncated hundredths.
    pub fn format_hundredths(&self) -> String {
        format!("{}.{:02}", self.format_hms(), self.hundredths())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_hms())
    }
}

/// Parses `HH:MM:SS`, `MM:SS` or `SS`.
impl FromStr for ClockTime {
    type Err = DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let fields: &[Field] = match parts.len() {
            1 => &[Field::Seconds],
            2 => &[Field::Minutes, Field::Seconds],
            3 => &[Field::Hours, Field::Minutes, Field::Seconds],
            _ => return Err(DurationError::Malformed(s.to_string())),
        };

        let mut values = [0i64; 3];
        let offset = 3 - fields.len();
        for (i, (field, text)) in fields.iter().zip(&parts).enumerate() {
            values[offset + i] = parse_component(*field, text)?;
        }
        Self::from_signed(values[0], values[1], values[2])
    }
}

/// Parses one text field; empty text counts as zero.
pub fn parse_component(field: Field, text: &str) -> Result<i64, DurationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<i64>().map_err(|_| DurationError::NotANumber {
        field,
        text: text.to_string(),
    })
}

/// Parses the three editor fields into a time.
pub fn parse_fields(
    hours: &str,
    minutes: &str,
    seconds: &str,
) -> Result<ClockTime, DurationError> {
    ClockTime::from_signed(
        parse_component(Field::Hours, hours)?,
        parse_component(Field::Minutes, minutes)?,
        parse_component(Field::Seconds, seconds)?,
    )
}
