//! Relative stats periods such as `"24h"` or `"14d"`.
//!
//! A period is a count followed by a single unit letter:
//!
//! | Unit | Meaning |
//! |------|---------|
//! | `s`  | seconds |
//! | `m`  | minutes |
//! | `h`  | hours   |
//! | `d`  | days    |
//! | `w`  | weeks   |
//!
//! Periods are validated when parsed, so a [`StatsPeriod`] value always
//! converts to a representable [`chrono::Duration`].

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Period used when a time range carries neither bounds nor a period.
pub const DEFAULT_STATS_PERIOD: &str = "14d";

/// Shorthand grammar: ASCII digits followed by exactly one unit letter.
static PERIOD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([smhdw])$").expect("Invalid period regex"));

/// Errors produced while parsing a period string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// The period string was empty.
    #[error("empty period")]
    Empty,

    /// The period string does not match `<digits><unit>`.
    #[error("invalid period {0:?}: expected digits followed by one of s, m, h, d, w")]
    InvalidFormat(String),

    /// The period is too large to be represented as a duration.
    #[error("period {0:?} is out of range")]
    Overflow(String),
}

/// Unit letter of a [`StatsPeriod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl PeriodUnit {
    /// Returns the shorthand letter for this unit.
    pub fn as_char(&self) -> char {
        match self {
            Self::Seconds => 's',
            Self::Minutes => 'm',
            Self::Hours => 'h',
            Self::Days => 'd',
            Self::Weeks => 'w',
        }
    }

    /// Parses a unit letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::Seconds),
            'm' => Some(Self::Minutes),
            'h' => Some(Self::Hours),
            'd' => Some(Self::Days),
            'w' => Some(Self::Weeks),
            _ => None,
        }
    }

    /// Number of seconds in one unit.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Seconds => 1,
            Self::Minutes => 60,
            Self::Hours => 60 * 60,
            Self::Days => 24 * 60 * 60,
            Self::Weeks => 7 * 24 * 60 * 60,
        }
    }
}

/// A relative duration written in shorthand, e.g. `"14d"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatsPeriod {
    amount: u64,
    unit: PeriodUnit,
}

impl StatsPeriod {
    /// Creates a period, checking that it fits in a [`Duration`].
    pub fn new(amount: u64, unit: PeriodUnit) -> Result<Self, PeriodError> {
        let period = Self { amount, unit };
        match period.checked_seconds() {
            Some(_) => Ok(period),
            None => Err(PeriodError::Overflow(period.to_string())),
        }
    }

    /// The default stats period (`14d`).
    pub fn default_period() -> Self {
        Self {
            amount: 14,
            unit: PeriodUnit::Days,
        }
    }

    /// The numeric part of the period.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// The unit of the period.
    pub fn unit(&self) -> PeriodUnit {
        self.unit
    }

    /// Length of the period in hours. Second and minute periods give
    /// fractional hours.
    pub fn hours(&self) -> f64 {
        self.amount as f64 * self.unit.seconds() as f64 / 3600.0
    }

    /// Length of the period in whole minutes, truncated toward zero.
    pub fn minutes(&self) -> i64 {
        self.duration().num_minutes()
    }

    /// Length of the period as a duration.
    pub fn duration(&self) -> Duration {
        // `new` and `from_str` reject periods that do not fit.
        self.checked_seconds()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX)
    }

    fn checked_seconds(&self) -> Option<i64> {
        let secs = self.amount.checked_mul(self.unit.seconds())?;
        let secs = i64::try_from(secs).ok()?;
        Duration::try_seconds(secs).map(|_| secs)
    }
}

impl Default for StatsPeriod {
    fn default() -> Self {
        Self::default_period()
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.as_char())
    }
}

impl FromStr for StatsPeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PeriodError::Empty);
        }

        let caps = PERIOD_REGEX
            .captures(s)
            .ok_or_else(|| PeriodError::InvalidFormat(s.to_string()))?;

        let amount: u64 = caps[1]
            .parse()
            .map_err(|_| PeriodError::Overflow(s.to_string()))?;
        let unit = caps[2]
            .chars()
            .next()
            .and_then(PeriodUnit::from_char)
            .ok_or_else(|| PeriodError::InvalidFormat(s.to_string()))?;

        Self::new(amount, unit).map_err(|_| PeriodError::Overflow(s.to_string()))
    }
}

impl TryFrom<String> for StatsPeriod {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatsPeriod> for String {
    fn from(period: StatsPeriod) -> Self {
        period.to_string()
    }
}

/// Converts a period string to hours, falling back to `default` when
/// `period` is absent.
///
/// # Errors
///
/// Returns an error if the chosen string is not a valid period.
pub fn parse_period_to_hours(period: Option<&str>, default: &str) -> Result<f64, PeriodError> {
    let period: StatsPeriod = period.unwrap_or(default).parse()?;
    Ok(period.hours())
}
