//! Interval bucket selection for aggregated chart data.
//!
//! The bucket size depends only on how long the requested range is:
//!
//! | Range length          | Default | High fidelity |
//! |-----------------------|---------|---------------|
//! | more than 24 hours    | `24h`   | `30m`         |
//! | up to 1 hour          | `5m`    | `1m`          |
//! | between 1 and 24 hours| `15m`   | `5m`          |

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::period::StatsPeriod;
use crate::range::TimeRange;

/// 24 hours, in minutes.
pub const TWENTY_FOUR_HOURS: i64 = 1440;

/// One hour, in minutes.
pub const ONE_HOUR: i64 = 60;

/// Bucket size used to request pre-aggregated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "24h")]
    OneDay,
}

impl Interval {
    /// Returns the bucket label, e.g. `"5m"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneDay => "24h",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Picks the bucket for a range that is `minutes` long.
pub fn interval_for_minutes(minutes: i64, high_fidelity: bool) -> Interval {
    bucket(
        minutes > TWENTY_FOUR_HOURS,
        minutes <= ONE_HOUR,
        high_fidelity,
    )
}

/// Picks the bucket for a range of the given length, including any
/// fraction of a minute.
pub fn interval_for_length(length: Duration, high_fidelity: bool) -> Interval {
    bucket(
        length > Duration::minutes(TWENTY_FOUR_HOURS),
        length <= Duration::minutes(ONE_HOUR),
        high_fidelity,
    )
}

fn bucket(over_a_day: bool, within_an_hour: bool, high_fidelity: bool) -> Interval {
    if over_a_day {
        return if high_fidelity {
            Interval::ThirtyMinutes
        } else {
            Interval::OneDay
        };
    }

    if within_an_hour {
        return if high_fidelity {
            Interval::OneMinute
        } else {
            Interval::FiveMinutes
        };
    }

    if high_fidelity {
        Interval::FiveMinutes
    } else {
        Interval::FifteenMinutes
    }
}

/// Chooses interval buckets, resolving ranges without bounds or period
/// against a configured default period.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalSelector {
    default_period: StatsPeriod,
}

impl IntervalSelector {
    /// Creates a selector with a custom default period.
    pub fn new(default_period: StatsPeriod) -> Self {
        Self { default_period }
    }

    /// The period used for ranges with neither bounds nor a period.
    pub fn default_period(&self) -> &StatsPeriod {
        &self.default_period
    }

    /// Length of `range` in whole minutes.
    pub fn diff_in_minutes(&self, range: &TimeRange) -> i64 {
        range.diff_in_minutes_with_default(&self.default_period)
    }

    /// Picks the bucket for `range`. `high_fidelity` requests a finer bucket.
    pub fn interval(&self, range: &TimeRange, high_fidelity: bool) -> Interval {
        let length = range.length_with_default(&self.default_period);
        let interval = interval_for_length(length, high_fidelity);
        tracing::debug!(
            seconds = length.num_seconds(),
            high_fidelity,
            %interval,
            "selected chart interval"
        );
        interval
    }

    /// Returns `true` if `range` spans 24 hours or less.
    pub fn use_short_interval(&self, range: &TimeRange) -> bool {
        range.length_with_default(&self.default_period) <= Duration::minutes(TWENTY_FOUR_HOURS)
    }
}

/// Picks the bucket for `range` using the default stats period.
pub fn get_interval(range: &TimeRange, high_fidelity: bool) -> Interval {
    IntervalSelector::default().interval(range, high_fidelity)
}

/// Returns `true` if `range` spans 24 hours or less.
pub fn use_short_interval(range: &TimeRange) -> bool {
    IntervalSelector::default().use_short_interval(range)
}
