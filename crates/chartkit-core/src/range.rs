//! Time range descriptors for chart queries.
//!
//! A [`TimeRange`] describes the window a chart covers, either absolutely
//! (`start` and `end`) or relatively (`period`, e.g. `"24h"`). When both
//! bounds are present they win over the period; when neither is usable the
//! default stats period applies.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::period::StatsPeriod;

/// The window of time a chart covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Absolute start of the window.
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    /// Absolute end of the window.
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
    /// Relative period, used when `start` and `end` are not both set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<StatsPeriod>,
}

impl TimeRange {
    /// Creates a range bounded by explicit start and end times.
    pub fn absolute(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            period: None,
        }
    }

    /// Creates a range covering the given relative period.
    pub fn relative(period: StatsPeriod) -> Self {
        Self {
            start: None,
            end: None,
            period: Some(period),
        }
    }

    /// Sets the relative period, keeping any bounds.
    #[must_use]
    pub fn with_period(mut self, period: StatsPeriod) -> Self {
        self.period = Some(period);
        self
    }

    /// Returns the bounds if both are present.
    pub fn bounds(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Length of the range in whole minutes, using `default` when the range
    /// has neither bounds nor a period.
    ///
    /// Bound differences are truncated toward zero and are negative when
    /// `end` precedes `start`.
    pub fn diff_in_minutes_with_default(&self, default: &StatsPeriod) -> i64 {
        if let Some((start, end)) = self.bounds() {
            let minutes = (end - start).num_minutes();
            tracing::trace!(%start, %end, minutes, "range length from bounds");
            return minutes;
        }

        let period = self.period.as_ref().unwrap_or(default);
        let minutes = period.minutes();
        tracing::trace!(%period, minutes, "range length from period");
        minutes
    }

    /// Length of the range in whole minutes, falling back to the default
    /// stats period.
    pub fn diff_in_minutes(&self) -> i64 {
        self.diff_in_minutes_with_default(&StatsPeriod::default_period())
    }

    /// Length of the range, using `default` when the range has neither
    /// bounds nor a period.
    ///
    /// Bounds are measured in whole minutes like
    /// [`diff_in_minutes_with_default`](Self::diff_in_minutes_with_default),
    /// while periods keep their exact length, so `"90s"` is a minute and a half.
    pub fn length_with_default(&self, default: &StatsPeriod) -> Duration {
        match self.bounds() {
            Some((start, end)) => Duration::minutes((end - start).num_minutes()),
            None => self.period.as_ref().unwrap_or(default).duration(),
        }
    }

    /// Length of the range, falling back to the default stats period.
    pub fn length(&self) -> Duration {
        self.length_with_default(&StatsPeriod::default_period())
    }
}

/// Length of `range` in whole minutes. See [`TimeRange::diff_in_minutes`].
pub fn diff_in_minutes(range: &TimeRange) -> i64 {
    range.diff_in_minutes()
}
