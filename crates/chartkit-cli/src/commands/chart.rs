//! Interval, minutes and truncate commands.
//!
//! Each command renders its output as a string so `main` decides where it goes.

use serde::Serialize;

use chartkit_core::{Interval, TimeRange, truncation_formatter};

use crate::cli::RangeArgs;
use crate::config::ChartConfig;
use crate::error::CliResult;

/// JSON output of the `interval` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntervalReport {
    /// Selected bucket.
    pub interval: Interval,
    /// Length of the range in minutes.
    pub minutes: i64,
    /// Whether the range spans 24 hours or less.
    pub short: bool,
}

impl IntervalReport {
    /// Evaluates `range` against the configured defaults.
    pub fn new(config: &ChartConfig, range: &TimeRange, high_fidelity: bool) -> Self {
        let selector = config.selector();
        let high_fidelity = high_fidelity || config.chart.high_fidelity;
        Self {
            interval: selector.interval(range, high_fidelity),
            minutes: selector.diff_in_minutes(range),
            short: selector.use_short_interval(range),
        }
    }
}

/// Renders the bucket for a range, as a bare label or JSON.
pub fn interval(
    config: &ChartConfig,
    range: &RangeArgs,
    high_fidelity: bool,
    json: bool,
) -> CliResult<String> {
    let report = IntervalReport::new(config, &range.to_range(), high_fidelity);
    if json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.interval.to_string())
    }
}

/// Renders the length of a range in minutes.
pub fn minutes(config: &ChartConfig, range: &RangeArgs) -> String {
    config.selector().diff_in_minutes(&range.to_range()).to_string()
}

/// Renders a truncated label. `length` overrides the configured limit.
pub fn truncate(config: &ChartConfig, value: &str, length: Option<usize>) -> String {
    let limit = length.unwrap_or(config.chart.truncate_length);
    truncation_formatter(value, Some(limit)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use chartkit_core::StatsPeriod;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 5, 10, 0, 0).unwrap()
    }

    fn spanning(duration: Duration) -> RangeArgs {
        RangeArgs {
            start: Some(t0()),
            end: Some(t0() + duration),
            period: None,
        }
    }

    fn period(s: &str) -> RangeArgs {
        RangeArgs {
            period: Some(s.parse().unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn interval_label() {
        let config = ChartConfig::default();
        let range = spanning(Duration::hours(3));
        assert_eq!(interval(&config, &range, false, false).unwrap(), "15m");
        assert_eq!(interval(&config, &range, true, false).unwrap(), "5m");
    }

    #[test]
    fn interval_json() {
        let config = ChartConfig::default();
        let output = interval(&config, &spanning(Duration::minutes(30)), false, true).unwrap();
        insta::assert_snapshot!(output, @r#"
        {
          "interval": "5m",
          "minutes": 30,
          "short": true
        }
        "#);
    }

    #[test]
    fn configured_high_fidelity() {
        let mut config = ChartConfig::default();
        config.chart.high_fidelity = true;
        let output = interval(&config, &spanning(Duration::hours(48)), false, false).unwrap();
        assert_eq!(output, "30m");
    }

    #[test]
    fn configured_default_period() {
        let mut config = ChartConfig::default();
        assert_eq!(minutes(&config, &RangeArgs::default()), "20160");

        config.chart.default_stats_period = "1h".parse::<StatsPeriod>().unwrap();
        assert_eq!(minutes(&config, &RangeArgs::default()), "60");
        assert_eq!(
            interval(&config, &RangeArgs::default(), false, false).unwrap(),
            "5m"
        );
    }

    #[test]
    fn minutes_from_period() {
        assert_eq!(minutes(&ChartConfig::default(), &period("2h")), "120");
    }

    #[test]
    fn truncate_uses_config_then_flag() {
        let mut config = ChartConfig::default();
        config.chart.truncate_length = 5;
        assert_eq!(truncate(&config, "throughput", None), "throu…");
        assert_eq!(truncate(&config, "throughput", Some(3)), "thr…");
        assert_eq!(truncate(&config, "throughput", Some(0)), "throughput");
    }
}
