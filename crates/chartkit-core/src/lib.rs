//! Core chart helpers: periods, time ranges, interval buckets, label truncation

pub mod interval;
pub mod period;
pub mod range;
pub mod tracing;
pub mod truncate;

pub use interval::{
    Interval, IntervalSelector, ONE_HOUR, TWENTY_FOUR_HOURS, get_interval, interval_for_length,
    interval_for_minutes, use_short_interval,
};
pub use period::{DEFAULT_STATS_PERIOD, PeriodError, PeriodUnit, StatsPeriod, parse_period_to_hours};
pub use range::{TimeRange, diff_in_minutes};
pub use truncate::{DEFAULT_TRUNCATE_LENGTH, ELLIPSIS, truncate_default, truncation_formatter};

pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
