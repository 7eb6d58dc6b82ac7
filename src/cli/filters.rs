use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::cli::FilterArgs;
use crate::config::app_config::AppConfig;
use crate::core::errors::{AdminLogError, Result};
use crate::core::models::filter::{ActionFilter, FilterDescriptor};

/// Build the structured filter for `args`, defaulting the time window
/// from the config relative to `now` (unix seconds).
pub fn build_filter(args: &FilterArgs, config: &AppConfig, now: i64) -> Result<FilterDescriptor> {
    let (default_start, default_end) = config.default_window(now);
    let start = match &args.since {
        Some(s) => parse_time(s, false)?,
        None => default_start,
    };
    let end = match &args.until {
        Some(s) => parse_time(s, true)?,
        None => default_end,
    };
    let action = match &args.action {
        Some(a) => ActionFilter::parse(a)?,
        None => ActionFilter::Any,
    };

    let filter = FilterDescriptor::window(start, end)
        .with_actor(args.actor.as_deref())
        .with_action(action);
    filter.validate()?;
    Ok(filter)
}

/// Parse a local date or date-time into unix seconds.
///
/// A bare date means the start of that day, or its last second when
/// `end_of_day` is set.
pub fn parse_time(s: &str, end_of_day: bool) -> Result<i64> {
    let s = s.trim();
    let naive = if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        dt
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        dt
    } else if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let time = if end_of_day {
            NaiveTime::from_hms_opt(23, 59, 59)
        } else {
            NaiveTime::from_hms_opt(0, 0, 0)
        };
        match time {
            Some(t) => d.and_time(t),
            None => return Err(invalid_time(s)),
        }
    } else {
        return Err(invalid_time(s));
    };

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| invalid_time(s))
}

fn invalid_time(s: &str) -> AdminLogError {
    AdminLogError::InvalidTimeRange {
        detail: format!(
            "cannot read '{s}'. Expected YYYY-MM-DD or \"YYYY-MM-DD HH:MM\", e.g. 2026-01-15"
        ),
    }
}

/// Render unix seconds as local time for tables.
pub fn format_time(ts: i64) -> String {
    Local
        .timestamp_opt(ts, 0)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}
