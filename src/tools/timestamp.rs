//! Unix timestamp ↔ calendar date conversion.
//!
//! Every function here takes the reference instant and time zone as
//! parameters; nothing reads ambient wall-clock time, so results are fully
//! deterministic under test. The host passes its own notion of "now" and the
//! user's zone.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ToolError;

/// Timestamps above this value are interpreted as milliseconds; at or below,
/// as seconds. 9_999_999_999 seconds is November 2286.
const MILLIS_THRESHOLD: i64 = 9_999_999_999;

/// Earliest accepted form year.
const MIN_YEAR: i64 = 1970;
/// Latest accepted form year.
const MAX_YEAR: i64 = 2099;

/// Parse a Unix timestamp string, accepting seconds or milliseconds.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, ToolError> {
    let trimmed = input.trim();
    let raw: i64 = trimmed
        .parse()
        .map_err(|_| ToolError::InvalidTimestamp(trimmed.to_string()))?;
    let millis = if raw.abs() > MILLIS_THRESHOLD {
        raw
    } else {
        raw.checked_mul(1000)
            .ok_or_else(|| ToolError::InvalidTimestamp(trimmed.to_string()))?
    };
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| ToolError::InvalidTimestamp(trimmed.to_string()))
}

/// Raw date form fields, kept as entered so the host can round-trip the form
/// without reformatting user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub second: String,
}

impl DateParts {
    /// Prefill the form from an instant in the given zone (the clear action
    /// resets the form to the current local time).
    pub fn from_instant<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> Self {
        let offset = instant.with_timezone(tz).offset().fix();
        let local = instant.with_timezone(&offset);
        Self {
            year: local.format("%Y").to_string(),
            month: local.format("%m").to_string(),
            day: local.format("%d").to_string(),
            hour: local.format("%H").to_string(),
            minute: local.format("%M").to_string(),
            second: local.format("%S").to_string(),
        }
    }

    /// Validate the six fields and resolve them to an instant in `tz`.
    ///
    /// Field checks run in form order and the first violation wins, so the
    /// host shows one error at a time.
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Utc>, ToolError> {
        let fields = [
            &self.year,
            &self.month,
            &self.day,
            &self.hour,
            &self.minute,
            &self.second,
        ];
        let mut parsed = [0i64; 6];
        for (slot, field) in parsed.iter_mut().zip(fields) {
            *slot = field.trim().parse().map_err(|_| {
                ToolError::InvalidDateField("all fields must be valid numbers".to_string())
            })?;
        }
        let [year, month, day, hour, minute, second] = parsed;

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ToolError::InvalidDateField(format!(
                "year must be between {MIN_YEAR} and {MAX_YEAR}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(ToolError::InvalidDateField(
                "month must be between 1 and 12".to_string(),
            ));
        }
        let month_days = days_in_month(year as i32, month as u32).ok_or_else(|| {
            ToolError::InvalidDateField("month must be between 1 and 12".to_string())
        })?;
        if !(1..=month_days).contains(&day) {
            return Err(ToolError::InvalidDateField(format!(
                "day must be between 1 and {month_days} for this month"
            )));
        }
        if !(0..=23).contains(&hour) {
            return Err(ToolError::InvalidDateField(
                "hour must be between 0 and 23".to_string(),
            ));
        }
        if !(0..=59).contains(&minute) {
            return Err(ToolError::InvalidDateField(
                "minute must be between 0 and 59".to_string(),
            ));
        }
        if !(0..=59).contains(&second) {
            return Err(ToolError::InvalidDateField(
                "second must be between 0 and 59".to_string(),
            ));
        }

        tz.with_ymd_and_hms(
            year as i32,
            month as u32,
            day as u32,
            hour as u32,
            minute as u32,
            second as u32,
        )
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ToolError::InvalidDateField("invalid date".to_string()))
    }
}

/// Number of days in the given month, or `None` for an unrepresentable date.
fn days_in_month(year: i32, month: u32) -> Option<i64> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days())
}

/// The fully formatted conversion result block the host renders: epoch
/// values, GMT/ISO/local strings, zone label, and a relative phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendition {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub gmt: String,
    pub iso: String,
    pub local: String,
    pub zone: String,
    pub relative: String,
}

impl Rendition {
    /// Format `instant` for display, relative to `now`, in the host's zone.
    pub fn of<Tz: TimeZone>(instant: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> Self {
        let offset = instant.with_timezone(tz).offset().fix();
        let local = instant.with_timezone(&offset);
        Self {
            unix_seconds: instant.timestamp(),
            unix_millis: instant.timestamp_millis(),
            gmt: instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string(),
            iso: instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            local: local.format("%Y-%m-%d %H:%M:%S").to_string(),
            zone: zone_label(offset),
            relative: relative_phrase(instant, now),
        }
    }
}

/// The live "Current Time" block: epoch seconds/millis plus ISO and local
/// strings. Recomputed by the host on its own tick; the core holds no timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPanel {
    pub unix_seconds: i64,
    pub unix_millis: i64,
    pub iso: String,
    pub local: String,
    pub zone: String,
}

impl NowPanel {
    pub fn of<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> Self {
        let offset = now.with_timezone(tz).offset().fix();
        let local = now.with_timezone(&offset);
        Self {
            unix_seconds: now.timestamp(),
            unix_millis: now.timestamp_millis(),
            iso: now.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            local: local.format("%Y-%m-%d %H:%M:%S").to_string(),
            zone: zone_label(offset),
        }
    }
}

/// `UTC±HH:MM` label for a fixed offset.
fn zone_label(offset: FixedOffset) -> String {
    let total = offset.local_minus_utc();
    let sign = if total >= 0 { '+' } else { '-' };
    let abs = total.abs();
    format!("UTC{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
}

/// Human phrase for the distance between `instant` and `now`: "5 minutes
/// ago", "in 2 days". Months are 30 days and years 365 for this purpose.
pub fn relative_phrase(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = instant.signed_duration_since(now);
    let is_past = delta < Duration::zero();

    let seconds = delta.num_seconds().abs();
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    let (value, unit) = if years > 0 {
        (years, "year")
    } else if months > 0 {
        (months, "month")
    } else if days > 0 {
        (days, "day")
    } else if hours > 0 {
        (hours, "hour")
    } else if minutes > 0 {
        (minutes, "minute")
    } else {
        (seconds, "second")
    };
    let suffix = if value == 1 { "" } else { "s" };

    if is_past {
        format!("{value} {unit}{suffix} ago")
    } else {
        format!("in {value} {unit}{suffix}")
    }
}
