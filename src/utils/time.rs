//! Time utilities: parsing punches, duration helpers, HH:MM formatting.

use crate::models::RawValue;
use chrono::{NaiveTime, TimeDelta};

/// Parses a punch: `HH:MM:SS`, falling back to `HH:MM`.
/// The no-value sentinel (`-`, blank, "none") yields `None`.
pub fn parse_time(raw: &RawValue) -> Option<NaiveTime> {
    match raw {
        RawValue::Time(t) => Some(*t),
        RawValue::DateTime(dt) => Some(dt.time()),
        RawValue::Text(s) => parse_time_str(s),
        _ => None,
    }
}

pub fn parse_time_str(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    if t.is_empty() || t == "-" || t.eq_ignore_ascii_case("none") {
        return None;
    }

    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Fractional minutes of a duration, clamped at zero.
pub fn positive_minutes(d: TimeDelta) -> f64 {
    (d.num_seconds() as f64 / 60.0).max(0.0)
}

/// Minutes → `HH:MM`. Hours are not wrapped at 24.
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Hours → `HH:MM`, rounded to the nearest whole minute.
pub fn hours_to_hhmm(hours: f64) -> String {
    format_minutes((hours * 60.0).round() as i64)
}

/// Rounds to two decimals.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
