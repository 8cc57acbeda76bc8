//! Date normalization for the heterogeneous values found in timesheet exports.

use crate::models::RawValue;
use chrono::NaiveDate;

/// Normalizes a raw cell into a calendar date.
///
/// Native date-time cells pass through. Text is read as `dd-mm-YYYY` when it
/// contains a hyphen and as `dd/mm/YYYY` when it contains a slash; the two
/// patterns are never cross-tried. Anything else yields `None`.
pub fn normalize_date(raw: &RawValue) -> Option<NaiveDate> {
    match raw {
        RawValue::DateTime(dt) => Some(dt.date()),
        RawValue::Text(s) => normalize_date_str(s),
        _ => None,
    }
}

pub fn normalize_date_str(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("none") {
        return None;
    }

    if s.contains('-') {
        NaiveDate::parse_from_str(s, "%d-%m-%Y").ok()
    } else if s.contains('/') {
        NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
    } else {
        None
    }
}
