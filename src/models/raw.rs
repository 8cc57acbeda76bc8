//! Cell values as handed over by the ingestion adapters.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Serialize, Serializer};
use std::fmt;

/// A single table cell, before any attendance semantics are applied.
///
/// Workbook cells may arrive already typed (dates, times, numbers); HTML
/// cells are always text.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Empty,
    Text(String),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Number(f64),
}

impl RawValue {
    /// Builds a value from cell text, mapping blank text to `Empty`.
    pub fn text<S: Into<String>>(s: S) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            RawValue::Empty
        } else {
            RawValue::Text(s)
        }
    }

    /// True for the "no punch recorded" sentinel: absent, blank, `-` or "none".
    pub fn is_sentinel(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(s) => {
                let t = s.trim();
                t.is_empty() || t == "-" || t.eq_ignore_ascii_case("none")
            }
            _ => false,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Empty => Ok(()),
            RawValue::Text(s) => write!(f, "{}", s.trim()),
            RawValue::DateTime(dt) => {
                if dt.time().num_seconds_from_midnight() == 0 {
                    write!(f, "{}", dt.format("%d-%m-%Y"))
                } else {
                    write!(f, "{}", dt.format("%d-%m-%Y %H:%M:%S"))
                }
            }
            RawValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            RawValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for RawValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
