//! Shift schedule resolution from free-text descriptors.
//!
//! The descriptor is whatever the attendance platform printed next to
//! "Tipo de Turno", e.g. `"08:00-17:00 / 08:00-16:00"` or
//! `"Lu-Ju 8:30 a 18:00 Vi 8:30 a 17:00"`. Times are taken positionally:
//! the first pair governs Monday to Thursday, the second pair (if any)
//! governs Friday. Weekends are never scheduled.

use chrono::{NaiveTime, Weekday};
use regex::Regex;
use std::sync::LazyLock;

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}:\d{2}").expect("valid time regex"));

/// Scheduled start and end for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// A descriptor parsed once, resolvable for any weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftSchedule {
    pub mon_thu: Option<ShiftWindow>,
    pub friday: Option<ShiftWindow>,
}

impl ShiftSchedule {
    pub fn parse(descriptor: &str) -> Self {
        let times: Vec<&str> = TIME_RE.find_iter(descriptor).map(|m| m.as_str()).collect();

        if times.len() < 2 {
            return Self::default();
        }

        Self {
            mon_thu: window(times[0], times[1]),
            friday: if times.len() >= 4 {
                window(times[2], times[3])
            } else {
                None
            },
        }
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Option<ShiftWindow> {
        match weekday {
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => self.mon_thu,
            Weekday::Fri => self.friday,
            Weekday::Sat | Weekday::Sun => None,
        }
    }
}

fn window(start: &str, end: &str) -> Option<ShiftWindow> {
    Some(ShiftWindow {
        start: NaiveTime::parse_from_str(start, "%H:%M").ok()?,
        end: NaiveTime::parse_from_str(end, "%H:%M").ok()?,
    })
}

/// Scheduled window of `descriptor` for `weekday`, or `None` when unscheduled.
pub fn resolve_schedule(descriptor: &str, weekday: Weekday) -> Option<ShiftWindow> {
    ShiftSchedule::parse(descriptor).for_weekday(weekday)
}
