//! Overtime splitting into the two premium tiers.
//!
//! Tier A is paid at 50%, tier B at 25%. Early arrivals are classified as a
//! whole by where the check-in falls relative to the early cutoff; late
//! departures are split at the late cutoff. Each tier is credited only when
//! its accumulated minutes exceed the minimum block.

use crate::core::calculator::schedule::{ShiftWindow, resolve_schedule};
use crate::models::{Overtime, RawValue};
use crate::models::attendance::remark_contains;
use crate::utils::time::{positive_minutes, round2};
use crate::utils::{normalize_date, parse_time};
use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};

/// Thresholds of the overtime policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OvertimeRules {
    /// Early arrivals checked in before this time go to tier A.
    pub early_cutoff: NaiveTime,
    /// Time worked past this time goes to tier A.
    pub late_cutoff: NaiveTime,
    /// Tier totals at or below this many minutes are discarded.
    pub min_minutes: f64,
}

impl Default for OvertimeRules {
    fn default() -> Self {
        Self {
            early_cutoff: NaiveTime::from_hms_opt(7, 0, 0).unwrap_or_default(),
            late_cutoff: NaiveTime::from_hms_opt(21, 0, 0).unwrap_or_default(),
            min_minutes: 30.0,
        }
    }
}

impl OvertimeRules {
    /// Minutes → credited hours (2 decimals), or zero under the minimum block.
    fn credit(&self, minutes: f64) -> f64 {
        if minutes > self.min_minutes {
            round2(minutes / 60.0)
        } else {
            0.0
        }
    }
}

/// Premium hours for one day.
///
/// Returns zero for both tiers when a punch is missing, when the remark marks
/// the day as absent ("ausente") or off ("libre"), or when the date cannot be
/// read.
pub fn compute_overtime(
    check_in: &RawValue,
    check_out: &RawValue,
    date: &RawValue,
    shift: &str,
    remark: &str,
    rules: &OvertimeRules,
) -> Overtime {
    if remark_contains(remark, "ausente") || remark_contains(remark, "libre") {
        return Overtime::default();
    }

    let (Some(ci), Some(co)) = (parse_time(check_in), parse_time(check_out)) else {
        return Overtime::default();
    };
    let Some(day) = normalize_date(date) else {
        return Overtime::default();
    };

    split_overtime(day, ci, co, resolve_schedule(shift, day.weekday()), rules)
}

pub(crate) fn split_overtime(
    day: NaiveDate,
    check_in: NaiveTime,
    check_out: NaiveTime,
    window: Option<ShiftWindow>,
    rules: &OvertimeRules,
) -> Overtime {
    let ci = day.and_time(check_in);
    let mut co = day.and_time(check_out);

    // salida después de medianoche
    if check_out < check_in {
        co += TimeDelta::days(1);
    }

    let Some(window) = window else {
        return Overtime {
            tier_a_hours: 0.0,
            tier_b_hours: rules.credit(positive_minutes(co - ci)),
        };
    };

    let start = day.and_time(window.start);
    let mut end = day.and_time(window.end);
    if window.end <= window.start {
        end += TimeDelta::days(1);
    }

    let mut tier_a = 0.0;
    let mut tier_b = 0.0;

    // Before the shift
    if ci < start {
        let span = positive_minutes(co.min(start) - ci);
        if check_in < rules.early_cutoff {
            tier_a += span;
        } else {
            tier_b += span;
        }
    }

    // After the shift, counted from when the employee was actually there
    if co > end {
        let late = day.and_time(rules.late_cutoff);
        let from = end.max(ci);
        tier_b += positive_minutes(co.min(late) - from);
        tier_a += positive_minutes(co - from.max(late));
    }

    Overtime {
        tier_a_hours: rules.credit(tier_a),
        tier_b_hours: rules.credit(tier_b),
    }
}
