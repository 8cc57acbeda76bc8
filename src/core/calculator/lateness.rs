use crate::core::calculator::schedule::{ShiftWindow, resolve_schedule};
use crate::models::{AttendanceRecord, RawValue};
use crate::utils::{normalize_date, parse_time};
use chrono::{Datelike, NaiveTime};

/// Minutes late against the scheduled start of the record's weekday.
///
/// Zero when the punch is missing or unreadable, when the date cannot be
/// normalized or when the weekday has no scheduled start.
pub fn compute_lateness(check_in: &RawValue, date: &RawValue, shift: &str) -> i64 {
    let Some(day) = normalize_date(date) else {
        return 0;
    };
    let Some(check_in) = parse_time(check_in) else {
        return 0;
    };

    lateness_minutes(check_in, resolve_schedule(shift, day.weekday()))
}

/// Lateness of a whole record: absent and day-off rows never count as late.
pub fn compute_lateness_for(record: &AttendanceRecord) -> i64 {
    if record.is_absent() || record.is_day_off() {
        return 0;
    }
    compute_lateness(&record.check_in, &record.date, &record.employee.shift)
}

/// Whole minutes (floored) by which `check_in` passes the window start.
pub(crate) fn lateness_minutes(check_in: NaiveTime, window: Option<ShiftWindow>) -> i64 {
    match window {
        Some(w) if check_in > w.start => (check_in - w.start).num_seconds() / 60,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHIFT: &str = "08:00-17:00";
    // 06-01-2025 is a Monday
    const MONDAY: &str = "06-01-2025";

    fn late(ci: &str, date: &str, shift: &str) -> i64 {
        compute_lateness(&RawValue::text(ci), &RawValue::text(date), shift)
    }

    #[test]
    fn fifteen_minutes_late() {
        assert_eq!(late("08:15:00", MONDAY, SHIFT), 15);
        assert_eq!(late("08:15", MONDAY, SHIFT), 15);
    }

    #[test]
    fn partial_minutes_are_floored() {
        assert_eq!(late("08:15:59", MONDAY, SHIFT), 15);
        assert_eq!(late("08:00:59", MONDAY, SHIFT), 0);
    }

    #[test]
    fn on_time_or_early_is_zero() {
        assert_eq!(late("08:00:00", MONDAY, SHIFT), 0);
        assert_eq!(late("07:42:00", MONDAY, SHIFT), 0);
    }

    #[test]
    fn sentinel_or_bad_inputs_are_zero() {
        assert_eq!(late("-", MONDAY, SHIFT), 0);
        assert_eq!(late("", MONDAY, SHIFT), 0);
        assert_eq!(late("08:30", "not a date", SHIFT), 0);
        assert_eq!(late("08:30", MONDAY, "sin turno"), 0);
    }

    #[test]
    fn weekend_and_friday_rules() {
        // 11-01-2025 is a Saturday, 10-01-2025 a Friday
        assert_eq!(late("09:00", "11-01-2025", SHIFT), 0);
        assert_eq!(late("09:00", "10-01-2025", SHIFT), 0);
        assert_eq!(late("09:00", "10-01-2025", "08:00-17:00 08:30-16:00"), 30);
    }

    #[test]
    fn absent_record_is_never_late() {
        let mut rec = AttendanceRecord {
            date: RawValue::text(MONDAY),
            check_in: RawValue::text("09:00"),
            ..Default::default()
        };
        rec.employee.shift = SHIFT.to_string();
        assert_eq!(compute_lateness_for(&rec), 60);

        rec.remark = "AUSENTE".into();
        assert_eq!(compute_lateness_for(&rec), 0);
        rec.remark = "Libre".into();
        assert_eq!(compute_lateness_for(&rec), 0);
    }

    #[test]
    fn no_upper_cap() {
        assert_eq!(late("23:59:00", MONDAY, SHIFT), 959);
    }
}
