//! Folds per-day attendance records into the detail and summary tables.

use crate::core::calculator::lateness::compute_lateness_for;
use crate::core::calculator::overtime::{OvertimeRules, split_overtime};
use crate::core::calculator::schedule::ShiftSchedule;
use crate::models::{
    AttendanceRecord, DetailRow, EmployeeKey, EmployeeMeta, EmployeeSummary, Overtime, Report,
    RowStatus,
};
use crate::utils::{format_minutes, hours_to_hhmm, normalize_date, parse_time};
use chrono::Datelike;
use std::collections::HashMap;

/// Summary entries in order of first appearance, keyed by employee identity.
#[derive(Debug, Default)]
pub struct SummaryBook {
    entries: Vec<EmployeeSummary>,
    index: HashMap<EmployeeKey, usize>,
}

impl SummaryBook {
    pub fn entry(&mut self, meta: &EmployeeMeta) -> &mut EmployeeSummary {
        let key = EmployeeKey::for_employee(meta);
        let idx = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                self.entries
                    .push(EmployeeSummary::new(key.clone(), meta.clone()));
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx]
    }

    pub fn into_vec(self) -> Vec<EmployeeSummary> {
        self.entries
    }
}

/// Classification used by the emitters to highlight a detail row.
pub fn classify(record: &AttendanceRecord) -> RowStatus {
    if record.is_absent() {
        RowStatus::Absent
    } else if record.has_missing_punch() {
        RowStatus::MissingPunch
    } else {
        RowStatus::Normal
    }
}

/// Computes lateness and overtime for every record with a readable date.
///
/// Records whose date cannot be normalized are counted in `Report::dropped`
/// and otherwise ignored. The function is pure: the same input always
/// produces the same report.
pub fn aggregate(records: &[AttendanceRecord], rules: &OvertimeRules) -> Report {
    let mut schedules: HashMap<&str, ShiftSchedule> = HashMap::new();
    let mut book = SummaryBook::default();
    let mut detail = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for rec in records {
        let Some(day) = normalize_date(&rec.date) else {
            dropped += 1;
            continue;
        };

        let schedule = *schedules
            .entry(rec.employee.shift.as_str())
            .or_insert_with(|| ShiftSchedule::parse(&rec.employee.shift));
        let window = schedule.for_weekday(day.weekday());

        let check_in = parse_time(&rec.check_in);
        let check_out = parse_time(&rec.check_out);
        let suppressed = rec.is_absent() || rec.is_day_off();

        let late_minutes = compute_lateness_for(rec);

        let overtime = match (check_in, check_out) {
            (Some(ci), Some(co)) if !suppressed => split_overtime(day, ci, co, window, rules),
            _ => Overtime::default(),
        };

        let entry = book.entry(&rec.employee);
        entry.total_late_minutes += late_minutes;
        entry.total_tier_a_hours += overtime.tier_a_hours;
        entry.total_tier_b_hours += overtime.tier_b_hours;

        detail.push(DetailRow {
            employee: rec.employee.clone(),
            date: rec.date.clone(),
            check_in: rec.check_in.clone(),
            check_out: rec.check_out.clone(),
            late_minutes,
            overtime,
            late_hhmm: format_minutes(late_minutes),
            tier_a_hhmm: hours_to_hhmm(overtime.tier_a_hours),
            tier_b_hhmm: hours_to_hhmm(overtime.tier_b_hours),
            remark: rec.remark.clone(),
            status: classify(rec),
        });
    }

    Report {
        detail,
        summary: book.into_vec(),
        dropped,
    }
}
