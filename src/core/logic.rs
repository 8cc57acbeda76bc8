use crate::core::aggregate::aggregate;
use crate::core::calculator::OvertimeRules;
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, Report};

pub struct Core;

impl Core {
    /// Aggregates the records of one report.
    ///
    /// An empty record list is a valid, empty report (the period had no
    /// activity). A non-empty list where no row has a readable date means
    /// the input was not understood, and is reported as `NoValidRows`.
    pub fn build_report(records: &[AttendanceRecord], rules: &OvertimeRules) -> AppResult<Report> {
        let report = aggregate(records, rules);

        if !records.is_empty() && report.detail.is_empty() {
            return Err(AppError::NoValidRows(records.len()));
        }

        Ok(report)
    }
}
