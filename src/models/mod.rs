pub mod attendance;
pub mod raw;
pub mod report;

pub use attendance::{AttendanceRecord, EmployeeMeta};
pub use raw::RawValue;
pub use report::{DetailRow, EmployeeKey, EmployeeSummary, Overtime, Report, RowStatus};
