use super::raw::RawValue;
use serde::Serialize;

/// Metadata block printed above each employee's day table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeMeta {
    pub name: String,
    /// RUT
    pub id: String,
    pub org_unit: String,
    /// Free-text shift descriptor, e.g. "08:00-17:00 / 08:00-16:00".
    pub shift: String,
    pub period: String,
}

/// One employee, one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceRecord {
    pub employee: EmployeeMeta,
    pub date: RawValue,
    pub check_in: RawValue,
    pub check_out: RawValue,
    pub remark: String,
}

impl AttendanceRecord {
    pub fn is_absent(&self) -> bool {
        remark_contains(&self.remark, "ausente")
    }

    pub fn is_day_off(&self) -> bool {
        remark_contains(&self.remark, "libre")
    }

    pub fn has_missing_punch(&self) -> bool {
        remark_contains(&self.remark, "falta entrada")
            || remark_contains(&self.remark, "falta salida")
            || self.check_in.is_sentinel()
            || self.check_out.is_sentinel()
    }
}

/// Case-insensitive substring match on a remark.
pub fn remark_contains(remark: &str, marker: &str) -> bool {
    remark.to_lowercase().contains(marker)
}
