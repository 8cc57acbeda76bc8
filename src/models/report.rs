use super::attendance::EmployeeMeta;
use super::raw::RawValue;
use serde::Serialize;

/// Highlighting class of a detail row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowStatus {
    Absent,
    MissingPunch,
    Normal,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Absent => "absent",
            RowStatus::MissingPunch => "missing-punch",
            RowStatus::Normal => "normal",
        }
    }
}

/// Computed premium hours for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Overtime {
    /// "50%" tier
    pub tier_a_hours: f64,
    /// "25%" tier
    pub tier_b_hours: f64,
}

impl Overtime {
    pub fn total_hours(&self) -> f64 {
        self.tier_a_hours + self.tier_b_hours
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub employee: EmployeeMeta,
    pub date: RawValue,
    pub check_in: RawValue,
    pub check_out: RawValue,
    pub late_minutes: i64,
    pub overtime: Overtime,
    pub late_hhmm: String,
    pub tier_a_hhmm: String,
    pub tier_b_hhmm: String,
    pub remark: String,
    pub status: RowStatus,
}

/// Identity used to group summary rows: RUT first, then name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum EmployeeKey {
    Id(String),
    Name(String),
    Unidentified,
}

impl EmployeeKey {
    pub fn for_employee(meta: &EmployeeMeta) -> Self {
        let id = meta.id.trim();
        let name = meta.name.trim();
        if !id.is_empty() {
            EmployeeKey::Id(id.to_string())
        } else if !name.is_empty() {
            EmployeeKey::Name(name.to_string())
        } else {
            EmployeeKey::Unidentified
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeSummary {
    pub key: EmployeeKey,
    pub employee: EmployeeMeta,
    pub total_tier_a_hours: f64,
    pub total_tier_b_hours: f64,
    pub total_late_minutes: i64,
}

impl EmployeeSummary {
    pub fn new(key: EmployeeKey, employee: EmployeeMeta) -> Self {
        Self {
            key,
            employee,
            total_tier_a_hours: 0.0,
            total_tier_b_hours: 0.0,
            total_late_minutes: 0,
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.total_tier_a_hours + self.total_tier_b_hours
    }
}

/// Output of one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub detail: Vec<DetailRow>,
    pub summary: Vec<EmployeeSummary>,
    /// Records skipped because their date could not be read.
    pub dropped: usize,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.detail.is_empty()
    }
}
