// src/export/model.rs

use crate::models::{DetailRow, EmployeeSummary, Report};
use crate::utils::{format_minutes, hours_to_hhmm};
use serde::Serialize;

/// Header "Detalle Diario"
pub(crate) const DETAIL_HEADERS: [&str; 12] = [
    "Funcionario",
    "Rut",
    "Organigrama",
    "Turno",
    "Periodo",
    "Fecha",
    "Entrada",
    "Salida",
    "Atraso (hh:mm)",
    "50%",
    "25%",
    "Descripción",
];

/// Header "Resumen"
pub(crate) const SUMMARY_HEADERS: [&str; 9] = [
    "Funcionario",
    "Rut",
    "Organigrama",
    "Turno",
    "Periodo",
    "Total 50%",
    "Total 25%",
    "Total Atraso",
    "Total Horas",
];

pub(crate) fn detail_to_row(r: &DetailRow) -> Vec<String> {
    vec![
        r.employee.name.clone(),
        r.employee.id.clone(),
        r.employee.org_unit.clone(),
        r.employee.shift.clone(),
        r.employee.period.clone(),
        r.date.to_string(),
        r.check_in.to_string(),
        r.check_out.to_string(),
        r.late_hhmm.clone(),
        r.tier_a_hhmm.clone(),
        r.tier_b_hhmm.clone(),
        r.remark.clone(),
    ]
}

pub(crate) fn summary_to_row(s: &EmployeeSummary) -> Vec<String> {
    vec![
        s.employee.name.clone(),
        s.employee.id.clone(),
        s.employee.org_unit.clone(),
        s.employee.shift.clone(),
        s.employee.period.clone(),
        hours_to_hhmm(s.total_tier_a_hours),
        hours_to_hhmm(s.total_tier_b_hours),
        format_minutes(s.total_late_minutes),
        hours_to_hhmm(s.total_hours()),
    ]
}

/// Flat detail row for JSON.
#[derive(Serialize, Clone, Debug)]
pub struct DetailExport {
    pub name: String,
    pub id: String,
    pub org_unit: String,
    pub shift: String,
    pub period: String,
    pub date: String,
    pub check_in: String,
    pub check_out: String,
    pub late: String,
    pub tier_a: String,
    pub tier_b: String,
    pub remark: String,
    pub status: &'static str,
}

/// Flat summary row for JSON.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub name: String,
    pub id: String,
    pub org_unit: String,
    pub shift: String,
    pub period: String,
    pub total_tier_a: String,
    pub total_tier_b: String,
    pub total_late: String,
    pub total_hours: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    pub detail: Vec<DetailExport>,
    pub summary: Vec<SummaryExport>,
}

impl From<&Report> for ReportExport {
    fn from(report: &Report) -> Self {
        let detail = report
            .detail
            .iter()
            .map(|r| DetailExport {
                name: r.employee.name.clone(),
                id: r.employee.id.clone(),
                org_unit: r.employee.org_unit.clone(),
                shift: r.employee.shift.clone(),
                period: r.employee.period.clone(),
                date: r.date.to_string(),
                check_in: r.check_in.to_string(),
                check_out: r.check_out.to_string(),
                late: r.late_hhmm.clone(),
                tier_a: r.tier_a_hhmm.clone(),
                tier_b: r.tier_b_hhmm.clone(),
                remark: r.remark.clone(),
                status: r.status.as_str(),
            })
            .collect();

        let summary = report
            .summary
            .iter()
            .map(|s| SummaryExport {
                name: s.employee.name.clone(),
                id: s.employee.id.clone(),
                org_unit: s.employee.org_unit.clone(),
                shift: s.employee.shift.clone(),
                period: s.employee.period.clone(),
                total_tier_a: hours_to_hhmm(s.total_tier_a_hours),
                total_tier_b: hours_to_hhmm(s.total_tier_b_hours),
                total_late: format_minutes(s.total_late_minutes),
                total_hours: hours_to_hhmm(s.total_hours()),
            })
            .collect();

        Self { detail, summary }
    }
}
