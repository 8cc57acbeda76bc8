// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{DETAIL_HEADERS, SUMMARY_HEADERS, detail_to_row, summary_to_row};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfManager, PdfRow};
use crate::models::{Report, RowStatus};
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: prima il "Resumen", poi il "Detalle Diario".
pub(crate) fn export_pdf(report: &Report, path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let pdf = build_pdf(report, title);
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

pub(crate) fn build_pdf(report: &Report, title: &str) -> PdfManager {
    let summary: Vec<PdfRow> = report
        .summary
        .iter()
        .map(|s| PdfRow {
            cells: summary_to_row(s),
            fill: None,
        })
        .collect();

    let detail: Vec<PdfRow> = report
        .detail
        .iter()
        .map(|r| PdfRow {
            cells: detail_to_row(r),
            fill: status_fill(r.status),
        })
        .collect();

    let mut pdf = PdfManager::new();
    pdf.write_table(&format!("{title} - Resumen"), &SUMMARY_HEADERS, &summary);
    pdf.write_table(&format!("{title} - Detalle Diario"), &DETAIL_HEADERS, &detail);
    pdf
}

/// Stessi colori dell'XLSX (FFC7CE / FFFACD).
fn status_fill(status: RowStatus) -> Option<(f32, f32, f32)> {
    match status {
        RowStatus::Absent => Some((1.0, 0.78, 0.808)),
        RowStatus::MissingPunch => Some((1.0, 0.98, 0.804)),
        RowStatus::Normal => None,
    }
}
