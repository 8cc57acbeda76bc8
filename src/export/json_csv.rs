// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{DETAIL_HEADERS, detail_to_row};
use crate::export::{ReportExport, notify_export_success};
use crate::models::Report;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (detail + summary).
pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&ReportExport::from(report))
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV del solo "Detalle Diario", con gli stessi header dell'XLSX.
pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(DETAIL_HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in &report.detail {
        wtr.write_record(detail_to_row(row))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
