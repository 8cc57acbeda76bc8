// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_distinct, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::Report;
use crate::ui::messages::warning;
use std::path::Path;

/// Logica di alto livello per l'export del report.
pub struct ExportLogic;

impl ExportLogic {
    /// Scrive il report nel formato richiesto.
    ///
    /// - `source`: file letto, mai sovrascritto
    /// - `path`: file di output
    /// - `force`: sovrascrive senza chiedere
    pub fn export(
        report: &Report,
        format: ExportFormat,
        source: &Path,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_distinct(path, source)?;
        ensure_writable(path, force)?;

        if report.is_empty() {
            warning("No attendance rows to report: writing an empty report.");
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(report, path)?,
            ExportFormat::Csv => export_csv(report, path)?,
            ExportFormat::Json => export_json(report, path)?,
            ExportFormat::Pdf => export_pdf(report, path, &pdf_title(source))?,
        }

        Ok(())
    }
}

/// Titolo del PDF dal nome del file sorgente.
fn pdf_title(source: &Path) -> String {
    match source.file_name() {
        Some(name) => format!("Reloj control: {}", name.to_string_lossy()),
        None => "Reloj control".to_string(),
    }
}
