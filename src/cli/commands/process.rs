use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ingest::{InputFormat, load_records};
use crate::models::Report;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::{default_output, has_extension};
use std::path::Path;

/// Handle the `process` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        file,
        out,
        format,
        force,
        any_extension,
    } = cmd
    {
        if !*any_extension && !has_extension(file, "xls") {
            return Err(AppError::UnsupportedExtension(file.display().to_string()));
        }

        let report = load_report(file, cfg)?;

        let format = format.unwrap_or(cfg.default_format);
        let out = out
            .clone()
            .unwrap_or_else(|| default_output(file, format.extension()));

        ExportLogic::export(&report, format, file, &out, *force)?;

        success(format!(
            "{} rows, {} employees → {}",
            report.detail.len(),
            report.summary.len(),
            out.display()
        ));
    }

    Ok(())
}

/// Reads, parses and aggregates one timesheet export.
pub(crate) fn load_report(file: &Path, cfg: &Config) -> AppResult<Report> {
    let rules = cfg.rules()?;

    let ingested = load_records(file)?;
    let kind = match ingested.format {
        InputFormat::Html => "HTML table",
        InputFormat::Workbook => "workbook",
    };
    info(format!(
        "Read {} ({kind}): {} day tables, {} records",
        file.display(),
        ingested.tables,
        ingested.records.len()
    ));

    let report = Core::build_report(&ingested.records, &rules)?;

    if report.dropped > 0 {
        warning(format!(
            "{} rows skipped: date not recognized",
            report.dropped
        ));
    }

    Ok(report)
}
