// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::excel_date::{date_serial, time_serial};
use crate::export::model::{DETAIL_HEADERS, SUMMARY_HEADERS, detail_to_row, summary_to_row};
use crate::export::notify_export_success;
use crate::models::{Report, RowStatus};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const FILL_ABSENT: u32 = 0xFFC7CE;
const FILL_MISSING_PUNCH: u32 = 0xFFFACD;

/// Export XLSX: "Detalle Diario" + "Resumen", con colori per stato.
pub(crate) fn export_xlsx(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = build_workbook(report)?;
    workbook.save(path)?;

    notify_export_success("XLSX", path);
    Ok(())
}

pub(crate) fn build_workbook(report: &Report) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();

    let detail = workbook.add_worksheet();
    detail.set_name("Detalle Diario")?;
    write_detail(detail, report)?;

    let summary = workbook.add_worksheet();
    summary.set_name("Resumen")?;
    write_summary(summary, report)?;

    Ok(workbook)
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_headers(ws: &mut Worksheet, headers: &[&str]) -> AppResult<Vec<usize>> {
    let fmt = header_format();
    for (col, header) in headers.iter().enumerate() {
        ws.write_with_format(0, col as u16, *header, &fmt)?;
    }
    ws.set_freeze_panes(1, 0)?;
    Ok(headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect())
}

fn cell_format(fill: Option<u32>) -> Format {
    let fmt = Format::new().set_border(FormatBorder::Thin);
    match fill {
        Some(rgb) => fmt
            .set_background_color(Color::RGB(rgb))
            .set_pattern(FormatPattern::Solid),
        None => fmt,
    }
}

fn fill_for(status: RowStatus) -> Option<u32> {
    match status {
        RowStatus::Absent => Some(FILL_ABSENT),
        RowStatus::MissingPunch => Some(FILL_MISSING_PUNCH),
        RowStatus::Normal => None,
    }
}

fn write_detail(ws: &mut Worksheet, report: &Report) -> AppResult<()> {
    let mut widths = write_headers(ws, &DETAIL_HEADERS)?;

    for (i, r) in report.detail.iter().enumerate() {
        let row = (i + 1) as u32;
        let base = cell_format(fill_for(r.status));
        let values = detail_to_row(r);

        for (col, value) in values.iter().enumerate() {
            // Fecha, Entrada, Salida come valori Excel veri
            let serial = match col {
                5 => date_serial(&r.date),
                6 => time_serial(&r.check_in),
                7 => time_serial(&r.check_out),
                _ => None,
            };

            match serial {
                Some((num_format, n)) => {
                    let fmt = base.clone().set_num_format(num_format);
                    ws.write_with_format(row, col as u16, n, &fmt)?;
                }
                None => {
                    ws.write_with_format(row, col as u16, value.as_str(), &base)?;
                }
            }

            widths[col] = widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    set_widths(ws, &widths)
}

fn write_summary(ws: &mut Worksheet, report: &Report) -> AppResult<()> {
    let mut widths = write_headers(ws, &SUMMARY_HEADERS)?;
    let fmt = cell_format(None);

    for (i, s) in report.summary.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in summary_to_row(s).iter().enumerate() {
            ws.write_with_format(row, col as u16, value.as_str(), &fmt)?;
            widths[col] = widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    set_widths(ws, &widths)
}

fn set_widths(ws: &mut Worksheet, widths: &[usize]) -> AppResult<()> {
    for (c, w) in widths.iter().enumerate() {
        ws.set_column_width(c as u16, *w as f64 + 2.0)?;
    }
    Ok(())
}
