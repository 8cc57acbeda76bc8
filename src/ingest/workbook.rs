//! Cell reading for real workbooks (xlsx, xls, ods) via calamine.

use super::SheetRow;
use crate::errors::{AppError, AppResult};
use crate::models::RawValue;
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::io::Cursor;

/// Rows of the first worksheet, as one table.
pub fn read_workbook(bytes: Vec<u8>) -> AppResult<Vec<SheetRow>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| AppError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Workbook("workbook has no worksheets".into()))?
        .map_err(|e| AppError::Workbook(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| SheetRow {
            table: 0,
            cells: row.iter().map(data_to_raw).collect(),
        })
        .collect())
}

/// Maps a calamine cell onto a raw value.
///
/// Date cells whose serial is below one day carry only a time of day.
pub fn data_to_raw(value: &Data) -> RawValue {
    match value {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::text(s.clone()),
        Data::Float(f) => RawValue::Number(*f),
        Data::Int(i) => RawValue::Number(*i as f64),
        Data::Bool(b) => RawValue::Text(b.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) if dt.as_f64() < 1.0 => RawValue::Time(ndt.time()),
            Some(ndt) => RawValue::DateTime(ndt),
            None => RawValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => parse_iso(s).unwrap_or_else(|| RawValue::text(s.clone())),
        Data::Error(_) => RawValue::Empty,
        _ => RawValue::text(value.to_string()),
    }
}

fn parse_iso(s: &str) -> Option<RawValue> {
    let raw = s.trim_end_matches('Z');
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(RawValue::DateTime);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(RawValue::DateTime(dt));
    }
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .ok()
        .map(RawValue::Time)
}
