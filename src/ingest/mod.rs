//! Ingestion adapter: turns an exported file into attendance records.
//!
//! Both container kinds are reduced to a list of table rows; a single
//! collector then walks the rows, tracking the current employee metadata
//! block and the active day table.

mod columns;
mod decode;
mod html;
mod meta;
mod workbook;

pub use columns::ColumnMap;
pub use decode::{InputFormat, decode_text, detect_format};
pub use html::parse_html;
pub use workbook::read_workbook;

use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, EmployeeMeta, RawValue};
use meta::{MetaLabel, clean_value, meta_from_row, meta_from_text};
use std::fs;
use std::path::Path;

/// One table row; `table` distinguishes rows of different tables.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub table: usize,
    pub cells: Vec<RawValue>,
}

impl SheetRow {
    fn texts(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.to_string()).collect()
    }

    fn cell(&self, i: usize) -> RawValue {
        self.cells.get(i).cloned().unwrap_or_default()
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.to_string().trim().is_empty())
    }
}

/// Positions used by workbook exports when the "Dia" header row carries no
/// recognizable column names: date, in, out in B–D and the remark in F.
const FIXED_COLUMNS: ColumnMap = ColumnMap {
    day: Some(0),
    date: 1,
    check_in: 2,
    check_out: 3,
    remark: Some(5),
};

/// Records extracted from one file.
#[derive(Debug)]
pub struct Ingested {
    pub format: InputFormat,
    pub records: Vec<AttendanceRecord>,
    /// Day tables found; zero means the layout was not recognized.
    pub tables: usize,
}

/// Fields read by position from column B of the rows that follow a
/// workbook "Funcionario" row.
const BLOCK_FIELDS: [MetaLabel; 4] = [
    MetaLabel::Id,
    MetaLabel::OrgUnit,
    MetaLabel::Shift,
    MetaLabel::Period,
];

#[derive(Debug, Clone, Copy)]
struct ActiveTable {
    id: usize,
    map: ColumnMap,
    /// Fixed-position table: a blank day cell ends it.
    positional: bool,
}

#[derive(Debug)]
struct Collector {
    format: InputFormat,
    meta: EmployeeMeta,
    /// Next `BLOCK_FIELDS` index while inside a workbook metadata block.
    meta_block: Option<usize>,
    active: Option<ActiveTable>,
    emitted_for_meta: bool,
    tables: usize,
    records: Vec<AttendanceRecord>,
}

impl Collector {
    fn new(base: EmployeeMeta, format: InputFormat) -> Self {
        Self {
            format,
            meta: base,
            meta_block: None,
            active: None,
            emitted_for_meta: false,
            tables: 0,
            records: Vec::new(),
        }
    }

    fn push_row(&mut self, row: &SheetRow) {
        let texts = row.texts();

        if let Some(offset) = self.meta_block.take()
            && self.block_row(offset, &texts)
        {
            return;
        }

        if let Some((label, value)) = meta_from_row(&texts) {
            if label == MetaLabel::Name {
                if self.emitted_for_meta {
                    // nuevo funcionario
                    self.meta = EmployeeMeta::default();
                    self.emitted_for_meta = false;
                }
                if self.format == InputFormat::Workbook {
                    self.meta_block = Some(0);
                }
            }
            self.active = None;
            *label.slot(&mut self.meta) = value;
            return;
        }

        if let Some(table) = self.table_start(row.table, &texts) {
            self.active = Some(table);
            self.tables += 1;
            return;
        }

        let Some(active) = self.active else {
            return;
        };
        if row.table != active.id {
            return;
        }

        let day = active.map.day.and_then(|d| texts.get(d)).map(|t| t.trim());
        if active.positional {
            if day.is_none_or(str::is_empty) {
                self.active = None;
                return;
            }
        } else if row.is_blank() {
            return;
        }

        if let Some(day) = day {
            let day = day.to_lowercase();
            if day == "totales" || day == "none" {
                return;
            }
        }

        let map = active.map;
        self.records.push(AttendanceRecord {
            employee: self.meta.clone(),
            date: row.cell(map.date),
            check_in: row.cell(map.check_in),
            check_out: row.cell(map.check_out),
            remark: map
                .remark
                .and_then(|i| texts.get(i))
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        });
        self.emitted_for_meta = true;
    }

    /// One row of a workbook metadata block. A recognized label wins,
    /// otherwise column B fills the field of this position. Returns false
    /// when the row belongs to something else (a day table or the next
    /// employee) and must be handled normally.
    fn block_row(&mut self, offset: usize, texts: &[String]) -> bool {
        if self.table_start(0, texts).is_some() {
            return false;
        }

        match meta_from_row(texts) {
            Some((MetaLabel::Name, _)) => return false,
            Some((label, value)) => *label.slot(&mut self.meta) = value,
            None => {
                let value = texts.get(1).map(|v| clean_value(v)).unwrap_or_default();
                if !value.is_empty() {
                    *BLOCK_FIELDS[offset].slot(&mut self.meta) = value;
                }
            }
        }

        if offset + 1 < BLOCK_FIELDS.len() {
            self.meta_block = Some(offset + 1);
        }
        true
    }

    /// Recognizes the header row of a day table.
    ///
    /// Workbooks follow the fixed layout whenever column A reads "Dia";
    /// HTML tables are mapped by their header names first.
    fn table_start(&self, id: usize, texts: &[String]) -> Option<ActiveTable> {
        let dia = texts.first().is_some_and(|c| {
            let c = c.trim().to_lowercase();
            c == "dia" || c == "día"
        });

        let (map, positional) = match ColumnMap::from_headers(texts) {
            _ if dia && self.format == InputFormat::Workbook => (FIXED_COLUMNS, true),
            Some(map) => (map, false),
            None if dia => (FIXED_COLUMNS, true),
            None => return None,
        };

        Some(ActiveTable {
            id,
            map,
            positional,
        })
    }
}

/// Walks the rows of one document and collects its records.
pub fn collect_records(
    rows: &[SheetRow],
    base: EmployeeMeta,
    format: InputFormat,
) -> (Vec<AttendanceRecord>, usize) {
    let mut collector = Collector::new(base, format);
    for row in rows {
        collector.push_row(row);
    }
    (collector.records, collector.tables)
}

/// Detects the container and extracts records from raw file bytes.
///
/// `source` only labels errors.
pub fn read_records(bytes: Vec<u8>, source: &str) -> AppResult<Ingested> {
    let format = detect_format(&bytes);

    let (records, tables) = match format {
        InputFormat::Html => {
            let page = parse_html(&decode_text(&bytes));
            collect_records(&page.rows, meta_from_text(&page.text), format)
        }
        InputFormat::Workbook => {
            collect_records(&read_workbook(bytes)?, EmployeeMeta::default(), format)
        }
    };

    if tables == 0 {
        return Err(AppError::NoAttendanceTable(source.to_string()));
    }

    Ok(Ingested {
        format,
        records,
        tables,
    })
}

pub fn load_records(path: &Path) -> AppResult<Ingested> {
    let bytes = fs::read(path)?;
    read_records(bytes, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(table: usize, cells: &[&str]) -> SheetRow {
        SheetRow {
            table,
            cells: cells.iter().map(|c| RawValue::text(*c)).collect(),
        }
    }

    fn workbook_layout() -> Vec<SheetRow> {
        vec![
            row(0, &["Reporte de Asistencia"]),
            row(0, &["Funcionario", ": Ana Pérez"]),
            row(0, &["Rut", ": 11.111.111-1"]),
            row(0, &["Organigrama", ": Finanzas"]),
            row(0, &["Turno", ": 08:00-17:00 / 08:00-16:00"]),
            row(0, &["Periodo", ": Enero 2025"]),
            row(0, &[]),
            row(0, &["Dia", "", "", "", "", ""]),
            row(0, &["Lunes", "06-01-2025", "08:15:00", "17:00:00", "", ""]),
            row(0, &["Martes", "07-01-2025", "-", "-", "", "Ausente"]),
            row(0, &["Totales", "", "", "", "", ""]),
            row(0, &["", "", "", "", "", ""]),
            row(0, &["Funcionario", ": Luis Soto"]),
            row(0, &["Rut", ": 22.222.222-2"]),
            row(0, &["Dia", "Fecha", "Entrada", "Salida", "Horas", "Descripción"]),
            row(0, &["Lunes", "06-01-2025", "06:00:00", "17:00:00", "", ""]),
        ]
    }

    #[test]
    fn workbook_blocks_split_by_employee() {
        let (records, tables) = collect_records(
            &workbook_layout(),
            EmployeeMeta::default(),
            InputFormat::Workbook,
        );
        assert_eq!(tables, 2);
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].employee.name, "Ana Pérez");
        assert_eq!(records[0].employee.shift, "08:00-17:00 / 08:00-16:00");
        assert_eq!(records[0].check_in.to_string(), "08:15:00");
        assert_eq!(records[1].remark, "Ausente");

        assert_eq!(records[2].employee.name, "Luis Soto");
        assert_eq!(records[2].employee.id, "22.222.222-2");
        // a new block does not inherit the previous employee's fields
        assert_eq!(records[2].employee.org_unit, "");
    }

    #[test]
    fn rows_from_other_tables_are_ignored() {
        let rows = vec![
            row(0, &["Fecha", "Entrada", "Salida"]),
            row(0, &["06-01-2025", "08:00", "17:00"]),
            row(1, &["06-01-2025", "09:00", "18:00"]),
        ];
        let (records, tables) = collect_records(&rows, EmployeeMeta::default(), InputFormat::Html);
        assert_eq!(tables, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].check_in.to_string(), "08:00");
    }

    #[test]
    fn base_meta_is_used_until_overridden() {
        let base = EmployeeMeta {
            name: "Desde Texto".into(),
            period: "Enero".into(),
            ..Default::default()
        };
        let rows = vec![
            row(0, &["Rut", "9-9"]),
            row(0, &["Fecha", "Entrada", "Salida"]),
            row(0, &["06-01-2025", "08:00", "17:00"]),
        ];
        let (records, _) = collect_records(&rows, base, InputFormat::Html);
        assert_eq!(records[0].employee.name, "Desde Texto");
        assert_eq!(records[0].employee.id, "9-9");
        assert_eq!(records[0].employee.period, "Enero");
    }

    #[test]
    fn workbook_block_is_read_by_position() {
        let rows = vec![
            row(0, &["Funcionario", ": Ana Pérez"]),
            row(0, &["Rut", ": 11.111.111-1"]),
            row(0, &["Centro de Costo", ": Finanzas"]),
            row(0, &["Horario", ": 08:00-17:00"]),
            row(0, &["Mes", ": Enero 2025"]),
            row(0, &[]),
            row(0, &["Dia", "", "", "", "", ""]),
            row(0, &["Lunes", "06-01-2025", "08:15:00", "17:00:00", "", ""]),
        ];
        let (records, _) = collect_records(&rows, EmployeeMeta::default(), InputFormat::Workbook);
        assert_eq!(records.len(), 1);

        let meta = &records[0].employee;
        assert_eq!(meta.name, "Ana Pérez");
        assert_eq!(meta.id, "11.111.111-1");
        assert_eq!(meta.org_unit, "Finanzas");
        assert_eq!(meta.shift, "08:00-17:00");
        assert_eq!(meta.period, "Enero 2025");
    }

    #[test]
    fn short_workbook_block_stops_at_day_table() {
        let rows = vec![
            row(0, &["Funcionario", ": Ana"]),
            row(0, &["Turno", ": 08:00-17:00"]),
            row(0, &["Dia", "", "", "", "", ""]),
            row(0, &["Lunes", "06-01-2025", "08:15:00", "17:00:00", "", ""]),
        ];
        let (records, tables) =
            collect_records(&rows, EmployeeMeta::default(), InputFormat::Workbook);
        assert_eq!(tables, 1);
        assert_eq!(records.len(), 1);
        // labelled rows keep their own field, not the positional one
        assert_eq!(records[0].employee.shift, "08:00-17:00");
        assert_eq!(records[0].employee.id, "");
    }

    #[test]
    fn blank_day_cell_does_not_end_an_html_table() {
        let html = "<html><body>\
            <table><tr><th>Dia</th><th>Fecha</th><th>Entrada</th><th>Salida</th></tr>\
            <tr><td>Lunes</td><td>06-01-2025</td><td>08:00</td><td>17:00</td></tr>\
            <tr><td></td><td>07-01-2025</td><td>08:00</td><td>17:00</td></tr>\
            <tr><td></td><td></td><td></td><td></td></tr>\
            <tr><td>Miércoles</td><td>08-01-2025</td><td>08:00</td><td>17:00</td></tr>\
            </table></body></html>";
        let ingested = read_records(html.as_bytes().to_vec(), "x.xls").unwrap();
        let dates: Vec<String> = ingested.records.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, ["06-01-2025", "07-01-2025", "08-01-2025"]);
    }

    #[test]
    fn blank_day_cell_ends_a_fixed_workbook_table() {
        let rows = vec![
            row(0, &["Dia", "", "", "", "", ""]),
            row(0, &["Lunes", "06-01-2025", "08:00", "17:00", "", ""]),
            row(0, &["", "07-01-2025", "08:00", "17:00", "", ""]),
            row(0, &["Miércoles", "08-01-2025", "08:00", "17:00", "", ""]),
        ];
        let (records, _) = collect_records(&rows, EmployeeMeta::default(), InputFormat::Workbook);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn unknown_layout_is_an_error() {
        let html = b"<html><body><table><tr><td>hola</td></tr></table></body></html>".to_vec();
        let err = read_records(html, "x.xls").unwrap_err();
        assert!(matches!(err, AppError::NoAttendanceTable(_)));
    }

    #[test]
    fn html_end_to_end() {
        let html = "<html><body>\
            <table><tr><td>Funcionario</td><td>: Ana P&eacute;rez</td></tr>\
            <tr><td>N° Rut</td><td>: 11.111.111-1</td></tr>\
            <tr><td>Tipo de Turno</td><td>: 08:00-17:00</td></tr></table>\
            <table><tr><th>Dia</th><th>Fecha</th><th>Entrada</th><th>Salida</th><th>Descripción</th></tr>\
            <tr><td>Lunes</td><td>06-01-2025</td><td>08:15:00</td><td>22:30:00</td><td></td></tr>\
            <tr><td>Totales</td><td></td><td></td><td></td><td></td></tr></table>\
            </body></html>";
        let ingested = read_records(html.as_bytes().to_vec(), "x.xls").unwrap();
        assert_eq!(ingested.format, InputFormat::Html);
        assert_eq!(ingested.records.len(), 1);
        let r = &ingested.records[0];
        assert_eq!(r.employee.name, "Ana Pérez");
        assert_eq!(r.employee.shift, "08:00-17:00");
        assert_eq!(r.date.to_string(), "06-01-2025");
    }
}
