// src/export/excel_date.rs

use crate::models::RawValue;
use crate::utils::{normalize_date, parse_time};
use chrono::{NaiveDate, Timelike};

/// Seriale Excel + formato numerico per le colonne Fecha / Entrada / Salida.
///
/// Values that cannot be read as a date (or a time, for punches) stay text.
pub(crate) fn date_serial(raw: &RawValue) -> Option<(&'static str, f64)> {
    let d = normalize_date(raw)?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some(("dd-mm-yyyy", (d - epoch).num_days() as f64))
}

pub(crate) fn time_serial(raw: &RawValue) -> Option<(&'static str, f64)> {
    let t = parse_time(raw)?;
    let fmt = if t.second() == 0 && matches!(raw, RawValue::Text(s) if s.trim().len() <= 5) {
        "hh:mm"
    } else {
        "hh:mm:ss"
    };
    Some((fmt, t.num_seconds_from_midnight() as f64 / 86400.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_serials() {
        assert_eq!(
            date_serial(&RawValue::text("06-01-2025")),
            Some(("dd-mm-yyyy", 45663.0))
        );
        assert_eq!(date_serial(&RawValue::text("Totales")), None);
    }

    #[test]
    fn time_serials() {
        assert_eq!(time_serial(&RawValue::text("12:00")), Some(("hh:mm", 0.5)));
        assert_eq!(
            time_serial(&RawValue::text("06:00:00")),
            Some(("hh:mm:ss", 0.25))
        );
        assert_eq!(time_serial(&RawValue::text("-")), None);
    }
}
