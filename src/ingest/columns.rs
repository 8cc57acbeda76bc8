//! Loose mapping of day-table headers onto attendance fields.

/// Positions of the attendance fields inside a day-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub day: Option<usize>,
    pub date: usize,
    pub check_in: usize,
    pub check_out: usize,
    pub remark: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Day,
    Date,
    CheckIn,
    CheckOut,
    Remark,
}

fn classify(header: &str) -> Option<Field> {
    let h = header.trim().to_lowercase();
    if h.is_empty() || h.len() > 40 {
        return None;
    }

    if h == "dia" || h == "día" {
        Some(Field::Day)
    } else if h.contains("fecha") {
        Some(Field::Date)
    } else if h.contains("entrada") || h.contains("ingreso") {
        Some(Field::CheckIn)
    } else if h.contains("salida") || h.contains("egreso") {
        Some(Field::CheckOut)
    } else if h.starts_with("descrip") || h.starts_with("obs") {
        Some(Field::Remark)
    } else {
        None
    }
}

impl ColumnMap {
    /// Maps a header row; `None` unless date, check-in and check-out are all
    /// present. The first column matching a field wins.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Option<Self> {
        let mut day = None;
        let mut date = None;
        let mut check_in = None;
        let mut check_out = None;
        let mut remark = None;

        for (i, h) in headers.iter().enumerate() {
            let slot = match classify(h.as_ref()) {
                Some(Field::Day) => &mut day,
                Some(Field::Date) => &mut date,
                Some(Field::CheckIn) => &mut check_in,
                Some(Field::CheckOut) => &mut check_out,
                Some(Field::Remark) => &mut remark,
                None => continue,
            };
            slot.get_or_insert(i);
        }

        Some(Self {
            day,
            date: date?,
            check_in: check_in?,
            check_out: check_out?,
            remark,
        })
    }
}
