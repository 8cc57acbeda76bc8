//! Location of the employee metadata block ("Funcionario : …").

use crate::models::EmployeeMeta;
use regex::Regex;
use std::sync::LazyLock;

/// Metadata labels printed by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaLabel {
    Name,
    Id,
    OrgUnit,
    Shift,
    Period,
}

impl MetaLabel {
    /// Recognizes a label cell such as `"N° Rut :"` or `"Tipo de Turno"`.
    pub fn from_cell(cell: &str) -> Option<Self> {
        let key = label_part(cell).to_lowercase();
        if key.is_empty() || key.chars().count() > 30 {
            return None;
        }

        if key.starts_with("funcionario") {
            Some(MetaLabel::Name)
        } else if key.contains("rut") {
            Some(MetaLabel::Id)
        } else if key.contains("organigrama") || key.starts_with("unidad") {
            Some(MetaLabel::OrgUnit)
        } else if key.contains("turno") {
            Some(MetaLabel::Shift)
        } else if key.starts_with("periodo") || key.starts_with("período") {
            Some(MetaLabel::Period)
        } else {
            None
        }
    }

    pub fn slot<'a>(&self, meta: &'a mut EmployeeMeta) -> &'a mut String {
        match self {
            MetaLabel::Name => &mut meta.name,
            MetaLabel::Id => &mut meta.id,
            MetaLabel::OrgUnit => &mut meta.org_unit,
            MetaLabel::Shift => &mut meta.shift,
            MetaLabel::Period => &mut meta.period,
        }
    }
}

/// Text before the first `:` of a cell.
fn label_part(cell: &str) -> &str {
    cell.split(':').next().unwrap_or("").trim()
}

/// Strips the separators the platform puts around values (`": Juan "`).
pub fn clean_value(s: &str) -> String {
    s.trim_matches(|c: char| c == ':' || c.is_whitespace())
        .to_string()
}

/// Reads a label/value pair out of one table row.
///
/// Accepts `["Funcionario", "Juan"]`, `["Funcionario", ":", "Juan"]` and
/// `["Funcionario : Juan"]`.
pub fn meta_from_row<S: AsRef<str>>(cells: &[S]) -> Option<(MetaLabel, String)> {
    let first = cells.first()?.as_ref();
    let label = MetaLabel::from_cell(first)?;

    let value = cells[1..]
        .iter()
        .map(|c| clean_value(c.as_ref()))
        .find(|v| !v.is_empty())
        .or_else(|| {
            first
                .split_once(':')
                .map(|(_, v)| clean_value(v))
                .filter(|v| !v.is_empty())
        })
        .unwrap_or_default();

    Some((label, value))
}

static TEXT_PATTERNS: LazyLock<Vec<(MetaLabel, Regex)>> = LazyLock::new(|| {
    [
        (MetaLabel::Name, r"(?i)Funcionario\s*:?\s*(.+?)\s{2,}"),
        (MetaLabel::Id, r"(?i)Rut\s*:?\s*([^\s]+)"),
        (MetaLabel::OrgUnit, r"(?i)(?:Organigrama|Unidad)\s*:?\s*(.+?)\s{2,}"),
        (MetaLabel::Shift, r"(?i)Turno\s*:?\s*(.+?)\s{2,}"),
        (MetaLabel::Period, r"(?i)Per[ií]odo\s*:?\s*(.+?)\s{2,}"),
    ]
    .into_iter()
    .filter_map(|(label, pat)| Regex::new(pat).ok().map(|re| (label, re)))
    .collect()
});

/// Best-effort metadata from the flattened page text, where cells are
/// separated by at least two spaces.
pub fn meta_from_text(text: &str) -> EmployeeMeta {
    let mut meta = EmployeeMeta::default();
    for (label, re) in TEXT_PATTERNS.iter() {
        if let Some(m) = re.captures(text).and_then(|c| c.get(1)) {
            *label.slot(&mut meta) = clean_value(m.as_str());
        }
    }
    meta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_variants() {
        assert_eq!(MetaLabel::from_cell("Funcionario :"), Some(MetaLabel::Name));
        assert_eq!(MetaLabel::from_cell("N° Rut"), Some(MetaLabel::Id));
        assert_eq!(MetaLabel::from_cell("Unidad/Organigrama"), Some(MetaLabel::OrgUnit));
        assert_eq!(MetaLabel::from_cell("Tipo de Turno"), Some(MetaLabel::Shift));
        assert_eq!(MetaLabel::from_cell("Período"), Some(MetaLabel::Period));
        assert_eq!(MetaLabel::from_cell("06-01-2025"), None);
        assert_eq!(MetaLabel::from_cell("Fecha"), None);
    }

    #[test]
    fn row_shapes() {
        assert_eq!(
            meta_from_row(&["Funcionario", "Juan Pérez"]),
            Some((MetaLabel::Name, "Juan Pérez".to_string()))
        );
        assert_eq!(
            meta_from_row(&["Rut", ":", "11.111.111-1"]),
            Some((MetaLabel::Id, "11.111.111-1".to_string()))
        );
        assert_eq!(
            meta_from_row(&["Tipo de Turno : 08:00-17:00 / 08:00-16:00"]),
            Some((MetaLabel::Shift, "08:00-17:00 / 08:00-16:00".to_string()))
        );
        assert_eq!(meta_from_row(&["Lunes", "06-01-2025"]), None);
    }

    #[test]
    fn flattened_text() {
        let text = "Funcionario : Juan Pérez  N° Rut : 11.111.111-1  Unidad : Finanzas  \
                    Tipo de Turno : 08:00-17:00  Periodo : Enero 2025  Dia  Fecha";
        let meta = meta_from_text(text);
        assert_eq!(meta.name, "Juan Pérez");
        assert_eq!(meta.id, "11.111.111-1");
        assert_eq!(meta.org_unit, "Finanzas");
        assert_eq!(meta.shift, "08:00-17:00");
        assert_eq!(meta.period, "Enero 2025");
    }
}
