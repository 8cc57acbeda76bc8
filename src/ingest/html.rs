//! Table extraction from the HTML pages the platform saves as `.xls`.
//!
//! The exports are machine-generated and regular enough that a tag scanner
//! over `<table>`, `<tr>`, `<td>` and `<th>` recovers every cell; nested
//! tables are tracked with a stack so their rows never leak into the outer
//! table.

use super::SheetRow;
use crate::models::RawValue;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static NOISE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?-->|<script\b.*?</script\s*>|<style\b.*?</style\s*>|<head\b.*?</head\s*>")
        .expect("valid noise regex")
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)(table|tr|td|th)\b[^>]*>").expect("valid tag regex")
});
static ANY_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"));
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("valid entity regex")
});
static SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid space regex"));

/// Rows of every table in document order, plus the flattened page text.
#[derive(Debug, Default)]
pub struct HtmlPage {
    pub rows: Vec<SheetRow>,
    /// Cell texts joined by two spaces, for label/value regexes.
    pub text: String,
}

#[derive(Debug)]
struct OpenTable {
    id: usize,
    row: Option<Vec<String>>,
    cell: Option<String>,
}

#[derive(Debug, Default)]
struct Scanner {
    stack: Vec<OpenTable>,
    next_id: usize,
    page: HtmlPage,
}

impl Scanner {
    fn text(&mut self, raw: &str) {
        let t = clean_text(raw);
        if t.is_empty() {
            return;
        }
        match self.stack.last_mut().and_then(|t| t.cell.as_mut()) {
            Some(cell) => {
                if !cell.is_empty() {
                    cell.push(' ');
                }
                cell.push_str(&t);
            }
            None => {
                self.page.text.push_str(&t);
                self.page.text.push_str("  ");
            }
        }
    }

    fn close_cell(&mut self) {
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        if let Some(cell) = top.cell.take() {
            self.page.text.push_str(&cell);
            self.page.text.push_str("  ");
            top.row.get_or_insert_with(Vec::new).push(cell);
        }
    }

    fn close_row(&mut self) {
        self.close_cell();
        let Some(top) = self.stack.last_mut() else {
            return;
        };
        if let Some(cells) = top.row.take()
            && !cells.is_empty()
        {
            self.page.rows.push(SheetRow {
                table: top.id,
                cells: cells.into_iter().map(RawValue::text).collect(),
            });
        }
    }

    fn tag(&mut self, closing: bool, name: &str) {
        match (closing, name) {
            (false, "table") => {
                self.stack.push(OpenTable {
                    id: self.next_id,
                    row: None,
                    cell: None,
                });
                self.next_id += 1;
            }
            (true, "table") => {
                self.close_row();
                self.stack.pop();
            }
            (false, "tr") | (true, "tr") => self.close_row(),
            (false, _) => {
                self.close_cell();
                if let Some(top) = self.stack.last_mut() {
                    top.row.get_or_insert_with(Vec::new);
                    top.cell = Some(String::new());
                }
            }
            (true, _) => self.close_cell(),
        }
    }

    fn finish(mut self) -> HtmlPage {
        // tablas sin cerrar
        while !self.stack.is_empty() {
            self.close_row();
            self.stack.pop();
        }
        self.page
    }
}

pub fn parse_html(html: &str) -> HtmlPage {
    let html = NOISE_RE.replace_all(html, " ");
    let mut scanner = Scanner::default();
    let mut last = 0;

    for caps in TAG_RE.captures_iter(&html) {
        let Some(m) = caps.get(0) else { continue };
        scanner.text(&html[last..m.start()]);
        last = m.end();

        let closing = caps.get(1).is_some_and(|c| !c.as_str().is_empty());
        let name = caps
            .get(2)
            .map(|n| n.as_str().to_ascii_lowercase())
            .unwrap_or_default();
        scanner.tag(closing, &name);
    }
    scanner.text(&html[last..]);

    scanner.finish()
}

/// Strips inline tags, decodes entities and collapses whitespace.
fn clean_text(raw: &str) -> String {
    let no_tags = ANY_TAG_RE.replace_all(raw, " ");
    let decoded = ENTITY_RE.replace_all(&no_tags, |c: &Captures| decode_entity(&c[1], &c[0]));
    SPACE_RE.replace_all(&decoded, " ").trim().to_string()
}

fn decode_entity(name: &str, original: &str) -> String {
    if let Some(num) = name.strip_prefix('#') {
        let code = match num.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => num.parse::<u32>().ok(),
        };
        return code
            .and_then(char::from_u32)
            .map(|c| if c == '\u{a0}' { ' ' } else { c })
            .map(String::from)
            .unwrap_or_else(|| original.to_string());
    }

    let c = match name {
        "nbsp" => ' ',
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "deg" => '°',
        "ordm" => 'º',
        "aacute" => 'á',
        "eacute" => 'é',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "ntilde" => 'ñ',
        "Aacute" => 'Á',
        "Eacute" => 'É',
        "Iacute" => 'Í',
        "Oacute" => 'Ó',
        "Uacute" => 'Ú',
        "Ntilde" => 'Ñ',
        "uuml" => 'ü',
        _ => return original.to_string(),
    };
    c.to_string()
}
