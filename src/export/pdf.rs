// src/export/pdf.rs

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Colore di sfondo di una riga (RGB 0..1).
pub type Fill = (f32, f32, f32);

/// Una riga di tabella con evidenziazione opzionale.
pub struct PdfRow {
    pub cells: Vec<String>,
    pub fill: Option<Fill>,
}

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    /// A4 orizzontale: il dettaglio ha dodici colonne.
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 842.0,
            page_h: 595.0,
            margin: 36.0,
            row_h: 16.0,

            next_id: 4,
            font_id,

            font_size: 7.0,
            header_font_size: 7.5,
            title_font_size: 13.0,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        let bytes = to_win_ansi(text);
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn fill_rect(&self, content: &mut Content, y: f32, width: f32, fill: Fill) {
        content.save_state();
        content.set_fill_rgb(fill.0, fill.1, fill.2);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(&self, content: &mut Content, y: f32, widths: &[f32], row: &[String], size: f32) {
        let mut x = self.margin;

        for (text, w) in row.iter().zip(widths) {
            // tronca il testo che non entra nella cella
            let max_chars = ((w - 4.0) / (size * 0.5)).max(1.0) as usize;
            let shown = crate::utils::formatting::truncate(text, max_chars);
            self.draw_text(content, x + 2.0, y + 4.5, size, &shown);

            content.save_state();
            content.set_stroke_rgb(0.65, 0.65, 0.65);
            content.rect(x, y, *w, self.row_h);
            content.stroke();
            content.restore_state();

            x += w;
        }
    }

    /// Larghezze da header + contenuto, scalate sulla pagina.
    fn compute_col_widths(&self, headers: &[&str], rows: &[PdfRow]) -> Vec<f32> {
        let char_w = self.font_size * 0.52;
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.chars().count() as f32 * char_w + 6.0)
            .collect();

        for row in rows {
            for (w, cell) in widths.iter_mut().zip(&row.cells) {
                *w = w.max(cell.chars().count() as f32 * char_w + 6.0);
            }
        }

        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;
        if total > max {
            let scale = max / total;
            widths.iter_mut().for_each(|w| *w *= scale);
        }

        widths
    }

    fn draw_page_header_footer(&self, content: &mut Content, title: &str, page: usize) {
        self.draw_text(
            content,
            self.margin,
            self.page_h - self.margin + 10.0,
            self.title_font_size,
            title,
        );

        let pg = format!("Page {page}");
        self.draw_text(
            content,
            self.page_w - self.margin - 40.0,
            self.margin - 22.0,
            self.font_size,
            &pg,
        );
    }

    /// Tabella multipagina con titolo; l'header si ripete su ogni pagina.
    pub fn write_table(&mut self, title: &str, headers: &[&str], rows: &[PdfRow]) {
        let widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = widths.iter().sum();
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining = rows;
        let mut page_idx = 1;

        loop {
            let mut content = self.new_page();
            self.draw_page_header_footer(&mut content, title, page_idx);

            let mut y = self.page_h - self.margin - 24.0;
            self.fill_rect(&mut content, y, table_w, (0.85, 0.87, 0.90));
            self.draw_row(&mut content, y, &widths, &header_row, self.header_font_size);
            y -= self.row_h;

            let mut consumed = 0;
            for row in remaining {
                if y < self.margin {
                    break;
                }
                if let Some(fill) = row.fill {
                    self.fill_rect(&mut content, y, table_w, fill);
                }
                self.draw_row(&mut content, y, &widths, &row.cells, self.font_size);
                y -= self.row_h;
                consumed += 1;
            }

            self.finalize_page(content);
            remaining = &remaining[consumed..];
            page_idx += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn to_bytes(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.iter().copied());
        drop(pages);

        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.to_bytes();
        let mut f = File::create(path)?;
        f.write_all(&bytes)
    }
}

/// Helvetica standard: solo WinAnsi. Latin-1 passa, il resto diventa '?'.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            0x2026 => 0x85,
            0x2013 => 0x96,
            0x2014 => 0x97,
            _ => b'?',
        })
        .collect()
}
