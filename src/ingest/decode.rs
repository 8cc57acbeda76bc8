//! Byte-level helpers: container sniffing and text decoding.

/// Container formats produced by the attendance platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// An HTML page saved with a spreadsheet extension.
    Html,
    /// A real workbook (xlsx, xls, ods).
    Workbook,
}

/// Sniffs the first bytes of the file.
pub fn detect_format(bytes: &[u8]) -> InputFormat {
    let head = &bytes[..bytes.len().min(500)];
    let head = head.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(head);
    let trimmed: Vec<u8> = head
        .iter()
        .skip_while(|b| b.is_ascii_whitespace())
        .map(|b| b.to_ascii_lowercase())
        .collect();

    let window = &trimmed[..trimmed.len().min(400)];
    if trimmed.starts_with(b"<!doctype html")
        || trimmed.starts_with(b"<html")
        || window.windows(6).any(|w| w == b"<table")
    {
        InputFormat::Html
    } else {
        InputFormat::Workbook
    }
}

/// Decodes HTML bytes: UTF-8 when valid, otherwise Windows-1252.
pub fn decode_text(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| cp1252_char(b)).collect(),
    }
}

/// Windows-1252 is Latin-1 except for 0x80..=0x9F.
fn cp1252_char(b: u8) -> char {
    const HIGH: [char; 32] = [
        '€', '\u{81}', '‚', 'ƒ', '„', '…', '†', '‡', 'ˆ', '‰', 'Š', '‹', 'Œ', '\u{8D}', 'Ž',
        '\u{8F}', '\u{90}', '‘', '’', '“', '”', '•', '–', '—', '˜', '™', 'š', '›', 'œ', '\u{9D}',
        'ž', 'Ÿ',
    ];
    match b {
        0x80..=0x9F => HIGH[(b - 0x80) as usize],
        _ => b as char,
    }
}
