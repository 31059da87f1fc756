//! CSV loading, lexing, and record building
//!
//! The admin system's exports are simpler than RFC 4180: quoted fields may
//! contain commas and doubled quotes, but never line breaks, and an
//! unterminated quote just runs to the end of its line. The lexer is one
//! left-to-right scan per line with a single bit of quote state, so this
//! layer produces no errors.

use std::collections::HashMap;
use std::path::Path;

/// One lexed data line: physical line number (1-based) plus trimmed fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub line: usize,
    pub fields: Vec<String>,
}

/// One data row keyed by header column name
///
/// Values are already lexed and trimmed; columns the row does not cover
/// read as the empty string.
#[derive(Debug, Clone)]
pub struct RawRecord {
    pub line: usize,
    values: HashMap<String, String>,
}

impl RawRecord {
    /// Value under a header column, or "" when the row has none
    pub fn get(&self, column: &str) -> &str {
        self.values.get(column).map(String::as_str).unwrap_or("")
    }
}

/// Read a CSV file as text, tolerating stray non-UTF-8 bytes and a BOM
pub fn read_file(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(text.strip_prefix('\u{feff}').unwrap_or(&text).to_string())
}

/// Lex file text into rows, dropping blank lines
///
/// Line numbers count physical lines, so diagnostics still point at the
/// right place in the source file after blank lines are dropped.
pub fn lex(text: &str) -> Vec<CsvRow> {
    let mut rows = Vec::new();

    for (idx, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if line.trim().is_empty() {
            continue;
        }
        rows.push(CsvRow {
            line: idx + 1,
            fields: lex_line(line),
        });
    }

    rows
}

/// Split one line into trimmed fields
fn lex_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    // Doubled quote is a literal quote character
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
        } else {
            match c {
                ',' => {
                    fields.push(current.trim().to_string());
                    current.clear();
                }
                '"' => in_quotes = true,
                _ => current.push(c),
            }
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Pair the header row with each data row
///
/// The first lexed row is the header; its cells become column names. Data
/// cells beyond the header width are dropped, and short rows leave their
/// trailing columns unset.
pub fn build_records(rows: &[CsvRow]) -> (Vec<String>, Vec<RawRecord>) {
    let Some((header, data)) = rows.split_first() else {
        return (Vec::new(), Vec::new());
    };

    let columns = header.fields.clone();
    let records = data
        .iter()
        .map(|row| RawRecord {
            line: row.line,
            values: columns
                .iter()
                .cloned()
                .zip(row.fields.iter().cloned())
                .collect(),
        })
        .collect();

    (columns, records)
}
