// 📥 Line Reader + Row Parser
// Tab-separated seed file → RawRow per well-formed line

use crate::config::CANONICAL_FIELDS;
use crate::error::SeedError;
use crate::record::RawRow;
use csv::{ReaderBuilder, StringRecord, Terminator};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A line that did not have enough columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub row_number: usize,   // 1-based, file order
    pub content: String,     // Trimmed line content
    pub column_count: usize, // Columns found after splitting
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Accepted(RawRow),
    Rejected(RejectedRow),
}

// ============================================================================
// LINE READER
// ============================================================================

// "\r\n" first so a CRLF pair counts as one break
static LINE_BREAK_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").unwrap());

/// Split text on `\n`, `\r\n` and a lone `\r`
///
/// A final line break does not start an extra empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = LINE_BREAK_PATTERN.split(text).map(String::from).collect();
    if lines.last().map(|l| l.is_empty()).unwrap_or(false) {
        lines.pop();
    }
    lines
}

/// Read the whole input file and split it into lines, in order
///
/// Missing files, permission problems and invalid UTF-8 all surface as
/// `SeedError::Read`. The file handle is closed before this returns.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SeedError> {
    let text = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(split_lines(&text))
}

// ============================================================================
// ROW PARSER
// ============================================================================

/// Split one (already trimmed) line on tabs
///
/// Quoting is off, so `"` and `'` stay part of the value. Only `\n` ends a
/// csv record here, and `read_lines` never leaves one in a line; if a caller
/// passes one anyway, the records are glued back together so no text is lost.
pub fn split_columns(line: &str) -> Vec<String> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .terminator(Terminator::Any(b'\n'))
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut columns: Vec<String> = Vec::new();
    let mut record = StringRecord::new();
    // Errors can only come from invalid UTF-8, which a &str never has
    while let Ok(true) = reader.read_record(&mut record) {
        let mut fields = record.iter();
        if let Some(first) = fields.next() {
            match columns.last_mut() {
                Some(last) => {
                    last.push('\n');
                    last.push_str(first);
                }
                None => columns.push(first.to_string()),
            }
        }
        columns.extend(fields.map(String::from));
    }
    columns
}

/// Parse one raw line into a RawRow, or reject it
pub fn parse_row(row_number: usize, line: &str) -> RowOutcome {
    let trimmed = line.trim();
    let columns = split_columns(trimmed);

    match RawRow::from_columns(&columns) {
        Some(row) => RowOutcome::Accepted(row),
        None => RowOutcome::Rejected(RejectedRow {
            row_number,
            content: trimmed.to_string(),
            column_count: columns.len(),
        }),
    }
}

/// Minimum number of tab-separated columns for a line to be accepted
pub fn required_columns() -> usize {
    CANONICAL_FIELDS.len()
}
