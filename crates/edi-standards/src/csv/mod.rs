#![deny(unsafe_code)]

//! Parsers for the four table files of a standards directory.
//!
//! All four share one grammar: semicolon-delimited records, no header row,
//! no quoting. Malformed records are diagnosed and stored partially
//! populated; they never abort a load.

pub mod composites;
pub mod data_elements;
pub mod messages;
pub mod segments;

use std::io::Cursor;
use std::path::Path;

use crate::error::{DirectoryError, Result};
use crate::report::ParseDiagnostic;

/// Reader configured for the directory file grammar.
pub(crate) fn delimited_reader(path: &Path) -> Result<csv::Reader<Cursor<Vec<u8>>>> {
    let bytes = std::fs::read(path).map_err(|e| DirectoryError::io(path, e))?;
    Ok(csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(Cursor::new(bytes)))
}

/// Record fields with trailing empty fields dropped; the grammar allows an
/// optional terminator semicolon and padding semicolons at end of record.
pub(crate) fn trimmed_fields<'r>(record: &'r csv::StringRecord) -> Vec<&'r str> {
    let mut fields: Vec<&str> = record.iter().collect();
    while fields.last() == Some(&"") {
        fields.pop();
    }
    fields
}

/// Leading decimal digits of a field, zero when there are none.
pub(crate) fn leading_int(s: &str) -> u32 {
    let t = s.trim_start();
    let end = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());
    t[..end].parse().unwrap_or(0)
}

pub(crate) fn record_line(record: &csv::StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

pub(crate) fn diagnose(
    diagnostics: &mut Vec<ParseDiagnostic>,
    path: &Path,
    line: u64,
    message: &str,
) {
    tracing::warn!(path = %path.display(), line, message, "malformed directory record");
    diagnostics.push(ParseDiagnostic {
        file: path.to_path_buf(),
        line,
        message: message.to_string(),
    });
}
