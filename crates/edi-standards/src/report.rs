#![deny(unsafe_code)]

use std::path::PathBuf;

/// One malformed input line, recorded during loading.
///
/// Diagnostics never change control flow: the offending record is still
/// stored with whatever fields were present.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ParseDiagnostic {
    pub file: PathBuf,
    /// 1-based line number within the file.
    pub line: u64,
    pub message: String,
}

/// Table and diagnostic counts for one loaded directory.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LoadSummary {
    pub data_elements: usize,
    pub composites: usize,
    pub segments: usize,
    pub messages: usize,
    pub diagnostics: usize,
}
