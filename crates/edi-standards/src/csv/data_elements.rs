#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use crate::csv::{delimited_reader, diagnose, record_line, trimmed_fields};
use crate::error::{DirectoryError, Result};
use crate::report::ParseDiagnostic;
use crate::types::DataElement;

/// Parse a data-element file: `name;format;<ignored>;description` per line.
pub fn parse_data_elements(
    path: &Path,
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> Result<BTreeMap<String, DataElement>> {
    let mut reader = delimited_reader(path)?;
    let mut table = BTreeMap::new();

    for record in reader.records() {
        let record = record.map_err(|e| DirectoryError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        let fields = trimmed_fields(&record);
        if fields.len() < 4 {
            diagnose(
                diagnostics,
                path,
                record_line(&record),
                "short data element record",
            );
        }
        let field = |i: usize| fields.get(i).copied().unwrap_or_default().to_string();
        let element = DataElement {
            name: field(0),
            format: field(1),
            // The third field carries no information and is skipped; the
            // status slot is not populated by these files.
            status: String::new(),
            description: field(3),
        };
        table.insert(element.name.clone(), element);
    }

    Ok(table)
}
