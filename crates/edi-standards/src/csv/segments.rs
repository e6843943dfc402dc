#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use crate::csv::{delimited_reader, diagnose, leading_int, record_line, trimmed_fields};
use crate::error::{DirectoryError, Result};
use crate::report::ParseDiagnostic;
use crate::types::{Entry, EntryList};

/// Parse a segment file: `name;desc` followed by groups of
/// `item;code;status;max_rep`.
pub fn parse_segments(
    path: &Path,
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> Result<BTreeMap<String, EntryList>> {
    let mut reader = delimited_reader(path)?;
    let mut table = BTreeMap::new();

    for record in reader.records() {
        let record = record.map_err(|e| DirectoryError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        let line = record_line(&record);
        let fields = trimmed_fields(&record);
        if fields.len() < 3 {
            diagnose(diagnostics, path, line, "short segment record");
        }

        let mut list = EntryList::new(
            fields.first().copied().unwrap_or_default().to_string(),
            fields.get(1).copied().unwrap_or_default().to_string(),
        );
        for group in fields.get(2..).unwrap_or(&[]).chunks(4) {
            if group.len() < 4 {
                diagnose(diagnostics, path, line, "short segment entry group");
            }
            let part = |i: usize| group.get(i).copied().unwrap_or_default().to_string();
            list.push(Entry {
                item_no: part(0),
                name: part(1),
                status: part(2),
                max_rep: leading_int(group.get(3).copied().unwrap_or_default()),
            });
        }
        table.insert(list.name.clone(), list);
    }

    Ok(table)
}
