#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use crate::csv::{delimited_reader, diagnose, leading_int, record_line, trimmed_fields};
use crate::error::{DirectoryError, Result};
use crate::report::ParseDiagnostic;
use crate::types::{Entry, EntryList};

/// Message branch entries are unnumbered; every entry carries this item
/// number.
const BRANCH_ITEM_NO: &str = "0000";

/// Parse a message file: `name;desc` followed by groups of
/// `code;status;max_rep`.
///
/// When `message_type` contains a six-letter code, only records containing
/// that code are parsed. The match is a plain substring test against the
/// record, not against the parsed name field; this keeps unrelated message
/// types from being materialized and is not a correctness filter.
pub fn parse_messages(
    path: &Path,
    message_type: Option<&str>,
    diagnostics: &mut Vec<ParseDiagnostic>,
) -> Result<BTreeMap<String, EntryList>> {
    let filter = message_type.and_then(six_letter_code);
    let mut reader = delimited_reader(path)?;
    let mut table = BTreeMap::new();

    for record in reader.records() {
        let record = record.map_err(|e| DirectoryError::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        if let Some(code) = filter {
            if !record.iter().any(|field| field.contains(code)) {
                continue;
            }
        }

        let line = record_line(&record);
        let fields = trimmed_fields(&record);
        if fields.len() < 3 {
            diagnose(diagnostics, path, line, "short message record");
        }

        let mut list = EntryList::new(
            fields.first().copied().unwrap_or_default().to_string(),
            fields.get(1).copied().unwrap_or_default().to_string(),
        );
        for group in fields.get(2..).unwrap_or(&[]).chunks(3) {
            if group.len() < 3 {
                diagnose(diagnostics, path, line, "short message entry group");
            }
            let part = |i: usize| group.get(i).copied().unwrap_or_default().to_string();
            list.push(Entry {
                item_no: BRANCH_ITEM_NO.to_string(),
                name: part(0),
                status: part(1),
                max_rep: leading_int(group.get(2).copied().unwrap_or_default()),
            });
        }
        table.insert(list.name.clone(), list);
    }

    Ok(table)
}

/// First run of six consecutive uppercase ASCII letters, if any.
pub(crate) fn six_letter_code(message_type: &str) -> Option<&str> {
    let bytes = message_type.as_bytes();
    let mut run = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b.is_ascii_uppercase() {
            run += 1;
            if run == 6 {
                return Some(&message_type[i + 1 - 6..=i]);
            }
        } else {
            run = 0;
        }
    }
    None
}
