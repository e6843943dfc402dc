#![deny(unsafe_code)]

//! Search-path handling and parameter-to-path resolution.
//!
//! Directory files are found by composing `prefix + selector + "." + ext`
//! and concatenating that relative name onto each entry of a search path in
//! turn. The prefix/extension pair encodes external naming conventions of
//! the directory trees and is derived from the parameter set alone.

use std::path::PathBuf;

use crate::error::{DirectoryError, Result};
use crate::params::DirectoryKey;

/// Environment variable holding the standards search path.
pub const NDB_PATH_ENV_VAR: &str = "EDI_NDB_PATH";

#[cfg(windows)]
const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
const PATH_LIST_SEPARATOR: char = ':';

/// The four per-directory table files, named by a two-letter selector
/// appended to the resolved prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TableKind {
    DataElements,
    Composites,
    Segments,
    Messages,
}

impl TableKind {
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::DataElements => "ED",
            Self::Composites => "CD",
            Self::Segments => "SD",
            Self::Messages => "MD",
        }
    }
}

/// An ordered list of directories to try, split from a single
/// platform-separator-delimited string.
///
/// Candidate paths are formed by plain string concatenation of an entry and
/// the composed relative filename; resolved prefixes begin with `/`, so
/// entries need no trailing separator.
#[derive(Debug, Clone)]
pub struct SearchPath {
    raw: String,
    entries: Vec<String>,
}

impl SearchPath {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let entries = raw.split(PATH_LIST_SEPARATOR).map(str::to_string).collect();
        Self { raw, entries }
    }

    pub fn from_dirs<I, S>(dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let raw = dirs
            .into_iter()
            .map(Into::into)
            .collect::<Vec<_>>()
            .join(&PATH_LIST_SEPARATOR.to_string());
        Self::new(raw)
    }

    /// Read the search path from [`NDB_PATH_ENV_VAR`].
    pub fn from_env() -> Result<Self> {
        match std::env::var(NDB_PATH_ENV_VAR) {
            Ok(raw) => Ok(Self::new(raw)),
            Err(_) => Err(DirectoryError::SearchPathUnset {
                var: NDB_PATH_ENV_VAR,
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// First readable candidate for the given table file.
    pub fn locate(&self, prefix: &str, ext: &str, table: TableKind) -> Result<PathBuf> {
        let filename = format!("{prefix}{}.{ext}", table.selector());
        for dir in &self.entries {
            let candidate = PathBuf::from(format!("{dir}{filename}"));
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        Err(DirectoryError::FileNotFound {
            filename,
            search_path: self.raw.clone(),
        })
    }
}

/// Derive the `(prefix, extension)` pair for a parameter set.
///
/// Deterministic and side-effect-free; all parameter errors surface here,
/// before any file access.
pub fn resolve_prefix_ext(key: &DirectoryKey) -> Result<(String, String)> {
    match key {
        DirectoryKey::Idoc(par) => {
            let mut prefix = String::from("/sap");
            let ext;
            if let Some(idoc_type) = par.idoc_type.as_deref() {
                let sap_type =
                    par.sap_type
                        .as_deref()
                        .ok_or(DirectoryError::MissingParameter {
                            field: "SAPTYPE",
                        })?;
                prefix.push_str(&format!("/idocs{sap_type}/{idoc_type}/"));
                match par.extension.as_deref() {
                    Some(extension) if !extension.is_empty() => {
                        if let Some((subdir, suffix)) = split_extension(extension) {
                            prefix.push_str(subdir);
                            prefix.push_str("ED");
                            ext = format!("{suffix}.csv");
                        } else {
                            prefix.push_str("ED");
                            ext = format!("{extension}.csv");
                        }
                    }
                    _ => {
                        prefix.push_str("ED");
                        ext = String::from(".csv");
                    }
                }
            } else {
                match par.sap_type.as_deref() {
                    Some("40") => ext = String::from("04000.csv"),
                    other => {
                        return Err(DirectoryError::UnsupportedSapType {
                            sap_type: other.unwrap_or_default().to_string(),
                        });
                    }
                }
                prefix.push_str("/controls/SD");
            }
            Ok((prefix, ext))
        }

        DirectoryKey::Edifact(par) => {
            let mut prefix = String::from("/edifact");
            let ext;
            if let Some(version) = par.d0002 {
                let code = match version {
                    1 => "10000",
                    2 => "20000",
                    3 => "30000",
                    // Any setting of d0076 implies SV 4-1. Extend when a
                    // 4-2 release appears.
                    4 => {
                        if par.d0076.is_none() {
                            "40000"
                        } else {
                            "40100"
                        }
                    }
                    other => {
                        return Err(DirectoryError::InvalidSyntaxVersion { version: other });
                    }
                };
                prefix.push_str("/iso9735/SD");
                ext = format!("{code}.csv");
            } else {
                prefix.push_str(if par.is_iedi {
                    "/untdid/ID"
                } else {
                    "/untdid/ED"
                });
                let d0052 = par
                    .d0052
                    .as_deref()
                    .ok_or(DirectoryError::MissingParameter { field: "d0052" })?;
                let d0054 = par
                    .d0054
                    .as_deref()
                    .ok_or(DirectoryError::MissingParameter { field: "d0054" })?;
                ext = format!("{}.csv", format!("{d0052}{d0054}").to_lowercase());
            }
            Ok((prefix, ext))
        }
    }
}

/// Prefix to use for the data-element file.
///
/// There is no interactive-specific data-element file, so a trailing `ID`
/// family tag is replaced with `ED` for this one lookup.
pub(crate) fn data_element_prefix(prefix: &str) -> String {
    match prefix.strip_suffix("ID") {
        Some(stem) => format!("{stem}ED"),
        None => prefix.to_string(),
    }
}

/// Split an IDoc extension of the form `/<subdirs>/<suffix>` into the
/// sub-directory portion (trailing slash included) and the suffix.
///
/// Returns `None` when the extension carries no path component, i.e. when
/// it does not contain two slashes with a non-slash character after the
/// second.
pub(crate) fn split_extension(extension: &str) -> Option<(&str, &str)> {
    let first = extension.find('/')?;
    let rest = &extension[first + 1..];
    let bytes = rest.as_bytes();
    let mut cut = None;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'/' && bytes.get(i + 1).is_some_and(|&next| next != b'/') {
            cut = Some(i);
        }
    }
    let cut = cut?;
    let tail = &rest[cut + 1..];
    let tail_end = tail.find('/').unwrap_or(tail.len());
    Some((&rest[..=cut], &tail[..tail_end]))
}
