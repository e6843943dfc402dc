#![deny(unsafe_code)]

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, DirectoryError>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DirectoryError {
    #[error("unsupported syntax standard: {tag}")]
    UnsupportedStandard { tag: String },

    #[error("unsupported SAP type: {sap_type}")]
    UnsupportedSapType { sap_type: String },

    #[error("invalid syntax version: {version}")]
    InvalidSyntaxVersion { version: u32 },

    #[error("missing required parameter: {field}")]
    MissingParameter { field: &'static str },

    #[error("search path variable {var} is not set")]
    SearchPathUnset { var: &'static str },

    #[error("no readable file '.{filename}' found below any dir on '{search_path}'")]
    FileNotFound {
        filename: String,
        search_path: String,
    },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The id handed to a dispatch call matches none of the recognized
    /// shapes. This signals caller misuse; callers should never branch on it.
    #[error("not a legal entry id: '{id}'")]
    InvalidEntryId { id: String },

    /// The id has a valid shape but its code is absent from the directory.
    /// Unlike [`InvalidEntryId`](Self::InvalidEntryId), this is recoverable.
    #[error("{id} not in directory")]
    NotInDirectory { id: String },
}

impl DirectoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
