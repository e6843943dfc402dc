#![deny(unsafe_code)]

//! Construction parameters identifying one standards directory.
//!
//! A [`DirectoryKey`] carries the normalized parameter set and doubles as
//! the cache key: the EDIFACT defaults live in the `Default` impl, so
//! building a key with struct-update syntax reproduces the
//! defaults-then-caller-wins merge of the directory conventions.

use std::fmt;
use std::str::FromStr;

use crate::error::DirectoryError;

/// Supported syntax standard families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Standard {
    /// UN/EDIFACT, covering both ISO9735 service directories and UN/TDID.
    Edifact,
    /// SAP IDoc definitions.
    Idoc,
}

impl Standard {
    /// External one-letter tag, as found in interchange control data.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Edifact => "E",
            Self::Idoc => "I",
        }
    }
}

impl FromStr for Standard {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "E" => Ok(Self::Edifact),
            "I" => Ok(Self::Idoc),
            other => Err(DirectoryError::UnsupportedStandard {
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UN/EDIFACT parameters. Field names follow the data element codes of the
/// S009/S320 composites they are taken from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct EdifactParams {
    /// Syntax version number. Present for ISO9735 service directory
    /// requests; absent for UN/TDID requests.
    pub d0002: Option<u32>,
    /// Release number of syntax version 4. Any value selects release 4-1.
    pub d0076: Option<String>,
    /// Message type, like `"INVOIC"`.
    pub d0065: Option<String>,
    /// Message version number, like `"90"` or `"D"`.
    pub d0052: Option<String>,
    /// Message release number, like `"1"` or `"03A"`.
    pub d0054: Option<String>,
    /// Controlling agency, like `"UN"` or `"EN"`.
    pub d0051: String,
    /// Association assigned code, like `"EAN008"`.
    pub d0057: String,
    /// Interactive EDI flag.
    pub is_iedi: bool,
}

/// SAP IDoc parameters, taken from the EDI_DC control record fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct IdocParams {
    pub idoc_type: Option<String>,
    pub sap_type: Option<String>,
    pub extension: Option<String>,
}

/// Normalized parameter set identifying one directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub enum DirectoryKey {
    Edifact(EdifactParams),
    Idoc(IdocParams),
}

impl DirectoryKey {
    pub fn standard(&self) -> Standard {
        match self {
            Self::Edifact(_) => Standard::Edifact,
            Self::Idoc(_) => Standard::Idoc,
        }
    }

    /// Message type parameter, when one was supplied (EDIFACT only).
    pub(crate) fn message_type(&self) -> Option<&str> {
        match self {
            Self::Edifact(par) => par.d0065.as_deref(),
            Self::Idoc(_) => None,
        }
    }
}

impl From<EdifactParams> for DirectoryKey {
    fn from(par: EdifactParams) -> Self {
        Self::Edifact(par)
    }
}

impl From<IdocParams> for DirectoryKey {
    fn from(par: IdocParams) -> Self {
        Self::Idoc(par)
    }
}
