#![deny(unsafe_code)]

//! Entry-id classification for dispatch-by-shape lookups.
//!
//! A single identifier string can name a composite, data element, segment,
//! or message branch. EDIFACT codes are recognized by their exact shape;
//! IDoc-style ids carry a lowercase kind prefix instead. The rules live
//! here, separate from the table lookups, so they can be tested on their
//! own.

use crate::error::{DirectoryError, Result};

/// A dispatch id resolved to the table it names, carrying the code to look
/// up there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryId<'a> {
    DataElement(&'a str),
    Composite(&'a str),
    Segment(&'a str),
    Message(&'a str),
}

impl<'a> EntryId<'a> {
    /// Classify an identifier by its lexical shape.
    ///
    /// Returns [`DirectoryError::InvalidEntryId`] when no shape matches;
    /// that error signals caller misuse and is never recoverable.
    pub fn classify(id: &'a str) -> Result<Self> {
        let bytes = id.as_bytes();
        match bytes {
            // Composite: C, E, or S followed by three digits.
            [b'C' | b'E' | b'S', rest @ ..] if rest.len() == 3 && all_digits(rest) => {
                Ok(Self::Composite(id))
            }
            // Data element: exactly four digits.
            _ if bytes.len() == 4 && all_digits(bytes) => Ok(Self::DataElement(id)),
            // Segment: one uppercase letter, two upper-alphanumerics.
            [first, rest @ ..]
                if bytes.len() == 3
                    && first.is_ascii_uppercase()
                    && rest
                        .iter()
                        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()) =>
            {
                Ok(Self::Segment(id))
            }
            // Message branch: six uppercase letters and a colon.
            _ if bytes.len() == 7
                && bytes[6] == b':'
                && bytes[..6].iter().all(|b| b.is_ascii_uppercase()) =>
            {
                Ok(Self::Message(id))
            }
            // Kind-prefixed ids, as used for IDoc entries.
            [b'd', ..] => Ok(Self::DataElement(&id[1..])),
            [b's', ..] => Ok(Self::Segment(&id[1..])),
            [b'm', ..] => Ok(Self::Message(&id[1..])),
            _ => Err(DirectoryError::InvalidEntryId { id: id.to_string() }),
        }
    }

    /// The code to look up in the resolved table.
    pub fn code(&self) -> &'a str {
        match self {
            Self::DataElement(code)
            | Self::Composite(code)
            | Self::Segment(code)
            | Self::Message(code) => code,
        }
    }
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| b.is_ascii_digit())
}
