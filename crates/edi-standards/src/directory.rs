#![deny(unsafe_code)]

//! The in-memory directory: four code-keyed tables with typed lookups.

use std::collections::BTreeMap;

use regex::Regex;

use crate::csv::composites::parse_composites;
use crate::csv::data_elements::parse_data_elements;
use crate::csv::messages::parse_messages;
use crate::csv::segments::parse_segments;
use crate::error::{DirectoryError, Result};
use crate::lookup::EntryId;
use crate::params::DirectoryKey;
use crate::paths::{SearchPath, TableKind, data_element_prefix, resolve_prefix_ext};
use crate::report::{LoadSummary, ParseDiagnostic};
use crate::types::{DataElement, Entry, EntryList};

/// All tables of one standards directory.
///
/// A `Directory` is fully populated before it is returned and never mutated
/// afterwards; once behind an `Arc` it can be shared freely without
/// locking.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    data_elements: BTreeMap<String, DataElement>,
    composites: BTreeMap<String, EntryList>,
    segments: BTreeMap<String, EntryList>,
    messages: BTreeMap<String, EntryList>,
    diagnostics: Vec<ParseDiagnostic>,
}

/// Result of a dispatch-by-shape lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LookupItem<'a> {
    DataElement(&'a DataElement),
    Composite(&'a EntryList),
    Segment(&'a EntryList),
    Message(&'a EntryList),
}

impl<'a> LookupItem<'a> {
    /// Entries of the resolved list, in definition order. A data-element id
    /// resolves to a properties record, which carries no entry list.
    pub fn entries(&self) -> &'a [Entry] {
        match self {
            Self::DataElement(_) => &[],
            Self::Composite(list) | Self::Segment(list) | Self::Message(list) => list.entries(),
        }
    }
}

impl Directory {
    /// Locate and parse the four table files for a parameter set.
    ///
    /// Any failure aborts the whole load; a partially built directory is
    /// never returned. Malformed lines are not failures — they are
    /// collected into [`diagnostics`](Self::diagnostics).
    pub fn load(key: &DirectoryKey, search: &SearchPath) -> Result<Self> {
        let (prefix, ext) = resolve_prefix_ext(key)?;
        let mut diagnostics = Vec::new();

        // No interactive-specific data-element file exists; an ID prefix
        // falls back to the ED file for this one table.
        let path = search.locate(&data_element_prefix(&prefix), &ext, TableKind::DataElements)?;
        let data_elements = parse_data_elements(&path, &mut diagnostics)?;

        let path = search.locate(&prefix, &ext, TableKind::Composites)?;
        let composites = parse_composites(&path, &mut diagnostics)?;

        let path = search.locate(&prefix, &ext, TableKind::Segments)?;
        let segments = parse_segments(&path, &mut diagnostics)?;

        let path = search.locate(&prefix, &ext, TableKind::Messages)?;
        let messages = parse_messages(&path, key.message_type(), &mut diagnostics)?;

        Ok(Self {
            data_elements,
            composites,
            segments,
            messages,
            diagnostics,
        })
    }

    pub fn data_element(&self, name: &str) -> Option<&DataElement> {
        self.data_elements.get(name)
    }

    /// First data element whose code matches, in sorted-code order.
    pub fn data_element_matching(&self, pattern: &Regex) -> Option<&DataElement> {
        self.data_elements
            .iter()
            .find(|(name, _)| pattern.is_match(name))
            .map(|(_, element)| element)
    }

    pub fn data_element_names(&self) -> Vec<&str> {
        self.data_elements.keys().map(String::as_str).collect()
    }

    pub fn composite(&self, name: &str) -> Option<&EntryList> {
        self.composites.get(name)
    }

    pub fn composite_names(&self) -> Vec<&str> {
        self.composites.keys().map(String::as_str).collect()
    }

    pub fn segment(&self, name: &str) -> Option<&EntryList> {
        self.segments.get(name)
    }

    /// First segment whose code matches, in sorted-code order.
    pub fn segment_matching(&self, pattern: &Regex) -> Option<&EntryList> {
        self.segments
            .iter()
            .find(|(name, _)| pattern.is_match(name))
            .map(|(_, list)| list)
    }

    pub fn segment_names(&self) -> Vec<&str> {
        self.segments.keys().map(String::as_str).collect()
    }

    pub fn message(&self, name: &str) -> Option<&EntryList> {
        self.messages.get(name)
    }

    pub fn message_names(&self) -> Vec<&str> {
        self.messages.keys().map(String::as_str).collect()
    }

    /// Look up a classified id in its table.
    pub fn lookup(&self, id: &EntryId<'_>) -> Option<LookupItem<'_>> {
        match id {
            EntryId::DataElement(code) => self.data_element(code).map(LookupItem::DataElement),
            EntryId::Composite(code) => self.composite(code).map(LookupItem::Composite),
            EntryId::Segment(code) => self.segment(code).map(LookupItem::Segment),
            EntryId::Message(code) => self.message(code).map(LookupItem::Message),
        }
    }

    /// Classify an id by shape and look it up.
    ///
    /// Fails with [`DirectoryError::InvalidEntryId`] for an unrecognized
    /// shape and with the recoverable [`DirectoryError::NotInDirectory`]
    /// when the shape is valid but the code is absent.
    pub fn find(&self, id: &str) -> Result<LookupItem<'_>> {
        let entry_id = EntryId::classify(id)?;
        self.lookup(&entry_id)
            .ok_or_else(|| DirectoryError::NotInDirectory { id: id.to_string() })
    }

    /// Visit each entry of the list named by `id`, in stored order.
    pub fn for_each_entry<F>(&self, id: &str, mut visit: F) -> Result<()>
    where
        F: FnMut(&Entry),
    {
        for entry in self.find(id)?.entries() {
            visit(entry);
        }
        Ok(())
    }

    /// Malformed-line diagnostics collected while loading.
    pub fn diagnostics(&self) -> &[ParseDiagnostic] {
        &self.diagnostics
    }

    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            data_elements: self.data_elements.len(),
            composites: self.composites.len(),
            segments: self.segments.len(),
            messages: self.messages.len(),
            diagnostics: self.diagnostics.len(),
        }
    }
}
