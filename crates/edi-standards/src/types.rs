#![deny(unsafe_code)]

/// Properties of a single data element, keyed by its code.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DataElement {
    pub name: String,
    /// Format notation, e.g. `an..35`.
    pub format: String,
    /// Status code. The current data-element files do not carry one;
    /// the slot is kept in the record layout and left empty.
    pub status: String,
    pub description: String,
}

/// One line item inside a composite, segment, or message branch definition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Entry {
    /// Position number within the parent structure. Message branch entries
    /// are unnumbered and share the sentinel `"0000"`.
    pub item_no: String,
    pub name: String,
    pub status: String,
    pub max_rep: u32,
}

/// An ordered list of [`Entry`] values owned by one composite, segment, or
/// message branch. Order is definition order within the parent structure;
/// the list is append-only during loading and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct EntryList {
    pub name: String,
    pub desc: String,
    entries: Vec<Entry>,
}

impl EntryList {
    pub(crate) fn new(name: String, desc: String) -> Self {
        Self {
            name,
            desc,
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
