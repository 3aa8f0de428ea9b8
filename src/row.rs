use std::fmt::{Display, Formatter};

use crate::error::{DocumentError, Result};

/// Column names of a document. Immutable once the document is loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    pub(crate) fn new(names: Vec<String>) -> Header {
        Header {
            names,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, pos: usize) -> Result<&str> {
        self.names.get(pos)
            .map(String::as_str)
            .ok_or(DocumentError::IndexOutOfRange {
                what: "header",
                index: pos,
                len: self.names.len(),
            })
    }

    /// Position of the first column named `key`.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.names.iter().position(|name| name == key)
    }
}

/// The values of one record. Rows are owned by their document and are only reachable through it,
/// keyed access goes through [RowView] which borrows the document's [Header].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    values: Vec<String>,
}

impl Row {
    pub(crate) fn new(values: Vec<String>) -> Row {
        Row {
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn get(&self, pos: usize) -> Option<&str> {
        self.values.get(pos).map(String::as_str)
    }

    /// Replace the value at `pos`. Returns false, leaving the row untouched, when `pos` is beyond
    /// the end of the row.
    pub(crate) fn set(&mut self, pos: usize, value: String) -> bool {
        match self.values.get_mut(pos) {
            Some(current) => {
                *current = value;
                true
            }
            None => false,
        }
    }
}

/// A row borrowed together with the header of the document that owns it.
#[derive(Clone, Copy, Debug)]
pub struct RowView<'a> {
    index: usize,
    header: &'a Header,
    row: &'a Row,
}

impl<'a> RowView<'a> {
    pub(crate) fn new(index: usize, header: &'a Header, row: &'a Row) -> RowView<'a> {
        RowView {
            index,
            header,
            row,
        }
    }

    /// Position of this row in its document.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn header(&self) -> &'a Header {
        self.header
    }

    pub fn row(&self) -> &'a Row {
        self.row
    }

    pub fn len(&self) -> usize {
        self.row.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row.is_empty()
    }

    pub fn values(&self) -> &'a [String] {
        self.row.values()
    }

    pub fn get(&self, pos: usize) -> Result<&'a str> {
        self.row.get(pos).ok_or(DocumentError::IndexOutOfRange {
            what: "value",
            index: pos,
            len: self.row.len(),
        })
    }

    /// Value in the first column named `key`.
    pub fn get_by_key(&self, key: &str) -> Result<&'a str> {
        let pos = self.header.position(key).ok_or_else(|| DocumentError::KeyNotFound {
            key: key.to_string(),
        })?;
        self.get(pos)
    }
}

impl Display for RowView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.row.values().join(" | "))
    }
}
