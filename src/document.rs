use std::path::{Path, PathBuf};

use crate::comparator::Comparator;
use crate::config::Config;
use crate::error::{DocumentError, Result};
use crate::field::Field;
use crate::field_type::FieldType;
use crate::row::{Header, Row, RowView};
use crate::sort::{sort_by, Algorithm, SortStats};

/// A header and the rows loaded under it.
///
/// A document is created by [DocumentReader](crate::reader::DocumentReader), either from a file,
/// in which case it stays bound to that file and can be written back with
/// [sync](Document::sync), or from text already in memory.
///
/// All rows loaded from input have exactly as many values as the header has columns. Rows added
/// with [insert_row](Document::insert_row) are not checked.
///
/// # Examples
/// ```
/// use csv_document_sort::reader::DocumentReader;
///
/// fn first_name() -> Result<(), csv_document_sort::error::DocumentError> {
///     let mut document = DocumentReader::new().from_text("id,name\n1,alpha\n2,beta\n")?;
///     assert_eq!(document.row_value_by_key(0, "name")?, "alpha");
///     document.set_value(0, "name", "gamma");
///     assert!(document.delete_row(1));
///     assert_eq!(document.row_count(), 1);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct Document {
    config: Config,
    path: Option<PathBuf>,
    header: Header,
    rows: Vec<Row>,
    malformed_lines: Vec<usize>,
}

impl Document {
    pub(crate) fn new(
        config: Config,
        path: Option<PathBuf>,
        header: Header,
        rows: Vec<Row>,
        malformed_lines: Vec<usize>,
    ) -> Document {
        Document {
            config,
            path,
            header,
            rows,
            malformed_lines,
        }
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    /// The file this document was loaded from, None when it was loaded from text.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn field_separator(&self) -> char {
        self.config.field_separator()
    }

    /// 1-based numbers of the input lines dropped at load time because their field count did not
    /// match the header.
    pub fn malformed_lines(&self) -> &[usize] {
        &self.malformed_lines
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header(&self) -> &[String] {
        self.header.names()
    }

    pub fn header_element(&self, pos: usize) -> Result<&str> {
        self.header.get(pos)
    }

    /// Position of the first column named `key`.
    pub fn column_position(&self, key: &str) -> Option<usize> {
        self.header.position(key)
    }

    pub fn row(&self, index: usize) -> Result<RowView<'_>> {
        self.rows.get(index)
            .map(|row| RowView::new(index, &self.header, row))
            .ok_or(DocumentError::IndexOutOfRange {
                what: "row",
                index,
                len: self.rows.len(),
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter()
            .enumerate()
            .map(|(index, row)| RowView::new(index, &self.header, row))
    }

    pub fn row_value(&self, index: usize, pos: usize) -> Result<&str> {
        self.row(index)?.get(pos)
    }

    /// Value of the first column named `key` in the row at `index`.
    pub fn row_value_by_key(&self, index: usize, key: &str) -> Result<&str> {
        self.row(index)?.get_by_key(key)
    }

    /// Replace the value of column `key` in the row at `index`. Returns false, without changing
    /// anything, when there is no such row or column.
    pub fn set_value(&mut self, index: usize, key: &str, value: &str) -> bool {
        let Some(pos) = self.header.position(key) else {
            log::debug!("set_value: key not found: {key}");
            return false;
        };
        match self.rows.get_mut(index) {
            Some(row) => row.set(pos, value.to_string()),
            None => {
                log::debug!("set_value: row index {index} is out of range, length is {}", self.rows.len());
                false
            }
        }
    }

    /// Insert a row before `pos`. `pos` equal to [row_count](Document::row_count) appends.
    /// Returns false, without changing anything, when `pos` is past the end.
    ///
    /// The number of values is not checked against the header.
    pub fn insert_row<I, S>(&mut self, pos: usize, values: I) -> bool
        where I: IntoIterator<Item = S>, S: Into<String> {
        if pos > self.rows.len() {
            return false;
        }
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() != self.header.len() {
            log::debug!(
                "insert_row: inserting {} values under a header of {} columns at {pos}",
                values.len(),
                self.header.len(),
            );
        }
        self.rows.insert(pos, Row::new(values));
        true
    }

    /// Remove the row at `pos`. Returns false when there is no such row.
    pub fn delete_row(&mut self, pos: usize) -> bool {
        if pos < self.rows.len() {
            self.rows.remove(pos);
            true
        } else {
            false
        }
    }

    /// Create a sort [Field] for the first column named `name`.
    pub fn field(&self, name: &str, field_type: FieldType) -> Result<Field> {
        let pos = self.header.position(name).ok_or_else(|| DocumentError::KeyNotFound {
            key: name.to_string(),
        })?;
        Ok(Field::new(pos, field_type).with_name(name.to_string()))
    }

    /// Reorder the rows of this document in place.
    pub fn sort_rows<C>(&mut self, algorithm: Algorithm, comparator: &C) -> SortStats
        where C: Comparator<Row> + ?Sized {
        sort_by(algorithm, &mut self.rows, comparator)
    }
}
