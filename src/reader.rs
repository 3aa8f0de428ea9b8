use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::config::Config;
use crate::document::Document;
use crate::error::{DocumentError, Result};
use crate::row::{Header, Row};
use crate::tokenizer::split_fields;

/// Load a [Document] from a file or from text
///
/// # Examples
/// ```
/// use std::path::PathBuf;
/// use csv_document_sort::document::Document;
/// use csv_document_sort::error::DocumentError;
/// use csv_document_sort::reader::DocumentReader;
///
/// fn load_semicolon_separated(path: PathBuf) -> Result<Document, DocumentError> {
///     let mut reader = DocumentReader::new();
///     reader.with_field_separator(';');
///     reader.from_path(path)
/// }
/// ```
#[derive(Clone, Debug)]
pub struct DocumentReader {
    field_separator: char,
    ignore_lines: Option<Regex>,
    quote_on_write: bool,
    endl: char,
}

impl DocumentReader {
    /// Create a default DocumentReader.
    ///
    /// * The default field separator is a comma (',')
    /// * blank lines are always skipped, no other lines are ignored
    /// * values are written back as they are, without adding quotes
    /// * default end line is '\n'
    pub fn new() -> DocumentReader {
        DocumentReader {
            field_separator: ',',
            ignore_lines: None,
            quote_on_write: false,
            endl: '\n',
        }
    }

    /// Set the field separator. The default is ','
    pub fn with_field_separator(&mut self, field_separator: char) {
        self.field_separator = field_separator
    }

    /// Specify which lines to ignore. Each line matching the regex is skipped before the header
    /// is taken, so comment lines may precede it.
    pub fn with_ignore_lines(&mut self, r: Regex) {
        self.ignore_lines = Some(r)
    }

    /// When writing, wrap values that contain the field separator in quotes unless they are
    /// quoted already.
    pub fn with_quote_on_write(&mut self) {
        self.quote_on_write = true;
    }

    /// Set line ending char used when writing - not supporting CRLF
    pub fn with_endl(&mut self, endl: char) {
        self.endl = endl
    }

    /// Load the file at `path`. The document stays bound to `path` for
    /// [sync](Document::sync). Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path)
            .map_err(|source| DocumentError::OpenFailure {
                path: path.clone(),
                source,
            })?;
        let origin = path.display().to_string();
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("{origin} is not valid UTF-8 ({}), invalid bytes are replaced", e.utf8_error());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        Self::parse(self.create_config(), Some(path), &text, &origin)
    }

    /// Load a document from text already in memory. The document is not bound to a file.
    pub fn from_text(&self, text: &str) -> Result<Document> {
        Self::parse(self.create_config(), None, text, "in-memory text")
    }

    fn create_config(&self) -> Config {
        Config::new(
            self.field_separator,
            self.ignore_lines.clone(),
            self.quote_on_write,
            self.endl,
        )
    }

    fn parse(config: Config, path: Option<PathBuf>, text: &str, origin: &str) -> Result<Document> {
        let mut lines = Vec::new();
        for (n, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(r) = config.ignore_lines() {
                if r.is_match(line.trim()) {
                    continue;
                }
            }
            lines.push((n + 1, line));
        }

        let Some(((_, header_line), content)) = lines.split_first() else {
            return Err(DocumentError::EmptyData {
                origin: origin.to_string(),
            });
        };

        let header = Header::new(split_fields(header_line, config.field_separator()));
        let mut rows = Vec::with_capacity(content.len());
        let mut malformed_lines = Vec::new();
        for &(n, line) in content {
            let values = split_fields(line, config.field_separator());
            if values.len() != header.len() {
                let e = DocumentError::RowShapeMismatch {
                    line: n,
                    expected: header.len(),
                    found: values.len(),
                };
                log::warn!("Skipping malformed row in {origin}, {e}: {line}");
                malformed_lines.push(n);
                continue;
            }
            rows.push(Row::new(values));
        }

        log::info!(
            "Loaded {origin}, columns: {}, rows: {}, malformed rows skipped: {}",
            header.len(),
            rows.len(),
            malformed_lines.len(),
        );
        Ok(Document::new(config, path, header, rows, malformed_lines))
    }
}

impl Default for DocumentReader {
    fn default() -> Self {
        DocumentReader::new()
    }
}
