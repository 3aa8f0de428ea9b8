use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by document loading, access and persistence.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The storage location could not be read.
    #[error("failed to open {}: {source}", .path.display())]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No content lines remained after discarding blank and ignored lines.
    #[error("no data in {origin}")]
    EmptyData {
        origin: String,
    },

    /// Positional access beyond the bounds of the rows, the header or a row.
    #[error("{what} index {index} is out of range, length is {len}")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// No header entry is equal to the requested key.
    #[error("key not found: {key}")]
    KeyNotFound {
        key: String,
    },

    /// A line produced a different number of fields than the header. Only used for load
    /// diagnostics, the offending line is dropped and loading continues.
    #[error("line {line}: expected {expected} fields, found {found}")]
    RowShapeMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Writing the document back to storage failed. The target may be partially written.
    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DocumentError>;
