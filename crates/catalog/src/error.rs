//! Error types for the catalog crate.
//!
//! Every failure here is fatal to catalog construction: the caller gets the
//! error and no partially built catalog.

use thiserror::Error;

/// Errors that can occur while loading and building the coaster catalog
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A cell in the table couldn't be parsed
    ///
    /// `line` is the 1-based line in the source, header included.
    #[error("Parse error at line {line} in {source_name}: {reason}")]
    ParseError {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// A column the catalog needs is absent from the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// The source had no header row at all
    #[error("Table {source_name} is empty")]
    EmptyTable { source_name: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
