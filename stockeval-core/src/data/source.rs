//! Reader options and structured error types shared by both sources.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use super::schema::ColumnNames;

/// Which of the two input tables an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Metadata,
    Prices,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::Metadata => f.write_str("metadata"),
            SourceKind::Prices => f.write_str("prices"),
        }
    }
}

/// Errors raised while reading a source table.
///
/// Line numbers are 1-based and count the header line.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open {kind} source {}: {source}", .path.display())]
    Open {
        kind: SourceKind,
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{kind} source is missing required column(s): {}", .missing.join(", "))]
    MissingColumns {
        kind: SourceKind,
        missing: Vec<String>,
    },

    #[error("malformed {kind} row at line {line}: {source}")]
    Malformed {
        kind: SourceKind,
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("invalid trade date '{value}' at line {line}")]
    InvalidDate { line: u64, value: String },

    #[error("invalid price '{value}' at line {line}: prices must be positive numbers")]
    InvalidPrice { line: u64, value: String },
}

impl SourceError {
    pub(crate) fn malformed(kind: SourceKind, source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line()).unwrap_or_default();
        SourceError::Malformed { kind, line, source }
    }
}

/// How to read a delimited source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Field delimiter byte (`,` by default).
    pub delimiter: u8,
    /// Header names of the required columns.
    pub columns: ColumnNames,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            columns: ColumnNames::default(),
        }
    }
}

impl ReadOptions {
    pub(crate) fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All);
        builder
    }
}
