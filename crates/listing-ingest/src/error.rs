//! Error types for reference table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading reference tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to open or read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The csv reader rejected a record (bad quoting, invalid UTF-8).
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A record has fewer fields than its table needs.
    #[error("{table} row at {path}:{line} has {found} fields, expected at least {required}")]
    MalformedRow {
        table: &'static str,
        path: PathBuf,
        line: u64,
        required: usize,
        found: usize,
    },
}

impl IngestError {
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io) = err.kind() {
            if io.kind() == std::io::ErrorKind::NotFound {
                return Self::FileNotFound {
                    path: path.to_path_buf(),
                };
            }
        }
        if err.is_io_error() {
            let message = err.to_string();
            return match err.into_kind() {
                csv::ErrorKind::Io(source) => Self::FileRead {
                    path: path.to_path_buf(),
                    source,
                },
                _ => Self::FileRead {
                    path: path.to_path_buf(),
                    source: std::io::Error::other(message),
                },
            };
        }
        Self::CsvParse {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
