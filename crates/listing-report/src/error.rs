use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to build PDF {path}: {message}")]
    Pdf { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ReportError>;
