//! Error types for ust-fs

use std::path::PathBuf;

/// Result type for ust-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening or saving UST files
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Encoding error in {path}: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: ust_encoding::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ust_document::ParseError,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Invalid config at {path}: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn encoding(path: impl Into<PathBuf>, source: ust_encoding::Error) -> Self {
        Self::Encoding {
            path: path.into(),
            source,
        }
    }
}
