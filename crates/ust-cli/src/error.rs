//! Error types for ust-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from ust-fs
    #[error(transparent)]
    Fs(#[from] ust_fs::Error),

    /// Error from ust-document
    #[error(transparent)]
    Document(#[from] ust_document::Error),

    /// Error from ust-encoding
    #[error(transparent)]
    Encoding(#[from] ust_encoding::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}

impl From<ust_document::TypeCoercionError> for CliError {
    fn from(e: ust_document::TypeCoercionError) -> Self {
        Self::Document(e.into())
    }
}

impl From<ust_document::NnError> for CliError {
    fn from(e: ust_document::NnError) -> Self {
        Self::Document(e.into())
    }
}
