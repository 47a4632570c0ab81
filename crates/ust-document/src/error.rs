//! Error types for ust-document

use crate::value::FieldType;

/// Result type for ust-document operations
pub type Result<T> = std::result::Result<T, Error>;

/// What was wrong with a line rejected by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    ContentBeforeFirstSection,
    MissingClosingBracket,
    EmptyTag,
    MalformedField,
    EmptyKey,
}

impl ParseErrorKind {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::ContentBeforeFirstSection => "content before first section",
            Self::MissingClosingBracket => "missing closing bracket",
            Self::EmptyTag => "empty section tag",
            Self::MalformedField => "malformed key=value pair",
            Self::EmptyKey => "empty key",
        }
    }
}

/// A structural violation of the section/field grammar.
///
/// Parsing stops at the first violation; no partial document is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {}: {text:?}", .kind.describe())]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub kind: ParseErrorKind,
    /// The offending line, trailing whitespace removed.
    pub text: String,
}

impl ParseError {
    pub fn new(line: usize, kind: ParseErrorKind, text: impl Into<String>) -> Self {
        Self {
            line,
            kind,
            text: text.into(),
        }
    }
}

/// A stored field value that does not read as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Field {key} = {raw:?} is not a valid {expected}")]
pub struct TypeCoercionError {
    pub key: String,
    pub raw: String,
    pub expected: FieldType,
}

/// Errors raised while converting NN note lists
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NnError {
    #[error("NN input is empty")]
    MissingHeader,

    #[error("line {line}: missing column {column}")]
    MissingColumn { line: usize, column: usize },

    #[error("line {line}: column {column} is not a number: {value:?}")]
    InvalidNumber {
        line: usize,
        column: usize,
        value: String,
    },
}

/// Errors that can occur in ust-document operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    TypeCoercion(#[from] TypeCoercionError),

    #[error("Record index {index} out of bounds (document has {len} records)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Quantize step must be positive, got {step}")]
    InvalidQuantizeStep { step: i64 },

    #[error(transparent)]
    Nn(#[from] NnError),
}
