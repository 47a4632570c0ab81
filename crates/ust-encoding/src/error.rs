//! Error types for ust-encoding

/// Result type for ust-encoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while detecting, decoding, or re-encoding text
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Could not determine the text encoding reliably (best guess: {guess}, confidence {confidence:.2} below {threshold:.2})"
    )]
    Undetermined {
        guess: String,
        confidence: f32,
        threshold: f32,
    },

    #[error("Input is not valid {encoding}: malformed byte sequence at offset {offset}")]
    Malformed { encoding: String, offset: usize },

    #[error("Character {character:?} cannot be represented in {encoding}")]
    Unmappable { encoding: String, character: char },

    #[error("Unknown encoding label: {label}")]
    UnknownLabel { label: String },
}

impl Error {
    pub fn undetermined(guess: Option<&str>, confidence: f32, threshold: f32) -> Self {
        Self::Undetermined {
            guess: guess.unwrap_or("none").to_string(),
            confidence,
            threshold,
        }
    }
}
