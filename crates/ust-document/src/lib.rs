//! Document model, parser and renderer for UST files
//!
//! A UST file is a sequence of bracketed sections, each holding
//! `Key=Value` lines:
//!
//! ```text
//! [#SETTING]
//! Tempo=120
//! [#0000]
//! Length=480
//! Lyric=あ
//! NoteNum=63
//! [#TRACKEND]
//! ```
//!
//! [`parser::parse`] turns decoded text into a [`Document`], and
//! [`writer::render`] turns it back into text. Field values are kept as
//! the strings found in the file and coerced on access, so unknown or
//! malformed fields survive a read-modify-write cycle untouched.

pub mod document;
pub mod error;
pub mod keys;
pub mod nn;
pub mod parser;
pub mod record;
pub mod value;
pub mod writer;

pub use document::{Document, Draft};
pub use error::{Error, NnError, ParseError, ParseErrorKind, Result, TypeCoercionError};
pub use parser::parse;
pub use record::{Record, SectionKind, note_tag};
pub use value::{FieldType, FieldValue, FromField};
pub use writer::{LineEnding, RenderOptions, render};
