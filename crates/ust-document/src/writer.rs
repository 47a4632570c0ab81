//! Rendering a document back to UST text.
//!
//! Stored raw values are written unchanged, so fields the model never
//! interpreted keep their exact formatting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::record::Record;

/// Line terminator written after every line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    /// The UST ecosystem is Windows-first.
    #[default]
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lf" | "unix" => Ok(LineEnding::Lf),
            "crlf" | "windows" => Ok(LineEnding::CrLf),
            _ => Err(format!("unknown line ending {s:?} (expected lf or crlf)")),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineEnding::Lf => write!(f, "lf"),
            LineEnding::CrLf => write!(f, "crlf"),
        }
    }
}

/// How [`render`] lays out the text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub line_ending: LineEnding,
    /// Reorder sections and renumber notes first (see [`Document::normalize`]).
    pub normalize: bool,
}

/// Render `document` as UST text. The document itself is never modified.
///
/// # Example
/// ```
/// use ust_document::{Document, LineEnding, RenderOptions, writer::render};
///
/// let doc = Document::from_field_maps([[("Length", 480)]]);
/// let options = RenderOptions { line_ending: LineEnding::Lf, ..Default::default() };
/// assert_eq!(render(&doc, &options), "[#0000]\nLength=480\n");
/// ```
pub fn render(document: &Document, options: &RenderOptions) -> String {
    let eol = options.line_ending.as_str();
    let mut out = String::new();
    if options.normalize {
        for record in document.normalized().iter() {
            render_record(&mut out, record, eol);
        }
    } else {
        for record in document {
            render_record(&mut out, record, eol);
        }
    }
    out
}

fn render_record(out: &mut String, record: &Record, eol: &str) {
    out.push('[');
    out.push_str(record.tag());
    out.push(']');
    out.push_str(eol);
    for line in record.lines() {
        out.push_str(line);
        out.push_str(eol);
    }
    for (key, value) in record.fields() {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push_str(eol);
    }
}
