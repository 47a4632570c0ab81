//! Section/field parser.
//!
//! Turns decoded UST text into a [`Document`]:
//! ```text
//! [#VERSION]
//! UST Version1.2
//! [#0000]
//! Length=480
//! Lyric=あ
//! ```

use tracing::{debug, trace};

use crate::document::Document;
use crate::error::{ParseError, ParseErrorKind};
use crate::record::{Record, SectionKind};

/// Parse a complete UST text.
///
/// `\n` and `\r\n` terminators may be mixed. Trailing whitespace is
/// ignored, blank lines are skipped, and a repeated key keeps its first
/// position but takes the last value. Bare lines without `=` are only
/// accepted inside `[#VERSION]`.
///
/// # Errors
///
/// Returns the first [`ParseError`] found; nothing is returned for a
/// partially parsed input.
///
/// # Example
/// ```
/// use ust_document::parser::parse;
///
/// let doc = parse("[#0000]\r\nLength=480\r\nLyric=あ\r\n").unwrap();
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.get("#0000").unwrap().get_raw("Lyric"), Some("あ"));
/// ```
pub fn parse(text: &str) -> Result<Document, ParseError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records: Vec<Record> = Vec::new();

    for (index, raw_line) in text.split('\n').enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim_end_matches(|c: char| c.is_ascii_whitespace());
        if line.is_empty() {
            continue;
        }
        let error = |kind| ParseError::new(line_number, kind, line);

        if line.starts_with('[') {
            let tag = parse_header(line).map_err(error)?;
            trace!(line = line_number, tag, "section");
            records.push(Record::new(tag));
            continue;
        }

        let Some(record) = records.last_mut() else {
            return Err(error(ParseErrorKind::ContentBeforeFirstSection));
        };

        match line.split_once('=') {
            Some(("", _)) => return Err(error(ParseErrorKind::EmptyKey)),
            Some((key, value)) => {
                if let Some(previous) = record.set_raw(key, value) {
                    trace!(line = line_number, key, previous, "duplicate key overwritten");
                }
            }
            None if record.kind() == SectionKind::Version => record.push_line(line),
            None => return Err(error(ParseErrorKind::MalformedField)),
        }
    }

    debug!(records = records.len(), "parsed document");
    Ok(Document::from_records(records))
}

/// Extract the tag from a `[tag]` line.
fn parse_header(line: &str) -> Result<&str, ParseErrorKind> {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(ParseErrorKind::MissingClosingBracket)?;
    if inner.is_empty() {
        return Err(ParseErrorKind::EmptyTag);
    }
    Ok(inner)
}
