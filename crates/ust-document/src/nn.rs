//! Import of whitespace-separated NN note lists.
//!
//! The first line holds project metadata (tempo in the first column), the
//! second the note count, and each following line one note:
//!
//! | column | meaning |
//! |---|---|
//! | 0 | lyric |
//! | 3 | length in NN units (60 ticks each) |
//! | 4 | pitch, counted down from NoteNum 83 |
//! | 8, 10, 9 | vibrato length, period, depth |
//! | 12 | comma-separated pitch points, 50 = no bend, 10 per semitone |

use std::str::FromStr;

use tracing::debug;

use crate::document::{Document, Draft};
use crate::error::NnError;
use crate::keys;
use crate::value::{FieldValue, format_list};

const TICKS_PER_UNIT: i64 = 60;
const TOP_NOTE_NUM: i64 = 83;
const PITCH_CENTER: f64 = 50.0;
const PITCH_SCALE: f64 = 10.0;

/// Convert NN text into a complete UST project.
///
/// # Example
/// ```
/// use ust_document::nn::from_nn;
///
/// let nn = "120 4 4\n1\nla la 0 8 23 0 0 0 0 0 0 0 50,40\n";
/// let doc = from_nn(nn).unwrap();
/// let note = doc.get("#0000").unwrap();
/// assert_eq!(note.get_raw("Length"), Some("480"));
/// assert_eq!(note.get_raw("NoteNum"), Some("60"));
/// assert_eq!(note.get_raw("PBY"), Some("0,1"));
/// ```
pub fn from_nn(text: &str) -> Result<Document, NnError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()));

    let (header_line, header) = lines.next().ok_or(NnError::MissingHeader)?;
    let header: Vec<&str> = header.split_whitespace().collect();
    if header.is_empty() {
        return Err(NnError::MissingHeader);
    }
    let tempo: f64 = number(&header, header_line, 0)?;

    // The declared note count is not trusted; rows are counted as read.
    lines.next();

    let mut notes = Vec::new();
    for (line, row) in lines {
        if row.is_empty() {
            continue;
        }
        let columns: Vec<&str> = row.split_whitespace().collect();
        notes.push(note(&columns, line)?);
    }
    debug!(notes = notes.len(), tempo, "converted NN note list");

    Ok(Document::project([(keys::TEMPO, tempo)], notes))
}

fn note(columns: &[&str], line: usize) -> Result<Draft, NnError> {
    let lyric = column(columns, line, 0)?;
    let length = number::<i64>(columns, line, 3)?
        .checked_mul(TICKS_PER_UNIT)
        .ok_or_else(|| out_of_range(columns, line, 3))?;
    let note_num = TOP_NOTE_NUM
        .checked_sub(number::<i64>(columns, line, 4)?)
        .ok_or_else(|| out_of_range(columns, line, 4))?;

    let vibrato = [
        number::<i64>(columns, line, 8)?,
        number::<i64>(columns, line, 10)?,
        number::<i64>(columns, line, 9)?,
    ];
    let vbr = vibrato
        .iter()
        .chain(&[0; 5])
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(",");

    let points = column(columns, line, 12)?
        .split(',')
        .map(|point| {
            point.parse::<i64>().map_err(|_| NnError::InvalidNumber {
                line,
                column: 12,
                value: point.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let pby: Vec<f64> = points
        .iter()
        .map(|&point| (PITCH_CENTER - point as f64) / PITCH_SCALE)
        .collect();
    let step = length as f64 / points.len() as f64;
    let pbw = vec![step; points.len()];

    Ok([
        (keys::LYRIC, FieldValue::from(lyric)),
        (keys::LENGTH, length.into()),
        (keys::NOTE_NUM, note_num.into()),
        (keys::VBR, vbr.into()),
        (keys::PBW, format_list(&pbw, ',').into()),
        (keys::PBY, format_list(&pby, ',').into()),
        (keys::PBS, "0;0".into()),
    ]
    .into_iter()
    .collect())
}

fn out_of_range(columns: &[&str], line: usize, column: usize) -> NnError {
    NnError::InvalidNumber {
        line,
        column,
        value: columns.get(column).copied().unwrap_or_default().to_string(),
    }
}

fn column<'a>(columns: &[&'a str], line: usize, column: usize) -> Result<&'a str, NnError> {
    columns
        .get(column)
        .copied()
        .ok_or(NnError::MissingColumn { line, column })
}

fn number<T: FromStr>(columns: &[&str], line: usize, index: usize) -> Result<T, NnError> {
    let value = column(columns, line, index)?;
    value.parse().map_err(|_| NnError::InvalidNumber {
        line,
        column: index,
        value: value.to_string(),
    })
}
