//! Well-known section tags and note field keys.
//!
//! This is not a closed set: fields missing from this table are kept and
//! written back untouched, they just have no declared type.

use crate::value::FieldType;

pub const VERSION_TAG: &str = "#VERSION";
pub const SETTING_TAG: &str = "#SETTING";
pub const TRACKEND_TAG: &str = "#TRACKEND";

/// First line of the `#VERSION` section written for new projects.
pub const VERSION_LINE: &str = "UST Version1.2";

pub const LENGTH: &str = "Length";
pub const LYRIC: &str = "Lyric";
pub const NOTE_NUM: &str = "NoteNum";
pub const PRE_UTTERANCE: &str = "PreUtterance";
pub const VOICE_OVERLAP: &str = "VoiceOverlap";
pub const VELOCITY: &str = "Velocity";
pub const INTENSITY: &str = "Intensity";
pub const MODULATION: &str = "Modulation";
pub const START_POINT: &str = "StartPoint";
pub const TEMPO: &str = "Tempo";
pub const FLAGS: &str = "Flags";
pub const ENVELOPE: &str = "Envelope";
pub const PBS: &str = "PBS";
pub const PBW: &str = "PBW";
pub const PBY: &str = "PBY";
pub const PBM: &str = "PBM";
pub const PB_TYPE: &str = "PBType";
pub const PB_START: &str = "PBStart";
pub const VBR: &str = "VBR";

/// Declared type of a well-known key, `None` for extension fields.
pub fn declared_type(key: &str) -> Option<FieldType> {
    let declared = match key {
        LENGTH | NOTE_NUM | PB_TYPE => FieldType::Integer,
        PRE_UTTERANCE | VOICE_OVERLAP | VELOCITY | INTENSITY | MODULATION | START_POINT
        | TEMPO | PB_START | "@overlap" | "@preuttr" | "@stpoint" => FieldType::Float,
        LYRIC | FLAGS | ENVELOPE | PBS | PBW | PBY | PBM | VBR => FieldType::String,
        _ => return None,
    };
    Some(declared)
}

/// Separator for keys holding numeric sequences.
pub fn list_separator(key: &str) -> char {
    match key {
        PBS => ';',
        _ => ',',
    }
}

/// Lyrics that mark a note as a rest.
pub fn is_rest_lyric(lyric: &str) -> bool {
    matches!(lyric, "" | " " | "r" | "R")
}
