//! A single bracketed section and its fields

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use tracing::warn;

use crate::error::TypeCoercionError;
use crate::keys;
use crate::value::{self, FieldType, FieldValue, FromField};

/// Note tags are `#` followed by a zero-padded index.
static NOTE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9]+)$").expect("Invalid note tag regex"));

/// Conventional tag for the note at `index`, e.g. `#0007`.
pub fn note_tag(index: usize) -> String {
    format!("#{index:04}")
}

/// Classification of a section by its tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Version,
    Setting,
    TrackEnd,
    Note(usize),
    Other,
}

impl SectionKind {
    pub fn of(tag: &str) -> Self {
        match tag {
            keys::VERSION_TAG => SectionKind::Version,
            keys::SETTING_TAG => SectionKind::Setting,
            keys::TRACKEND_TAG => SectionKind::TrackEnd,
            _ => NOTE_TAG_REGEX
                .captures(tag)
                .and_then(|caps| caps[1].parse().ok())
                .map_or(SectionKind::Other, SectionKind::Note),
        }
    }
}

/// One `[tag]` section: bare lines plus an insertion-ordered field map.
///
/// Values are stored as the raw strings found in the file. Equality
/// takes field order into account.
#[derive(Debug, Clone, Default)]
pub struct Record {
    tag: String,
    lines: Vec<String>,
    fields: IndexMap<String, String>,
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.lines == other.lines
            && self.fields.iter().eq(other.fields.iter())
    }
}

impl Eq for Record {}

impl Record {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Build a record from typed values, rendered in canonical form.
    pub fn from_fields<K, V>(tag: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut record = Self::new(tag);
        for (key, value) in fields {
            record.set(key, value);
        }
        record
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.tag = tag.into();
    }

    pub fn kind(&self) -> SectionKind {
        SectionKind::of(&self.tag)
    }

    pub fn is_note(&self) -> bool {
        matches!(self.kind(), SectionKind::Note(_))
    }

    pub fn note_index(&self) -> Option<usize> {
        match self.kind() {
            SectionKind::Note(index) => Some(index),
            _ => None,
        }
    }

    /// Bare lines such as `UST Version1.2` in the `#VERSION` section.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// `true` when the record has neither fields nor bare lines.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.lines.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Store a raw value. An existing key keeps its position.
    ///
    /// Trailing whitespace is not preserved through render and parse: a
    /// `Lyric` of `" "` reads back as `""` (both are rests). Storing such a
    /// value logs a warning.
    ///
    /// Returns the previous raw value, if any.
    pub fn set_raw(&mut self, key: impl Into<String>, raw: impl Into<String>) -> Option<String> {
        let (key, raw) = (key.into(), raw.into());
        if raw.ends_with(|c: char| c.is_ascii_whitespace()) {
            warn!(
                tag = %self.tag,
                key = %key,
                raw = ?raw,
                "trailing whitespace is dropped when the file is read back"
            );
        }
        self.fields.insert(key, raw)
    }

    /// Store a typed value in its canonical text form.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Option<String> {
        self.set_raw(key, value.into().to_string())
    }

    /// Remove a field, keeping the order of the others.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.shift_remove(key)
    }

    /// Read `key` as `expected`, or `None` when the field is absent.
    pub fn field_value(
        &self,
        key: &str,
        expected: FieldType,
    ) -> Result<Option<FieldValue>, TypeCoercionError> {
        self.get_raw(key)
            .map(|raw| FieldValue::coerce(key, raw, expected))
            .transpose()
    }

    /// Read `key` using its declared type, falling back to a string.
    pub fn typed_value(&self, key: &str) -> Result<Option<FieldValue>, TypeCoercionError> {
        self.field_value(key, keys::declared_type(key).unwrap_or(FieldType::String))
    }

    pub fn value<T: FromField>(&self, key: &str) -> Result<Option<T>, TypeCoercionError> {
        self.get_raw(key)
            .map(|raw| value::coerce(key, raw))
            .transpose()
    }

    pub fn value_or<T: FromField>(&self, key: &str, default: T) -> Result<T, TypeCoercionError> {
        Ok(self.value(key)?.unwrap_or(default))
    }

    /// Read a numeric sequence field such as `PBW`, `PBY`, `VBR` or `PBS`.
    pub fn list(&self, key: &str) -> Result<Option<Vec<f64>>, TypeCoercionError> {
        self.get_raw(key)
            .map(|raw| value::parse_list(key, raw, keys::list_separator(key)))
            .transpose()
    }

    pub fn set_list(&mut self, key: impl Into<String>, values: &[f64]) -> Option<String> {
        let key = key.into();
        let raw = value::format_list(values, keys::list_separator(&key));
        self.set_raw(key, raw)
    }

    pub fn length(&self) -> Result<Option<i64>, TypeCoercionError> {
        self.value(keys::LENGTH)
    }

    pub fn note_num(&self) -> Result<Option<i64>, TypeCoercionError> {
        self.value(keys::NOTE_NUM)
    }

    pub fn lyric(&self) -> Option<&str> {
        self.get_raw(keys::LYRIC)
    }

    /// A note without a lyric, or with `r`, `R`, a space or nothing, is a rest.
    pub fn is_rest(&self) -> bool {
        self.lyric().is_none_or(keys::is_rest_lyric)
    }
}
