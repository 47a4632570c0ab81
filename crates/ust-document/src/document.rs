//! The ordered sequence of records making up one UST file

use std::fmt;

use crate::error::{Error, Result, TypeCoercionError};
use crate::keys;
use crate::record::{Record, SectionKind, note_tag};
use crate::value::FieldValue;
use crate::writer::{self, LineEnding, RenderOptions};

/// A record to be placed by [`Document::construct`].
///
/// Drafts without a tag receive the next conventional note tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub tag: Option<String>,
    pub fields: Vec<(String, FieldValue)>,
}

impl Draft {
    pub fn tagged<K, V>(tag: impl Into<String>, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            tag: Some(tag.into()),
            ..fields.into_iter().collect()
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Draft
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tag: None,
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// An ordered list of records.
///
/// Order is exactly the order of the source file (or of construction) and
/// only changes through the mutation methods. Tags are not required to be
/// unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build a document from drafts, assigning `#NNNN` tags where missing.
    ///
    /// Auto tags continue from the highest note index seen so far, so
    /// `[None, Some("#0005"), None]` yields `#0000`, `#0005`, `#0006`.
    pub fn construct(drafts: impl IntoIterator<Item = Draft>) -> Self {
        let mut next_index = 0;
        let records = drafts
            .into_iter()
            .map(|draft| {
                let tag = draft.tag.unwrap_or_else(|| note_tag(next_index));
                let record = Record::from_fields(tag, draft.fields);
                if let SectionKind::Note(index) = record.kind() {
                    next_index = next_index.max(index.saturating_add(1));
                }
                record
            })
            .collect();
        Self { records }
    }

    /// Build a document of notes from plain field mappings.
    ///
    /// ```
    /// use ust_document::Document;
    ///
    /// let doc = Document::from_field_maps([vec![("Length", 480)], vec![("Length", 240)]]);
    /// assert_eq!(doc.record(1).unwrap().tag(), "#0001");
    /// ```
    pub fn from_field_maps<M, K, V>(maps: impl IntoIterator<Item = M>) -> Self
    where
        M: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self::construct(maps.into_iter().map(Draft::from_iter))
    }

    /// A complete project: `#VERSION`, `#SETTING`, the notes, `#TRACKEND`.
    pub fn project<K, V>(
        settings: impl IntoIterator<Item = (K, V)>,
        notes: impl IntoIterator<Item = Draft>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut version = Record::new(keys::VERSION_TAG);
        version.push_line(keys::VERSION_LINE);

        let mut records = vec![version, Record::from_fields(keys::SETTING_TAG, settings)];
        records.extend(Self::construct(notes).records);
        records.push(Record::new(keys::TRACKEND_TAG));
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Record> {
        self.records.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn record_mut(&mut self, index: usize) -> Option<&mut Record> {
        self.records.get_mut(index)
    }

    /// First record with `tag`.
    pub fn get(&self, tag: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.tag() == tag)
    }

    pub fn get_mut(&mut self, tag: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.tag() == tag)
    }

    /// Every record with `tag`, in document order.
    pub fn all_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Record> + 'a {
        self.records.iter().filter(move |record| record.tag() == tag)
    }

    pub fn position(&self, tag: &str) -> Option<usize> {
        self.records.iter().position(|record| record.tag() == tag)
    }

    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Insert before `index`; `index == len()` appends.
    pub fn insert_at(&mut self, index: usize, record: Record) -> Result<()> {
        if index > self.records.len() {
            return Err(self.out_of_bounds(index));
        }
        self.records.insert(index, record);
        Ok(())
    }

    /// Insert several records before `index`, keeping their order.
    pub fn insert_many(
        &mut self,
        index: usize,
        records: impl IntoIterator<Item = Record>,
    ) -> Result<()> {
        if index > self.records.len() {
            return Err(self.out_of_bounds(index));
        }
        self.records.splice(index..index, records);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            return Err(self.out_of_bounds(index));
        }
        Ok(self.records.remove(index))
    }

    /// Move the record at `from` so that it ends up at `to`.
    pub fn move_record(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.records.len();
        if from >= len {
            return Err(self.out_of_bounds(from));
        }
        if to >= len {
            return Err(self.out_of_bounds(to));
        }
        let record = self.records.remove(from);
        self.records.insert(to, record);
        Ok(())
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::IndexOutOfBounds {
            index,
            len: self.records.len(),
        }
    }

    pub fn notes(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|record| record.is_note())
    }

    pub fn notes_mut(&mut self) -> impl Iterator<Item = &mut Record> {
        self.records.iter_mut().filter(|record| record.is_note())
    }

    pub fn version(&self) -> Option<&Record> {
        self.get(keys::VERSION_TAG)
    }

    pub fn settings(&self) -> Option<&Record> {
        self.get(keys::SETTING_TAG)
    }

    /// The `#SETTING` record, created after `#VERSION` (or first) if absent.
    pub fn settings_mut(&mut self) -> &mut Record {
        let index = match self.position(keys::SETTING_TAG) {
            Some(index) => index,
            None => {
                let index = self.position(keys::VERSION_TAG).map_or(0, |version| version + 1);
                self.records.insert(index, Record::new(keys::SETTING_TAG));
                index
            }
        };
        &mut self.records[index]
    }

    /// Project tempo from `#SETTING`.
    pub fn tempo(&self) -> std::result::Result<Option<f64>, TypeCoercionError> {
        match self.settings() {
            Some(settings) => settings.value(keys::TEMPO),
            None => Ok(None),
        }
    }

    /// Sum of all note lengths in ticks; notes without `Length` count as 0.
    pub fn total_length(&self) -> Result<i64> {
        let mut total = 0i64;
        for note in self.notes() {
            total = total.saturating_add(note.length()?.unwrap_or(0));
        }
        Ok(total)
    }

    /// Highest and lowest `NoteNum` among non-rest notes.
    pub fn pitch_range(&self) -> Result<Option<(i64, i64)>> {
        let mut range: Option<(i64, i64)> = None;
        for note in self.notes().filter(|note| !note.is_rest()) {
            let Some(pitch) = note.note_num()? else {
                continue;
            };
            range = Some(match range {
                Some((high, low)) => (high.max(pitch), low.min(pitch)),
                None => (pitch, pitch),
            });
        }
        Ok(range)
    }

    /// Round every note `Length` to the nearest multiple of `step`.
    ///
    /// Ties round away from zero. All lengths are checked before any is
    /// changed, so a malformed `Length` leaves the document untouched.
    pub fn quantize(&mut self, step: i64) -> Result<()> {
        if step <= 0 {
            return Err(Error::InvalidQuantizeStep { step });
        }
        let lengths = self
            .notes()
            .map(|note| note.length())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        for (note, length) in self.notes_mut().zip(lengths) {
            if let Some(length) = length {
                note.set(keys::LENGTH, round_to_step(length, step));
            }
        }
        Ok(())
    }

    /// Canonical section order with notes renumbered from `#0000`.
    ///
    /// `#VERSION` comes first, `#SETTING` second and `#TRACKEND` last;
    /// notes and other sections keep their relative order in between.
    pub fn normalize(&mut self) {
        let mut version = Vec::new();
        let mut settings = Vec::new();
        let mut body = Vec::new();
        let mut track_end = Vec::new();
        for record in self.records.drain(..) {
            match record.kind() {
                SectionKind::Version => version.push(record),
                SectionKind::Setting => settings.push(record),
                SectionKind::TrackEnd => track_end.push(record),
                SectionKind::Note(_) | SectionKind::Other => body.push(record),
            }
        }
        for (index, note) in body.iter_mut().filter(|r| r.is_note()).enumerate() {
            note.set_tag(note_tag(index));
        }
        self.records = version
            .into_iter()
            .chain(settings)
            .chain(body)
            .chain(track_end)
            .collect();
    }

    pub fn normalized(&self) -> Self {
        let mut copy = self.clone();
        copy.normalize();
        copy
    }
}

fn round_to_step(length: i64, step: i64) -> i64 {
    let half = step / 2;
    let magnitude = length.unsigned_abs().min(i64::MAX as u64) as i64;
    let rounded = magnitude.saturating_add(half) / step * step;
    if length < 0 { -rounded } else { rounded }
}

impl FromIterator<Record> for Document {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Record> for Document {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for Document {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// Renders with `\n` line endings.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = RenderOptions {
            line_ending: LineEnding::Lf,
            ..RenderOptions::default()
        };
        f.write_str(&writer::render(self, &options))
    }
}
