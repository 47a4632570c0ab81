//! Opening and saving whole UST files

use std::path::Path;

use tracing::{debug, info};
use ust_document::{Document, LineEnding, RenderOptions, parse, render};
use ust_encoding::{Encoding, Normalizer, default_write_encoding, encode};

use crate::{Error, Result, io};

/// How [`save`] writes a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveOptions {
    pub encoding: &'static Encoding,
    pub line_ending: LineEnding,
    /// Reorder sections and renumber notes in the written file.
    pub normalize: bool,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            encoding: default_write_encoding(),
            line_ending: LineEnding::default(),
            normalize: false,
        }
    }
}

impl SaveOptions {
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            line_ending: self.line_ending,
            normalize: self.normalize,
        }
    }
}

/// A parsed document together with the encoding it was read in
#[derive(Debug, Clone)]
pub struct OpenedDocument {
    pub document: Document,
    pub encoding: &'static Encoding,
    pub confidence: f32,
}

/// Read, decode and parse a UST file.
///
/// Without `encoding_override` the encoding is detected; with it,
/// detection is skipped and invalid bytes are an error.
pub fn open(
    path: impl AsRef<Path>,
    encoding_override: Option<&'static Encoding>,
) -> Result<Document> {
    open_with(path, &Normalizer::default(), encoding_override).map(|opened| opened.document)
}

/// [`open`] with a caller-supplied normalizer (detector and threshold).
pub fn open_with(
    path: impl AsRef<Path>,
    normalizer: &Normalizer,
    encoding_override: Option<&'static Encoding>,
) -> Result<OpenedDocument> {
    let path = path.as_ref();
    let bytes = io::read_bytes(path)?;
    let decoded = normalizer
        .decode(&bytes, encoding_override)
        .map_err(|e| Error::encoding(path, e))?;
    let document = parse(&decoded.text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        encoding = decoded.encoding.name(),
        records = document.len(),
        "opened document"
    );
    Ok(OpenedDocument {
        document,
        encoding: decoded.encoding,
        confidence: decoded.confidence,
    })
}

/// Render and encode a document without touching the filesystem.
pub fn to_bytes(document: &Document, options: &SaveOptions) -> ust_encoding::Result<Vec<u8>> {
    encode(&render(document, &options.render_options()), options.encoding)
}

/// Write `document` to `path`.
///
/// The destination is replaced atomically. Nothing is retried: an
/// unwritable destination (permissions, missing directory, full disk)
/// surfaces as [`Error::Write`].
pub fn save(document: &Document, path: impl AsRef<Path>, options: &SaveOptions) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(document, options).map_err(|e| Error::encoding(path, e))?;
    io::write_atomic(path, &bytes)?;
    info!(
        path = %path.display(),
        encoding = options.encoding.name(),
        line_ending = %options.line_ending,
        "saved document"
    );
    Ok(())
}
