//! Decoding raw bytes into Unicode text

use std::fmt;

use encoding_rs::{DecoderResult, Encoding};
use tracing::debug;

use crate::detect::{CERTAIN, ChardetDetector, Detection, EncodingDetector};
use crate::error::{Error, Result};

/// Minimum confidence accepted by [`Normalizer`] unless overridden.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// Text decoded from a byte buffer, together with how it was decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static Encoding,
    pub confidence: f32,
}

/// Detects the encoding of a byte buffer and decodes it to a `String`.
pub struct Normalizer {
    detector: Box<dyn EncodingDetector>,
    threshold: f32,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            detector: Box::new(ChardetDetector::default()),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom detection strategy.
    pub fn with_detector(detector: impl EncodingDetector + 'static) -> Self {
        Self {
            detector: Box::new(detector),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Run the detector and reject guesses below the threshold.
    pub fn detect(&self, bytes: &[u8]) -> Result<Detection> {
        match self.detector.detect(bytes) {
            Some(detection) if detection.confidence >= self.threshold => Ok(detection),
            Some(detection) => Err(Error::undetermined(
                Some(detection.encoding.name()),
                detection.confidence,
                self.threshold,
            )),
            None => Err(Error::undetermined(None, 0.0, self.threshold)),
        }
    }

    /// Decode `bytes`, detecting the encoding unless `encoding_override` is given.
    ///
    /// A leading byte-order mark matching the chosen encoding is removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Undetermined`] when detection is not confident enough
    /// and [`Error::Malformed`] when the bytes are invalid for the encoding.
    pub fn decode(
        &self,
        bytes: &[u8],
        encoding_override: Option<&'static Encoding>,
    ) -> Result<Decoded> {
        let detection = match encoding_override {
            Some(encoding) => Detection::new(encoding, CERTAIN),
            None => self.detect(bytes)?,
        };
        debug!(
            encoding = detection.encoding.name(),
            confidence = detection.confidence,
            overridden = encoding_override.is_some(),
            "decoding input"
        );

        let body = match Encoding::for_bom(bytes) {
            Some((bom_encoding, bom_len)) if bom_encoding == detection.encoding => {
                &bytes[bom_len..]
            }
            _ => bytes,
        };

        Ok(Decoded {
            text: decode_strict(detection.encoding, body)?,
            encoding: detection.encoding,
            confidence: detection.confidence,
        })
    }
}

/// Decode without replacement characters, reporting the first malformed offset.
pub(crate) fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Result<String> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut text = String::with_capacity(
        decoder
            .max_utf8_buffer_length_without_replacement(bytes.len())
            .unwrap_or(bytes.len()),
    );
    let mut consumed = 0;
    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[consumed..], &mut text, true);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => return Ok(text),
            DecoderResult::OutputFull => {
                let remaining = bytes.len() - consumed;
                text.reserve(
                    decoder
                        .max_utf8_buffer_length_without_replacement(remaining)
                        .unwrap_or(remaining)
                        .max(16),
                );
            }
            DecoderResult::Malformed(bad, extra) => {
                return Err(Error::Malformed {
                    encoding: encoding.name().to_string(),
                    offset: consumed - bad as usize - extra as usize,
                });
            }
        }
    }
}
