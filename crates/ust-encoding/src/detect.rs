//! Pluggable encoding detection.
//!
//! Detection is kept behind the [`EncodingDetector`] trait so that the
//! heuristic can be swapped out or stubbed without touching the decoder.

use encoding_rs::{
    BIG5, EUC_JP, EUC_KR, Encoding, GB18030, GBK, SHIFT_JIS, UTF_8, UTF_16BE, UTF_16LE,
};
use tracing::{debug, trace};

use crate::decode::decode_strict;

/// Confidence assigned to a byte-order mark or to valid UTF-8.
pub const CERTAIN: f32 = 1.0;
/// Confidence assigned to a statistical guess among the candidate encodings.
pub const LIKELY: f32 = 0.9;
/// Confidence assigned to BOM-less UTF-16 recognised by its NUL byte pattern.
pub const UTF16_PATTERN: f32 = 0.8;
/// Confidence assigned to the first legacy candidate that decodes cleanly
/// when the statistical guess is rejected.
pub const FALLBACK: f32 = 0.6;
/// Confidence assigned to a guess outside the candidate set.
pub const UNLIKELY: f32 = 0.4;

/// The outcome of running a detector over a byte buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub encoding: &'static Encoding,
    /// Score in `0.0..=1.0`.
    pub confidence: f32,
}

impl Detection {
    pub fn new(encoding: &'static Encoding, confidence: f32) -> Self {
        Self {
            encoding,
            confidence,
        }
    }
}

/// Guesses the character encoding of a byte buffer.
///
/// Returns `None` when the detector cannot produce any guess at all.
pub trait EncodingDetector {
    fn detect(&self, bytes: &[u8]) -> Option<Detection>;
}

/// Encodings the default detector treats as plausible for UST files.
pub fn default_candidates() -> Vec<&'static Encoding> {
    vec![
        UTF_8, UTF_16LE, UTF_16BE, SHIFT_JIS, EUC_JP, GBK, GB18030, BIG5, EUC_KR,
    ]
}

/// Default detector: byte-order marks, a UTF-16 NUL pattern check, UTF-8
/// validation, then `chardetng` for legacy encodings.
#[derive(Debug, Clone)]
pub struct ChardetDetector {
    candidates: Vec<&'static Encoding>,
}

impl Default for ChardetDetector {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
        }
    }
}

impl ChardetDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the encodings that may score above [`UNLIKELY`].
    pub fn with_candidates(candidates: Vec<&'static Encoding>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[&'static Encoding] {
        &self.candidates
    }

    /// First multi-byte legacy candidate, in list order, that decodes `bytes`
    /// without malformed sequences. Unicode candidates are skipped: UTF-8 was
    /// already ruled out and UTF-16 decodes nearly any even-length input.
    fn first_clean_candidate(&self, bytes: &[u8]) -> Option<&'static Encoding> {
        self.candidates
            .iter()
            .copied()
            .filter(|encoding| ![UTF_8, UTF_16LE, UTF_16BE].contains(encoding))
            .find(|&encoding| decode_strict(encoding, bytes).is_ok())
    }

    fn score(&self, encoding: &'static Encoding, bytes: &[u8], on_match: f32) -> f32 {
        if decode_strict(encoding, bytes).is_err() {
            return 0.0;
        }
        if self.candidates.contains(&encoding) {
            on_match
        } else {
            UNLIKELY
        }
    }
}

impl EncodingDetector for ChardetDetector {
    fn detect(&self, bytes: &[u8]) -> Option<Detection> {
        if let Some((encoding, _)) = Encoding::for_bom(bytes) {
            trace!(encoding = encoding.name(), "byte-order mark found");
            return Some(Detection::new(encoding, CERTAIN));
        }

        if let Some(encoding) = utf16_by_nul_pattern(bytes) {
            let confidence = self.score(encoding, bytes, UTF16_PATTERN);
            return Some(Detection::new(encoding, confidence));
        }

        if Encoding::utf8_valid_up_to(bytes) == bytes.len() {
            let confidence = if self.candidates.contains(&UTF_8) {
                CERTAIN
            } else {
                UNLIKELY
            };
            return Some(Detection::new(UTF_8, confidence));
        }

        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        let guess = detector.guess(None, false);
        let confidence = self.score(guess, bytes, LIKELY);
        debug!(guess = guess.name(), confidence, "statistical encoding guess");
        if confidence >= LIKELY {
            return Some(Detection::new(guess, confidence));
        }

        // Short files give chardetng too little to go on (a lone kana lyric
        // reads as IBM866 or windows-1252), so try the candidates in order.
        if let Some(encoding) = self.first_clean_candidate(bytes) {
            debug!(
                rejected = guess.name(),
                encoding = encoding.name(),
                "falling back to candidate encoding"
            );
            return Some(Detection::new(encoding, FALLBACK));
        }
        Some(Detection::new(guess, confidence))
    }
}

/// Recognises BOM-less UTF-16 from NUL bytes concentrated in one lane.
fn utf16_by_nul_pattern(bytes: &[u8]) -> Option<&'static Encoding> {
    if bytes.len() < 4 || bytes.len() % 2 != 0 {
        return None;
    }
    let pairs = bytes.len() / 2;
    let (mut even, mut odd) = (0usize, 0usize);
    for pair in bytes.chunks_exact(2) {
        if pair[0] == 0 {
            even += 1;
        }
        if pair[1] == 0 {
            odd += 1;
        }
    }
    let share = |count: usize| count as f32 / pairs as f32;
    if share(odd) >= 0.3 && share(even) < 0.05 {
        Some(UTF_16LE)
    } else if share(even) >= 0.3 && share(odd) < 0.05 {
        Some(UTF_16BE)
    } else {
        None
    }
}
