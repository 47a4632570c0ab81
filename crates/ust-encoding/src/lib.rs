//! Encoding detection and normalization for UST files
//!
//! UST files in the wild come in Shift_JIS and other legacy East-Asian
//! encodings as often as in UTF-8 or UTF-16. This crate turns raw bytes
//! into a `String` before parsing and turns rendered text back into bytes
//! for writing.
//!
//! ```
//! use ust_encoding::{Normalizer, encode, SHIFT_JIS};
//!
//! let bytes = encode("[#0000]\r\nLyric=あ\r\n", SHIFT_JIS).unwrap();
//! let decoded = Normalizer::new().decode(&bytes, Some(SHIFT_JIS)).unwrap();
//! assert_eq!(decoded.text, "[#0000]\r\nLyric=あ\r\n");
//! ```

pub mod decode;
pub mod detect;
pub mod encode;
pub mod error;

pub use decode::{DEFAULT_THRESHOLD, Decoded, Normalizer};
pub use detect::{ChardetDetector, Detection, EncodingDetector};
pub use encode::{default_write_encoding, encode, encoding_for_label};
pub use error::{Error, Result};

pub use encoding_rs::{
    BIG5, EUC_JP, EUC_KR, Encoding, GB18030, GBK, SHIFT_JIS, UTF_8, UTF_16BE, UTF_16LE,
};
