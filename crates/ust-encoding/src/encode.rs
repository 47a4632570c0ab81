//! Re-encoding text for output

use encoding_rs::{EncoderResult, Encoding, SHIFT_JIS, UTF_16BE, UTF_16LE};

use crate::error::{Error, Result};

/// Encoding used when the caller does not pick one.
///
/// UST tooling historically reads and writes Shift_JIS.
pub fn default_write_encoding() -> &'static Encoding {
    SHIFT_JIS
}

/// Resolve a WHATWG encoding label such as `shift_jis`, `utf-8` or `gbk`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| Error::UnknownLabel {
        label: label.to_string(),
    })
}

/// Encode `text` into `encoding`.
///
/// UTF-16 output carries a byte-order mark. Characters the target encoding
/// cannot represent are an error rather than numeric character references.
pub fn encode(text: &str, encoding: &'static Encoding) -> Result<Vec<u8>> {
    if encoding == UTF_16LE {
        return Ok(encode_utf16(text, [0xFF, 0xFE], u16::to_le_bytes));
    }
    if encoding == UTF_16BE {
        return Ok(encode_utf16(text, [0xFE, 0xFF], u16::to_be_bytes));
    }

    let mut encoder = encoding.new_encoder();
    let mut out = Vec::with_capacity(
        encoder
            .max_buffer_length_from_utf8_without_replacement(text.len())
            .unwrap_or(text.len()),
    );
    let mut consumed = 0;
    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(&text[consumed..], &mut out, true);
        consumed += read;
        match result {
            EncoderResult::InputEmpty => return Ok(out),
            EncoderResult::OutputFull => {
                let remaining = text.len() - consumed;
                out.reserve(
                    encoder
                        .max_buffer_length_from_utf8_without_replacement(remaining)
                        .unwrap_or(remaining)
                        .max(16),
                );
            }
            EncoderResult::Unmappable(character) => {
                return Err(Error::Unmappable {
                    encoding: encoding.name().to_string(),
                    character,
                });
            }
        }
    }
}

fn encode_utf16(text: &str, bom: [u8; 2], to_bytes: fn(u16) -> [u8; 2]) -> Vec<u8> {
    let mut out = Vec::with_capacity(2 + text.len() * 2);
    out.extend_from_slice(&bom);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&to_bytes(unit));
    }
    out
}
