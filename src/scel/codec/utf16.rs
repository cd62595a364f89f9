//! UTF-16LE text decoding for `.scel` string fields.
//!
//! Every string in the format is stored as little-endian UTF-16. Fixed-size
//! fields are padded with null code units, and some variable-length fields
//! carry embedded nulls, so all zero units are dropped before decoding.

use encoding_rs::UTF_16LE;

use crate::scel::types::error::Truncation;

/// Decodes `bytes` as UTF-16LE, skipping every `0x0000` code unit.
///
/// `offset` is the absolute file position of `bytes` and is only used for
/// error reporting. Malformed input is rejected instead of being replaced
/// with U+FFFD.
pub fn decode(bytes: &[u8], offset: usize) -> Result<String, Truncation> {
    if bytes.len() % 2 != 0 {
        return Err(Truncation::OddTextLength {
            offset,
            len: bytes.len(),
        });
    }

    let units: Vec<u8> = bytes
        .chunks_exact(2)
        .filter(|unit| unit[0] != 0 || unit[1] != 0)
        .flatten()
        .copied()
        .collect();

    UTF_16LE
        .decode_without_bom_handling_and_without_replacement(&units)
        .map(|text| text.into_owned())
        .ok_or(Truncation::InvalidUtf16 { offset })
}
