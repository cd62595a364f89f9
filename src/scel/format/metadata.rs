//! Descriptive text fields stored at fixed offsets before the pinyin table.
//!
//! These fields are informational only. They never fail a decode: a field
//! outside the buffer is empty and malformed text is decoded lossily.

use std::ops::Range;

use encoding_rs::UTF_16LE;
use log::debug;

use super::{CATEGORY_RANGE, DESCRIPTION_RANGE, EXAMPLES_RANGE, NAME_RANGE};
use crate::scel::types::models::ScelInfo;

/// Decodes name, category, description and example words.
pub fn parse(data: &[u8]) -> ScelInfo {
    let info = ScelInfo {
        name: read_field(data, NAME_RANGE),
        category: read_field(data, CATEGORY_RANGE),
        description: read_field(data, DESCRIPTION_RANGE),
        examples: read_field(data, EXAMPLES_RANGE),
    };
    debug!("Dictionary metadata: name='{}', category='{}'", info.name, info.category);
    info
}

/// Reads one null-terminated UTF-16LE field; bytes after the terminator are ignored.
fn read_field(data: &[u8], range: Range<usize>) -> String {
    let Some(bytes) = data.get(range.clone()) else {
        debug!("Metadata field at {:#x} is past the end of the buffer", range.start);
        return String::new();
    };

    let end = bytes
        .chunks_exact(2)
        .position(|unit| unit == [0, 0])
        .map_or(bytes.len() - bytes.len() % 2, |units| units * 2);

    let (text, had_errors) = UTF_16LE.decode_without_bom_handling(&bytes[..end]);
    if had_errors {
        debug!("Metadata field at {:#x} has malformed UTF-16, decoded lossily", range.start);
    }
    text.trim().to_string()
}
