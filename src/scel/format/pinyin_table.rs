//! Parser for the index → pinyin syllable table.
//!
//! # Region Structure
//! ```text
//! [4 bytes]  Sub-header, always 9D 01 00 00
//! repeated until the region is exhausted:
//!   [2 bytes] Index (little-endian u16)
//!   [2 bytes] Byte length L (little-endian u16)
//!   [L bytes] Syllable (UTF-16LE)
//! ```

use log::{debug, trace};

use super::{PINYIN_TABLE_HEADER, PINYIN_TABLE_RANGE};
use crate::scel::types::error::{Result, ScelError, Stage};
use crate::scel::types::models::PinyinTable;
use crate::scel::utils::{self, ByteReader};

/// Parses the pinyin table from the full file buffer.
///
/// Running out of data exactly at a record boundary ends the table; running
/// out anywhere inside a record is `TruncatedInput`.
pub fn parse(data: &[u8]) -> Result<PinyinTable> {
    let region = utils::region(data, PINYIN_TABLE_RANGE, Stage::PinyinTable)?;
    let mut reader = ByteReader::new(region, PINYIN_TABLE_RANGE.start, Stage::PinyinTable);

    let header = reader.read_bytes(PINYIN_TABLE_HEADER.len())?;
    if header != PINYIN_TABLE_HEADER {
        let mut found = [0u8; 4];
        found.copy_from_slice(header);
        return Err(ScelError::BadPyTableHeader { found });
    }

    let mut table = PinyinTable::new();
    while !reader.is_empty() {
        let index = reader.read_u16()?;
        let len = reader.read_u16()? as usize;
        let syllable = reader.read_text(len)?;
        trace!("Pinyin table entry {} -> '{}'", index, syllable);
        table.insert(index, syllable);
    }

    debug!("Pinyin table parsed: {} syllables", table.len());
    Ok(table)
}
