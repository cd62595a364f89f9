//! Parser for the word-group section.
//!
//! # Record Structure
//! ```text
//! repeated until end of file:
//!   [2 bytes] Word count N (little-endian u16)
//!   [2 bytes] Pinyin byte length P (little-endian u16)
//!   [P bytes] P/2 pinyin table indices (little-endian u16 each)
//!   N times:
//!     [2 bytes] Word byte length W
//!     [W bytes] Word (UTF-16LE)
//!     [2 bytes] Extension byte length E
//!     [E bytes] Extension data, not interpreted
//! ```

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};

use super::WORD_LIST_OFFSET;
use crate::scel::types::error::{Result, ScelError, Stage, Truncation};
use crate::scel::types::models::{PinyinTable, WordGroups};
use crate::scel::utils::ByteReader;

/// Parses every word group from [`WORD_LIST_OFFSET`] to the end of `data`.
///
/// The end of the buffer is only accepted where a new group would start.
/// Any failure discards everything gathered so far.
pub fn parse(data: &[u8], table: &PinyinTable) -> Result<WordGroups> {
    let region = data
        .get(WORD_LIST_OFFSET..)
        .ok_or_else(|| ScelError::TruncatedInput {
            stage: Stage::WordList,
            reason: Truncation::ShortRead {
                offset: data.len(),
                needed: WORD_LIST_OFFSET - data.len(),
                remaining: 0,
            },
        })?;
    let mut reader = ByteReader::new(region, WORD_LIST_OFFSET, Stage::WordList);
    let mut groups = WordGroups::new();
    let mut num_records = 0usize;

    while !reader.is_empty() {
        let record_offset = reader.offset();
        let same_count = reader.read_u16()?;
        let pinyin = read_pinyin(&mut reader, table)?;
        trace!(
            "Word group at {:#x}: pinyin='{}', {} words",
            record_offset, pinyin, same_count
        );

        let words = groups.group_mut(pinyin);
        for _ in 0..same_count {
            let word_len = reader.read_u16()? as usize;
            words.push(reader.read_text(word_len)?);

            let ext_len = reader.read_u16()? as usize;
            reader.skip(ext_len)?;
        }
        num_records += 1;
    }

    debug!(
        "Word list parsed: {} records, {} distinct pinyin, {} words",
        num_records,
        groups.len(),
        groups.word_count()
    );
    Ok(groups)
}

/// Reads a length-prefixed index sequence and resolves it to a pinyin string.
fn read_pinyin(reader: &mut ByteReader<'_>, table: &PinyinTable) -> Result<String> {
    let len = reader.read_u16()? as usize;
    let offset = reader.offset();
    let bytes = reader.read_bytes(len)?;
    if len % 2 != 0 {
        return Err(ScelError::TruncatedInput {
            stage: Stage::WordList,
            reason: Truncation::ShortRead {
                offset: offset + len - 1,
                needed: 2,
                remaining: 1,
            },
        });
    }

    let indices: Vec<u16> = bytes
        .chunks_exact(2)
        .map(LittleEndian::read_u16)
        .collect();
    for &index in &indices {
        if table.get(index).is_none() {
            trace!("Pinyin index {} at {:#x} not in table, resolving to empty", index, offset);
        }
    }
    Ok(table.resolve(&indices))
}
