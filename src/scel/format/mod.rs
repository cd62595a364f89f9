//! File format parsing layer for Sogou `.scel` dictionary files.
//!
//! # Module Organization
//!
//! - [`header`]: Validates the 12-byte magic signature
//! - [`metadata`]: Decodes the fixed-size descriptive text fields
//! - [`pinyin_table`]: Parses the index → syllable table
//! - [`words`]: Walks the word-group records to the end of the file
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────┐ 0x0000
//! │  Magic          │ ← header::validate()
//! ├─────────────────┤ 0x0130
//! │  Name, category,│ ← metadata::parse()
//! │  description,   │
//! │  examples       │
//! ├─────────────────┤ 0x1540
//! │  Pinyin table   │ ← pinyin_table::parse()
//! ├─────────────────┤ 0x2628
//! │  Word groups    │ ← words::parse()
//! │  (to EOF)       │
//! └─────────────────┘
//! ```

use std::ops::Range;

pub mod header;
pub mod metadata;
pub mod pinyin_table;
pub mod words;

/// Signature every `.scel` file starts with.
pub const MAGIC: [u8; 12] = [
    0x40, 0x15, 0x00, 0x00, 0x44, 0x43, 0x53, 0x01, 0x01, 0x00, 0x00, 0x00,
];

pub const NAME_RANGE: Range<usize> = 0x130..0x338;
pub const CATEGORY_RANGE: Range<usize> = 0x338..0x540;
pub const DESCRIPTION_RANGE: Range<usize> = 0x540..0xD40;
pub const EXAMPLES_RANGE: Range<usize> = 0xD40..0x1540;

pub const PINYIN_TABLE_RANGE: Range<usize> = 0x1540..0x2628;

/// First four bytes of the pinyin table region.
pub const PINYIN_TABLE_HEADER: [u8; 4] = [0x9D, 0x01, 0x00, 0x00];

/// Offset where the word-group records begin; they run to end of file.
pub const WORD_LIST_OFFSET: usize = 0x2628;
