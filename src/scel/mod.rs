//! Core `.scel` reader module.
//!
//! Decoding is a linear pipeline over one in-memory buffer:
//! [`format::header`] → [`format::metadata`] → [`format::pinyin_table`] →
//! [`format::words`]. Each stage reads its own byte range through the
//! bounded [`utils::ByteReader`] and reports failures tagged with its
//! [`Stage`].

pub mod codec;
pub mod format;
pub mod iter;
pub mod reader;
pub mod types;
pub mod utils;

pub use iter::EntryIterator;
pub use reader::{decode, ScelReader};
pub use types::error::{Result, ScelError, Stage, Truncation};
pub use types::models::{PinyinTable, ScelDict, ScelInfo, WordGroups};
