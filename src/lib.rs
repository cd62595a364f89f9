//! # scel-reader
//!
//! A reader for Sogou Pinyin `.scel` dictionary files.
//!
//! Decodes the whole file from memory into its metadata, the pinyin
//! syllable table, and the words grouped by composite pinyin in file order.
//!
//! ```no_run
//! use scel_reader::ScelReader;
//!
//! let reader = ScelReader::open("military.scel")?;
//! let dict = reader.decode()?;
//! for (pinyin, words) in dict.words.iter() {
//!     println!("{}: {}", pinyin, words.join(" "));
//! }
//! # Ok::<(), scel_reader::ScelError>(())
//! ```
pub mod scel;

// Re-export the main types for convenience
pub use scel::{
    decode, EntryIterator, PinyinTable, Result, ScelDict, ScelError, ScelInfo, ScelReader, Stage,
    Truncation, WordGroups,
};
