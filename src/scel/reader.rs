use std::fs;
use std::path::Path;

use log::info;

use super::format::{self, header, metadata, pinyin_table, words};
use super::iter::EntryIterator;
use super::types::error::Result;
use super::types::models::*;

/// A decoding session over one `.scel` file held entirely in memory.
///
/// The buffer is owned by the reader and never modified; every decode
/// builds fresh tables, so repeated calls yield equal results.
#[derive(Debug, Clone)]
pub struct ScelReader {
    data: Vec<u8>,
}

impl ScelReader {
    /// Reads the whole file at `path` into memory.
    ///
    /// No parsing happens here; call [`decode`](Self::decode) for that.
    ///
    /// # Errors
    /// Returns [`ScelError::Io`](super::ScelError::Io) if the file cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening scel file: {}", path.display());
        let data = fs::read(path)?;
        Ok(Self::from_bytes(data))
    }

    /// Wraps an already loaded buffer.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Returns `true` if the buffer starts with the `.scel` signature.
    pub fn is_valid(&self) -> bool {
        header::is_scel(&self.data)
    }

    /// Decodes only the descriptive metadata.
    pub fn info(&self) -> Result<ScelInfo> {
        header::validate(&self.data)?;
        Ok(metadata::parse(&self.data))
    }

    /// Decodes only the pinyin table.
    pub fn pinyin_table(&self) -> Result<PinyinTable> {
        header::validate(&self.data)?;
        pinyin_table::parse(&self.data)
    }

    /// Runs the full pipeline: header, metadata, pinyin table, word list.
    ///
    /// # Errors
    /// - [`BadMagic`](super::ScelError::BadMagic) if the signature is wrong
    /// - [`BadPyTableHeader`](super::ScelError::BadPyTableHeader) if the table sub-header is wrong
    /// - [`TruncatedInput`](super::ScelError::TruncatedInput) if any stage runs out of data
    ///
    /// No partial result is returned on failure.
    pub fn decode(&self) -> Result<ScelDict> {
        decode(&self.data)
    }

    /// Decodes the file and iterates over `(pinyin, word)` pairs in file order.
    pub fn iter_entries(&self) -> Result<EntryIterator> {
        Ok(self.decode()?.into_entries())
    }
}

/// Decodes a complete `.scel` file from memory.
pub fn decode(data: &[u8]) -> Result<ScelDict> {
    info!("Decoding scel data: {} bytes", data.len());

    header::validate(data)?;
    let info = metadata::parse(data);
    let pinyin_table = pinyin_table::parse(data)?;
    let words = words::parse(data, &pinyin_table)?;

    info!(
        "Decoded '{}': {} syllables, {} pinyin groups, {} words ({} bytes of word data)",
        info.name,
        pinyin_table.len(),
        words.len(),
        words.word_count(),
        data.len() - format::WORD_LIST_OFFSET
    );

    Ok(ScelDict {
        info,
        pinyin_table,
        words,
    })
}
