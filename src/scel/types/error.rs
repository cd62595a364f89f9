//! Custom error types for the scel-reader crate.

use std::fmt;
use thiserror::Error;

/// The decoding stage an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PinyinTable,
    WordList,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::PinyinTable => write!(f, "pinyin table"),
            Stage::WordList => write!(f, "word list"),
        }
    }
}

/// What exactly ran out (or went wrong) while reading a byte range.
///
/// Offsets are absolute positions in the `.scel` file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Truncation {
    /// A read needed more bytes than the buffer had left.
    #[error("needed {needed} bytes at offset {offset:#x}, but only {remaining} remain")]
    ShortRead {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// A UTF-16 field ended on a dangling byte.
    #[error("UTF-16 text at offset {offset:#x} has odd byte length {len}")]
    OddTextLength { offset: usize, len: usize },

    /// A UTF-16 field contained an unpaired surrogate.
    #[error("invalid UTF-16 sequence in text at offset {offset:#x}")]
    InvalidUtf16 { offset: usize },
}

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum ScelError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The 12-byte file signature is missing or wrong.
    #[error("wrong scel format: bad magic signature")]
    BadMagic,

    /// The pinyin table does not start with the expected sub-header.
    #[error("wrong sogou pinyin table header: found {found:02x?}")]
    BadPyTableHeader { found: [u8; 4] },

    /// A read in the given stage hit the end of the data or malformed text.
    #[error("truncated input in {stage}: {reason}")]
    TruncatedInput { stage: Stage, reason: Truncation },
}

/// A convenience `Result` type alias using the crate's `ScelError` type.
pub type Result<T> = std::result::Result<T, ScelError>;
