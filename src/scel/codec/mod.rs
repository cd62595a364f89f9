//! Codec layer for text decoding.
//!
//! # Submodules
//!
//! - [`utf16`][]: UTF-16LE decoding with null code units dropped
pub mod utf16;
