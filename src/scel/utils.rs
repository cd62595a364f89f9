//! Low-level byte reading utilities

use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian};

use super::codec::utf16;
use super::types::error::{Result, ScelError, Stage, Truncation};

/// Returns `data[range]`, or `TruncatedInput` if the buffer ends before `range.end`.
///
/// Used for the fixed-offset regions of the format.
pub fn region(data: &[u8], range: Range<usize>, stage: Stage) -> Result<&[u8]> {
    data.get(range.clone()).ok_or_else(|| ScelError::TruncatedInput {
        stage,
        reason: Truncation::ShortRead {
            offset: range.start,
            needed: range.len(),
            remaining: data.len().saturating_sub(range.start),
        },
    })
}

/// Bounded forward-only reader over one region of the file.
///
/// Every read checks the remaining length first and reports failures as
/// `TruncatedInput` tagged with the stage that owns the region.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
    /// Absolute file offset of `data[0]`.
    base: usize,
    stage: Stage,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8], base: usize, stage: Stage) -> Self {
        Self {
            data,
            pos: 0,
            base,
            stage,
        }
    }

    /// Absolute file offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(self.truncated(Truncation::ShortRead {
                offset: self.offset(),
                needed: len,
                remaining: self.remaining(),
            }));
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_bytes(2).map(LittleEndian::read_u16)
    }

    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.read_bytes(len).map(|_| ())
    }

    /// Reads `len` bytes and decodes them as null-skipping UTF-16LE.
    pub fn read_text(&mut self, len: usize) -> Result<String> {
        let offset = self.offset();
        let bytes = self.read_bytes(len)?;
        utf16::decode(bytes, offset).map_err(|reason| self.truncated(reason))
    }

    fn truncated(&self, reason: Truncation) -> ScelError {
        ScelError::TruncatedInput {
            stage: self.stage,
            reason,
        }
    }
}
