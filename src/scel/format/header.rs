//! Magic signature check.

use log::trace;

use super::MAGIC;
use crate::scel::types::error::{Result, ScelError};

/// Returns `true` if `data` starts with the `.scel` signature.
///
/// Only the first 12 bytes are inspected; the rest of the buffer may hold anything.
pub fn is_scel(data: &[u8]) -> bool {
    data.get(..MAGIC.len()) == Some(&MAGIC[..])
}

/// Rejects buffers that are too short or do not start with the signature.
pub fn validate(data: &[u8]) -> Result<()> {
    if !is_scel(data) {
        trace!(
            "Magic mismatch: found {:02x?}",
            &data[..data.len().min(MAGIC.len())]
        );
        return Err(ScelError::BadMagic);
    }
    Ok(())
}
