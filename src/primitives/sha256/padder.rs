//! Message padding (FIPS 180-4 §5.1.1).
//!
//! The message is followed by a single `0x80` byte, enough zero bytes to leave
//! exactly eight bytes free in the last block, and the bit-length of the
//! original message as a big-endian `u64`.

use tracing::debug;

use super::{BLOCK_LEN, LENGTH_FIELD_LEN, MAX_MESSAGE_LEN};
use crate::error::{Error, Result};

const TERMINATOR: u8 = 0x80;

/// Bit-length of a message of `len` bytes, as stored in the length field.
///
/// Fails with [`Error::Overflow`] when `len` exceeds [`MAX_MESSAGE_LEN`].
pub fn bit_length(len: usize) -> Result<u64> {
    u64::try_from(len)
        .ok()
        .filter(|&len| len <= MAX_MESSAGE_LEN)
        .map(|len| len * 8)
        .ok_or_else(|| {
            debug!(len, "message too long for the 64-bit length field");
            Error::Overflow { len }
        })
}

/// Number of zero bytes between the terminator and the length field.
fn zero_fill_len(len: usize) -> usize {
    // Bit form: k = (448 - l - 8) mod 512, with l = 8 * len.
    let used = (len % BLOCK_LEN) + 1 + LENGTH_FIELD_LEN;
    (BLOCK_LEN - used % BLOCK_LEN) % BLOCK_LEN
}

/// Length in bytes of the padded form of a `len`-byte message.
pub fn padded_len(len: usize) -> Result<usize> {
    bit_length(len)?;
    len.checked_add(1 + LENGTH_FIELD_LEN)
        .and_then(|n| n.checked_add(zero_fill_len(len)))
        .ok_or(Error::Overflow { len })
}

/// Pads `message` to a whole number of 64-byte blocks.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let bits = bit_length(message.len())?;
    let total = padded_len(message.len())?;

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(message);
    padded.push(TERMINATOR);
    padded.resize(total - LENGTH_FIELD_LEN, 0);
    padded.extend_from_slice(&bits.to_be_bytes());

    if padded.len() % BLOCK_LEN != 0 {
        debug!(len = padded.len(), "padding produced a partial block");
        return Err(Error::Padding { len: padded.len() });
    }
    Ok(padded)
}
