//! SHA-256 hashing implementation (FIPS 180-4).
//!
//! The digest is computed in three stages: [`pad`] the message, [`parse`] the
//! padded bytes into 512-bit blocks, and [`compress`] the blocks into the
//! final hash value.
//!
//! # Example
//! ```rust
//! use sha256_core::primitives::sha256::sha256;
//!
//! let digest = sha256(b"hello world").unwrap();
//! assert_eq!(digest.to_hex(), "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9");
//! ```

use std::fmt;

use tracing::trace;

use crate::error::Result;

mod block;
mod compress;
mod padder;

pub use block::{parse, Block, Blocks};
pub use compress::{compress, HashState, H0, K};
pub use padder::{bit_length, pad, padded_len};

const BLOCK_LEN_BITS: usize = 512;
pub const BLOCK_LEN: usize = BLOCK_LEN_BITS / 8;
pub const DIGEST_LEN: usize = 256 / 8;
/// Size of the trailing big-endian bit-length field.
pub const LENGTH_FIELD_LEN: usize = 8;
/// Longest message, in bytes, whose bit-length fits the length field.
pub const MAX_MESSAGE_LEN: u64 = u64::MAX / 8;

/// Computes the SHA-256 digest of `message`.
///
/// Fails only when the message is longer than [`MAX_MESSAGE_LEN`] bytes.
pub fn sha256(message: &[u8]) -> Result<Digest> {
    let padded = pad(message)?;
    let blocks = parse(&padded)?;
    trace!(len = message.len(), blocks = blocks.len(), "sha256");
    Ok(compress(blocks))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest(pub(crate) [u8; DIGEST_LEN]);

impl Digest {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> std::result::Result<Self, hex::FromHexError> {
        let mut digest = [0; DIGEST_LEN];
        hex::decode_to_slice(s, &mut digest)?;
        Ok(Digest(digest))
    }

    pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}
