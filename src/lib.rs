//! Reference SHA-256 (FIPS 180-4) over complete in-memory messages.
//!
//! ```rust
//! let digest = sha256_core::sha256(b"abc").unwrap();
//! assert_eq!(digest.to_hex(), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
//! ```
//!
//! Messages longer than [`MAX_MESSAGE_LEN`] bytes are rejected with
//! [`Error::Overflow`]. The implementation is not constant-time.

pub mod error;
pub mod primitives;

pub use error::{Error, Result};
pub use primitives::sha256::{sha256, Digest, BLOCK_LEN, DIGEST_LEN, MAX_MESSAGE_LEN};
