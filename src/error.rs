use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of the digest pipeline.
///
/// `Overflow` is the only one caused by the caller's input. The other two mean
/// the padder or parser broke its own postcondition and should never surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The message bit-length does not fit the 64-bit length field.
    #[error("message of {len} bytes is too long: its bit-length does not fit in 64 bits")]
    Overflow { len: usize },

    #[error("padded message is {len} bytes, not a multiple of 64")]
    Padding { len: usize },

    #[error("cannot split {len} bytes into 64-byte blocks")]
    InvalidBlockLength { len: usize },
}
