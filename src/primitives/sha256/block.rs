//! Splitting a padded message into 512-bit blocks.

use std::iter::FusedIterator;
use std::slice::ChunksExact;

use tracing::debug;

use super::BLOCK_LEN;
use crate::error::{Error, Result};

/// One 512-bit block of a padded message.
pub type Block = [u8; BLOCK_LEN];

/// In-order, borrowed view of the blocks of a padded message.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        // `parse` rejected any remainder, so every chunk converts.
        self.chunks.next().and_then(|chunk| chunk.try_into().ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}

/// Splits `padded` into consecutive 64-byte blocks.
///
/// `padded` must be the output of [`pad`](super::pad); anything that is not a
/// whole number of blocks fails with [`Error::InvalidBlockLength`].
pub fn parse(padded: &[u8]) -> Result<Blocks<'_>> {
    if padded.len() % BLOCK_LEN != 0 {
        debug!(len = padded.len(), "padded input is not block aligned");
        return Err(Error::InvalidBlockLength { len: padded.len() });
    }
    Ok(Blocks {
        chunks: padded.chunks_exact(BLOCK_LEN),
    })
}
