//! The SHA-256 compression function (FIPS 180-4 §6.2.2).
//!
//! All word arithmetic is on `u32` with explicit `wrapping_add`, so every
//! sum is reduced modulo 2^32.

use super::block::Block;
use super::{Digest, DIGEST_LEN};

/// Initial hash value: fractional parts of the square roots of the first
/// eight primes.
pub const H0: [u32; 8] = [
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants: fractional parts of the cube roots of the first 64 primes.
pub const K: [u32; 64] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

const SCHEDULE_LEN: usize = 64;

#[inline]
pub(crate) fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

#[inline]
pub(crate) fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// Σ0
#[inline]
pub(crate) fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1
#[inline]
pub(crate) fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// σ0
#[inline]
pub(crate) fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1
#[inline]
pub(crate) fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expands one block into the 64-word message schedule.
pub(crate) fn message_schedule(block: &Block) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    for (w, word) in w[..16].iter_mut().zip(block.chunks_exact(4)) {
        *w = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
    }
    for t in 16..SCHEDULE_LEN {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

/// The eight-word running hash value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashState([u32; 8]);

impl Default for HashState {
    fn default() -> Self {
        Self(H0)
    }
}

impl HashState {
    pub fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Folds one block into the state.
    pub fn update(&mut self, block: &Block) {
        let w = message_schedule(block);
        let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = self.0;

        for (&k, &w) in K.iter().zip(w.iter()) {
            let t1 = h
                .wrapping_add(big_sigma1(e))
                .wrapping_add(ch(e, f, g))
                .wrapping_add(k)
                .wrapping_add(w);
            let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

            h = g;
            g = f;
            f = e;
            e = d.wrapping_add(t1);
            d = c;
            c = b;
            b = a;
            a = t1.wrapping_add(t2);
        }

        for (word, v) in self.0.iter_mut().zip([a, b, c, d, e, f, g, h]) {
            *word = word.wrapping_add(v);
        }
    }

    /// Big-endian serialization of the eight words.
    pub fn to_digest(&self) -> Digest {
        let mut digest = [0u8; DIGEST_LEN];
        for (out, word) in digest.chunks_exact_mut(4).zip(self.0.iter()) {
            out.copy_from_slice(&word.to_be_bytes());
        }
        Digest(digest)
    }
}

/// Runs every block, in order, through the compression function starting
/// from [`H0`] and returns the resulting digest.
pub fn compress<'a, I>(blocks: I) -> Digest
where
    I: IntoIterator<Item = &'a Block>,
{
    let mut state = HashState::default();
    for block in blocks {
        state.update(block);
    }
    state.to_digest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::sha256::{pad, parse};

    fn abc_block() -> Block {
        let padded = pad(b"abc").unwrap();
        padded.as_slice().try_into().unwrap()
    }

    #[test]
    fn wrapping_near_u32_max() {
        let x = 0xffff_ffffu32;
        assert_eq!(x.wrapping_add(1), 0);
        assert_eq!(x.wrapping_add(x), 0xffff_fffe);

        // A schedule word whose four summands all sit near u32::MAX.
        let mut block = [0xffu8; 64];
        block[..4].copy_from_slice(&0xffff_fff0u32.to_be_bytes());
        let w = message_schedule(&block);
        let expected = (small_sigma1(w[14]) as u64
            + w[9] as u64
            + small_sigma0(w[1]) as u64
            + w[0] as u64) as u32;
        assert_eq!(w[16], expected);
    }

    #[test]
    fn logical_functions() {
        assert_eq!(ch(0xffff_ffff, 0x1234_5678, 0x9abc_def0), 0x1234_5678);
        assert_eq!(ch(0, 0x1234_5678, 0x9abc_def0), 0x9abc_def0);
        assert_eq!(maj(0xffff_0000, 0xff00_ff00, 0xf0f0_f0f0), 0xfff0_f000);
        // Right shifts in the small sigmas are logical.
        assert_eq!(small_sigma0(0x8000_0000), 0x0100_0000 ^ 0x0000_2000 ^ 0x1000_0000);
        assert_eq!(small_sigma1(0x8000_0000), 0x0000_4000 ^ 0x0000_1000 ^ 0x0020_0000);
        assert_eq!(big_sigma0(1), 0x4000_0000 ^ 0x0008_0000 ^ 0x0000_0400);
        assert_eq!(big_sigma1(1), 0x0400_0000 ^ 0x0020_0000 ^ 0x0000_0080);
    }

    #[test]
    fn abc_schedule() {
        // FIPS 180-2 Appendix B.1 intermediate values.
        let w = message_schedule(&abc_block());
        assert_eq!(w[0], 0x61626380);
        assert_eq!(w[15], 0x00000018);
        assert_eq!(w[16], 0x61626380);
        assert_eq!(w[17], 0x000f0000);
    }

    #[test]
    fn abc_state() {
        let mut state = HashState::default();
        state.update(&abc_block());
        assert_eq!(
            state.words(),
            &[
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
    }

    #[test]
    fn no_blocks_yields_initial_value() {
        let digest = compress(std::iter::empty());
        assert_eq!(
            digest.to_hex(),
            "6a09e667bb67ae853c6ef372a54ff53a510e527f9b05688c1f83d9ab5be0cd19"
        );
    }

    #[test]
    fn state_accumulates_across_blocks() {
        let padded = pad(&[0x61; 100]).unwrap();
        let blocks: Vec<&Block> = parse(&padded).unwrap().collect();

        let mut only_second = HashState::default();
        only_second.update(blocks[1]);
        let chained = compress(blocks.iter().copied());
        assert_ne!(chained, only_second.to_digest());
    }
}
