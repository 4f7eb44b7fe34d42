//! MurmurHash3, x64 128-bit variant.
//!
//! Non-cryptographic hash suitable for general hash-based lookup. Input
//! is digested as 16-byte little-endian blocks into two 64-bit
//! accumulator words; the 0-15 byte tail folds in byte-wise, and the
//! 64-bit avalanche finalizer runs over each word.

use crate::consts::{DIGEST128_BYTES, MURMUR_BLOCK_BYTES};
use crate::errors::Result;
use crate::hash::Hash128;

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;

/// Murmur3 128-bit engine. State is two 64-bit words, both initialized
/// to the seed.
pub struct Murmur128 {
    h: [u64; 2],
    seed: u64,
}

impl Murmur128 {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { h: [seed, seed], seed }
    }

    /// Digest bytes, most significant word first, each word big-endian.
    pub fn sum_bytes(&self) -> [u8; DIGEST128_BYTES] {
        let mut out = [0u8; DIGEST128_BYTES];
        out[..8].copy_from_slice(&self.h[0].to_be_bytes());
        out[8..].copy_from_slice(&self.h[1].to_be_bytes());
        out
    }

    /// Inter-block mix over all full 16-byte blocks; returns the
    /// remaining tail bytes.
    fn mix_blocks<'d>(&mut self, data: &'d [u8]) -> &'d [u8] {
        let mut blocks = data.chunks_exact(MURMUR_BLOCK_BYTES);
        for block in blocks.by_ref() {
            let mut k1 = u64::from_le_bytes(block[..8].try_into().unwrap());
            let mut k2 = u64::from_le_bytes(block[8..].try_into().unwrap());

            k1 = k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
            self.h[0] ^= k1;
            self.h[0] = self.h[0].rotate_left(27).wrapping_add(self.h[1]);
            self.h[0] = self.h[0].wrapping_mul(5).wrapping_add(0x52dce729);

            k2 = k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
            self.h[1] ^= k2;
            self.h[1] = self.h[1].rotate_left(31).wrapping_add(self.h[0]);
            self.h[1] = self.h[1].wrapping_mul(5).wrapping_add(0x38495ab5);
        }
        blocks.remainder()
    }

    /// Tail bytes fold into the matching accumulator word only; the
    /// inter-block add/mul step does not run here.
    fn mix_tail(&mut self, tail: &[u8]) {
        if tail.len() > 8 {
            let mut k2 = 0u64;
            for (i, &b) in tail[8..].iter().enumerate() {
                k2 ^= (b as u64) << (8 * i);
            }
            k2 = k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1);
            self.h[1] ^= k2;
        }
        if !tail.is_empty() {
            let mut k1 = 0u64;
            for (i, &b) in tail.iter().take(8).enumerate() {
                k1 ^= (b as u64) << (8 * i);
            }
            k1 = k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2);
            self.h[0] ^= k1;
        }
    }

    fn finalize(&mut self, len: usize) {
        self.h[0] ^= len as u64;
        self.h[1] ^= len as u64;

        self.h[0] = self.h[0].wrapping_add(self.h[1]);
        self.h[1] = self.h[1].wrapping_add(self.h[0]);

        self.h[0] = fmix64(self.h[0]);
        self.h[1] = fmix64(self.h[1]);

        self.h[0] = self.h[0].wrapping_add(self.h[1]);
        self.h[1] = self.h[1].wrapping_add(self.h[0]);
    }
}

impl Default for Murmur128 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hash128 for Murmur128 {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let tail = self.mix_blocks(data);
        self.mix_tail(tail);
        self.finalize(data.len());
        Ok(())
    }

    fn sum128(&self) -> (u64, u64) {
        (self.h[0], self.h[1])
    }

    fn reset(&mut self) {
        self.h = [self.seed, self.seed];
    }
}

/// 64-bit avalanche finalizer: small input differences spread across all
/// output bits.
fn fmix64(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51afd7ed558ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ceb9fe1a85ec53);
    x ^= x >> 33;
    x
}
