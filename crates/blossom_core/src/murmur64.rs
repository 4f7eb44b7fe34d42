//! 64-bit view over the 128-bit Murmur3 engine.
//!
//! Murmur3 has no native 64-bit variant; this adapter runs the 128-bit
//! pipeline and exposes only the most significant digest word.

use crate::errors::Result;
use crate::hash::{Hash128, Hash64};
use crate::murmur128::Murmur128;

pub struct Murmur64 {
    inner: Murmur128,
}

impl Murmur64 {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { inner: Murmur128::with_seed(seed) }
    }

    /// Digest in big-endian byte order.
    pub fn sum_bytes(&self) -> [u8; 8] {
        self.sum64().to_be_bytes()
    }
}

impl Default for Murmur64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hash64 for Murmur64 {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner.write(data)
    }

    fn sum64(&self) -> u64 {
        self.inner.sum128().0
    }

    fn reset(&mut self) {
        self.inner.reset()
    }
}
