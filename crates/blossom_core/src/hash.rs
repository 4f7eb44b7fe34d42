//! Streaming hash interfaces plus the xxh3-backed 64-bit engine.

use xxhash_rust::xxh3::Xxh3;

use crate::errors::Result;

/// Incremental 64-bit hash: write bytes, query the digest, reset to the
/// seed state. Writing a second input without an intervening `reset`
/// keeps accumulating over the previous state.
pub trait Hash64 {
    fn write(&mut self, data: &[u8]) -> Result<()>;
    fn sum64(&self) -> u64;
    fn reset(&mut self);
}

/// Incremental 128-bit hash; the digest is exposed as two 64-bit words.
pub trait Hash128 {
    fn write(&mut self, data: &[u8]) -> Result<()>;
    fn sum128(&self) -> (u64, u64);
    fn reset(&mut self);
}

/// xxh3-backed `Hash64`, the filter's first base engine.
pub struct XxHash64 {
    inner: Xxh3,
    seed: u64,
}

impl XxHash64 {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { inner: Xxh3::with_seed(seed), seed }
    }
}

impl Default for XxHash64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hash64 for XxHash64 {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data);
        Ok(())
    }

    fn sum64(&self) -> u64 {
        self.inner.digest()
    }

    fn reset(&mut self) {
        self.inner = Xxh3::with_seed(self.seed);
    }
}
