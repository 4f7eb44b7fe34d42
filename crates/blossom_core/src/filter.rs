//! Bloom filter over two streaming 64-bit hash engines.
//!
//! Space-efficient randomized set membership with one-sided error:
//! either an element is "probably" in the set or it is definitely not.
//! Enhanced double hashing derives the k bit positions from two engine
//! digests instead of k independent hash functions ("Less Hashing, Same
//! Performance", Kirsch & Mitzenmacher).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bits::BitVector;
use crate::double_hash::DoubleHash;
use crate::errors::Result;
use crate::hash::{Hash64, XxHash64};
use crate::murmur64::Murmur64;
use crate::sizing::{optimal_bit_vector_size, optimal_num_hash};

pub struct BloomFilter {
    h1: Box<dyn Hash64>,
    h2: Box<dyn Hash64>,
    bits: BitVector,
    n: u64,
    m: u64,
    k: u64,
}

/// Diagnostic snapshot of the filter parameters and occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInfo {
    pub n: u64,
    pub m: u64,
    pub k: u64,
    pub set_bits: u64,
}

impl BloomFilter {
    /// Sizes and allocates a filter for `n` expected elements at target
    /// false-positive probability `p`, using the default engine pair
    /// (xxh3 and murmur3-64). The filter is never resized afterwards.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        Self::with_engines(n, p, Box::new(XxHash64::new()), Box::new(Murmur64::new()))
    }

    /// Same sizing with caller-supplied engines. Any two sufficiently
    /// independent 64-bit sources satisfy the contract; correlated
    /// engines degrade the false-positive rate, nothing else.
    pub fn with_engines(
        n: u64,
        p: f64,
        h1: Box<dyn Hash64>,
        h2: Box<dyn Hash64>,
    ) -> Result<Self> {
        let m = optimal_bit_vector_size(n, p)?;
        let k = optimal_num_hash(m, n)?;
        Ok(Self { h1, h2, bits: BitVector::new(m), n, m, k })
    }

    /// Marks `data` as present. Repeated calls with identical data leave
    /// the observable state unchanged.
    pub fn set(&mut self, data: &[u8]) -> Result<()> {
        let dh = self.hash(data)?;
        for idx in dh.indices(self.k) {
            self.bits.set(idx);
        }
        Ok(())
    }

    /// Membership probe. False positives occur at roughly the configured
    /// probability, false negatives never. Short-circuits on the first
    /// unset bit.
    pub fn includes(&mut self, data: &[u8]) -> Result<bool> {
        let dh = self.hash(data)?;
        for idx in dh.indices(self.k) {
            if !self.bits.get(idx) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Occupancy-based estimate of the number of distinct elements
    /// inserted: `-(m/k) * ln(1 - ones/m)`. Accuracy degrades as the
    /// vector saturates.
    pub fn approximate_cardinality(&self) -> f64 {
        let ones = self.bits.count_ones() as f64;
        let m = self.m as f64;
        let k = self.k as f64;
        -(m / k) * (1.0 - ones / m).ln()
    }

    /// Bits currently set to one.
    pub fn set_bits(&self) -> u64 {
        self.bits.count_ones()
    }

    pub fn info(&self) -> FilterInfo {
        FilterInfo { n: self.n, m: self.m, k: self.k, set_bits: self.set_bits() }
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Drops every set bit. The only non-monotone mutation.
    pub fn clear(&mut self) {
        self.bits.clear();
    }

    /// Resets both engines, then digests `data` into each, leaving the
    /// two base hashes ready for index derivation.
    fn hash(&mut self, data: &[u8]) -> Result<DoubleHash> {
        self.h1.reset();
        self.h2.reset();
        self.h1.write(data)?;
        self.h2.write(data)?;
        Ok(DoubleHash::new(self.h1.sum64(), self.h2.sum64(), self.m))
    }
}

impl fmt::Display for BloomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BloomFilter {{ n: {}, m: {}, k: {}, set_bits: {} }}",
            self.n,
            self.m,
            self.k,
            self.set_bits()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validation() {
        assert!(BloomFilter::new(0, 0.01).is_err());
        assert!(BloomFilter::new(100, 0.0).is_err());
        assert!(BloomFilter::new(100, -0.2).is_err());
        assert!(BloomFilter::new(100, 1.0).is_err());
    }

    #[test]
    fn sizes_from_reference_tables() {
        let bf = BloomFilter::new(10, 0.04).unwrap();
        let info = bf.info();
        assert_eq!(info.n, 10);
        assert_eq!(info.m, 67);
        assert_eq!(info.k, 5);
        assert_eq!(info.set_bits, 0);
    }

    #[test]
    fn set_then_includes() {
        let mut bf = BloomFilter::new(100, 0.01).unwrap();
        bf.set(b"alpha").unwrap();
        bf.set(b"beta").unwrap();
        assert!(bf.includes(b"alpha").unwrap());
        assert!(bf.includes(b"beta").unwrap());
        assert!(!bf.includes(b"gamma").unwrap());
    }

    #[test]
    fn set_is_idempotent() {
        let mut bf = BloomFilter::new(50, 0.01).unwrap();
        bf.set(b"alpha").unwrap();
        let after_first = bf.set_bits();
        assert!(after_first > 0);
        bf.set(b"alpha").unwrap();
        assert_eq!(bf.set_bits(), after_first);
    }

    #[test]
    fn clear_empties_the_filter() {
        let mut bf = BloomFilter::new(50, 0.01).unwrap();
        bf.set(b"alpha").unwrap();
        assert!(bf.set_bits() > 0);
        bf.clear();
        assert_eq!(bf.set_bits(), 0);
        assert!(!bf.includes(b"alpha").unwrap());
    }

    #[test]
    fn empty_filter_estimates_zero() {
        let bf = BloomFilter::new(100, 0.01).unwrap();
        assert_eq!(bf.approximate_cardinality(), 0.0);
    }

    #[test]
    fn describe_reports_parameters() {
        let mut bf = BloomFilter::new(10, 0.04).unwrap();
        bf.set(b"alpha").unwrap();
        let s = bf.describe();
        assert!(s.contains("n: 10"));
        assert!(s.contains("m: 67"));
        assert!(s.contains("k: 5"));
        assert!(s.contains(&format!("set_bits: {}", bf.set_bits())));
    }

    #[test]
    fn custom_engine_pair() {
        // two differently-seeded murmur engines also satisfy the contract
        let mut bf = BloomFilter::with_engines(
            100,
            0.01,
            Box::new(Murmur64::with_seed(0x9e3779b97f4a7c15)),
            Box::new(Murmur64::new()),
        )
        .unwrap();
        bf.set(b"alpha").unwrap();
        assert!(bf.includes(b"alpha").unwrap());
        assert!(!bf.includes(b"delta").unwrap());
    }
}
