//! Optimal Bloom filter sizing.

use std::f64::consts::LN_2;

use crate::errors::{BlossomError, Result};

/// Optimal bit-vector size for `n` expected elements at false-positive
/// probability `p`: `ceil(-(n * ln p) / (ln 2)^2)`.
pub fn optimal_bit_vector_size(n: u64, p: f64) -> Result<u64> {
    if n == 0 {
        return Err(BlossomError::InvalidSetSize(n));
    }
    if p <= 0.0 || p >= 1.0 {
        return Err(BlossomError::InvalidFalsePosProb(p));
    }
    Ok((-((n as f64) * p.ln()) / (LN_2 * LN_2)).ceil() as u64)
}

/// Optimal number of derived hash positions for bit-vector size `m` and
/// `n` expected elements.
///
/// `m / n` is truncating integer division, applied before the float
/// multiply. Float division here changes k for some loads.
pub fn optimal_num_hash(m: u64, n: u64) -> Result<u64> {
    if n == 0 {
        return Err(BlossomError::InvalidSetSize(n));
    }
    let k = (((m / n) as f64) * LN_2).ceil() as u64;
    Ok(k.max(1))
}
