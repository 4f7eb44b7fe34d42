// crates/blossom_core/src/consts.rs

use core::mem::size_of;

/// Default false-positive probability (1%) for filters built without an
/// explicit target.
pub const DEFAULT_FALSE_POS_PROB: f64 = 0.01;

/// Murmur3 x64 128-bit block width in bytes.
pub const MURMUR_BLOCK_BYTES: usize = 16;

/// Serialized width of a 128-bit digest.
pub const DIGEST128_BYTES: usize = 16;

const _: () = { assert!(MURMUR_BLOCK_BYTES == size_of::<[u64; 2]>()); };
