pub mod bits;
pub mod consts;
pub mod double_hash;
pub mod errors;
pub mod filter;
pub mod hash;
pub mod murmur128;
pub mod murmur64;
pub mod sizing;

pub use bits::BitVector;
pub use consts::DEFAULT_FALSE_POS_PROB;
pub use double_hash::DoubleHash;
pub use errors::{BlossomError, Result};
pub use filter::{BloomFilter, FilterInfo};
pub use hash::{Hash128, Hash64, XxHash64};
pub use murmur128::Murmur128;
pub use murmur64::Murmur64;
pub use sizing::{optimal_bit_vector_size, optimal_num_hash};
