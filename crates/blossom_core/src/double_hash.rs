//! Enhanced double hashing (the Kirsch-Mitzenmacher construction with a
//! cubic term).
//!
//! Two base hashes stand in for k independent functions:
//! `index(i) = (a + i*b + i^3) mod m`. The cubic term breaks the
//! arithmetic-progression correlation plain double hashing leaves
//! between derived positions.

#[derive(Clone, Copy, Debug)]
pub struct DoubleHash {
    a: u64,
    b: u64,
    m: u64,
}

impl DoubleHash {
    /// `a` and `b` are the two base 64-bit hashes, `m` the bit-vector
    /// length. `m` must be positive.
    pub fn new(a: u64, b: u64, m: u64) -> Self {
        debug_assert!(m > 0);
        Self { a, b, m }
    }

    /// Bit position for derived hash `i`. Intermediate arithmetic wraps
    /// in u64; only the final modulo matters.
    pub fn index(&self, i: u64) -> u64 {
        let cube = i.wrapping_mul(i).wrapping_mul(i);
        self.a
            .wrapping_add(i.wrapping_mul(self.b))
            .wrapping_add(cube)
            % self.m
    }

    /// Positions for `i` in `0..k`, by value so the caller can mutate
    /// its bit storage while consuming them.
    pub fn indices(self, k: u64) -> impl Iterator<Item = u64> {
        (0..k).map(move |i| self.index(i))
    }
}
