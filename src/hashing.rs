//! Per-row keyed hashing for the sketch.
//!
//! Each row owns an independent seahash seed quadruple, derived
//! deterministically from a master seed. That gives every row a full-range
//! keyed hash of the 32-byte k-mer value, independent across rows and
//! reproducible for a given master seed.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// One seed quadruple per sketch row.
#[derive(Debug, Clone)]
pub struct RowHasher {
    seeds: Vec<[u64; 4]>,
}

impl RowHasher {
    /// Derives `depth` seed quadruples from `master`.
    #[must_use]
    pub fn from_seed(depth: usize, master: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(master);
        let seeds = (0..depth)
            .map(|_| [rng.gen(), rng.gen(), rng.gen(), rng.gen()])
            .collect();
        Self { seeds }
    }

    /// Number of rows this hasher addresses.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.seeds.len()
    }

    /// Maps `key` to a column in `[0, width)` for the given row.
    #[inline]
    #[must_use]
    pub fn bucket(&self, row: usize, key: &[u8], width: usize) -> usize {
        let [a, b, c, d] = self.seeds[row];
        #[allow(clippy::cast_possible_truncation)]
        let col = (seahash::hash_seeded(key, a, b, c, d) % width as u64) as usize;
        col
    }
}
