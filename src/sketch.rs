//! Count-min sketch over byte-wide log counters.
//!
//! A `width x depth` matrix of single-byte counters with one keyed hash per
//! row. Estimates read the minimum decoded value across rows; updates touch
//! only the rows currently sitting at that minimum (conservative update,
//! which roughly halves overestimation), then each touched cell takes the
//! probabilistic log-counter step.

use rand::{rngs::StdRng, SeedableRng};

use crate::{error::SketchmerError, hashing::RowHasher, logcount};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Decorrelates the increment RNG stream from the row-hash seed stream.
const RNG_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;

/// An approximate counter of byte-string keys.
///
/// The matrix and hash seeds are fixed at construction and released as one
/// unit on drop. `increment` is a read-modify-write over plain bytes (and
/// advances the owned RNG), so mutation takes `&mut self`; sharing a sketch
/// across threads is read-only by construction.
#[derive(Debug)]
pub struct Sketch {
    width: usize,
    counters: Vec<u8>,
    hasher: RowHasher,
    rng: StdRng,
}

impl Sketch {
    /// Creates an empty sketch seeded from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns a parameter error if either dimension is zero, or an
    /// allocation error if the counter matrix does not fit in memory.
    pub fn new(width: usize, depth: usize) -> Result<Self, SketchmerError> {
        Self::with_seed(width, depth, rand::random())
    }

    /// Creates an empty sketch with a fixed master seed.
    ///
    /// The seed determines both the per-row hash placement and the
    /// probabilistic increment decisions, so two sketches built with the
    /// same seed and fed the same input end up byte-identical.
    ///
    /// # Errors
    ///
    /// Returns a parameter error if either dimension is zero, or an
    /// allocation error if the counter matrix does not fit in memory.
    pub fn with_seed(width: usize, depth: usize, seed: u64) -> Result<Self, SketchmerError> {
        if width == 0 {
            return Err(SketchmerError::ZeroWidth);
        }
        if depth == 0 {
            return Err(SketchmerError::ZeroDepth);
        }
        let cells = width
            .checked_mul(depth)
            .ok_or(SketchmerError::Allocation { bytes: usize::MAX })?;
        let mut counters = Vec::new();
        counters
            .try_reserve_exact(cells)
            .map_err(|_| SketchmerError::Allocation { bytes: cells })?;
        counters.resize(cells, 0);

        #[cfg(feature = "tracing")]
        debug!(width, depth, seed, "sketch allocated");

        Ok(Self {
            width,
            counters,
            hasher: RowHasher::from_seed(depth, seed),
            rng: StdRng::seed_from_u64(seed ^ RNG_STREAM),
        })
    }

    /// Columns per row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of hashed rows.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.hasher.depth()
    }

    #[inline]
    fn cell(&self, row: usize, key: &[u8]) -> usize {
        row * self.width + self.hasher.bucket(row, key, self.width)
    }

    /// Records one observation of `key`.
    pub fn increment(&mut self, key: &[u8]) {
        self.increment_by(key, 1);
    }

    /// Records `amount` observations of `key`.
    ///
    /// Each observation finds the minimum decoded value across the key's
    /// row cells and attempts the log-counter step on exactly those cells;
    /// rows already above the minimum are left alone.
    pub fn increment_by(&mut self, key: &[u8], amount: u64) {
        for _ in 0..amount {
            let floor = self.estimate(key);
            for row in 0..self.depth() {
                let idx = self.cell(row, key);
                let code = self.counters[idx];
                if logcount::decode(code) == floor {
                    self.counters[idx] = logcount::increment(code, &mut self.rng);
                }
            }
        }
    }

    /// Point estimate for `key`: the minimum decoded value across rows.
    #[must_use]
    pub fn estimate(&self, key: &[u8]) -> u64 {
        (0..self.depth())
            .map(|row| logcount::decode(self.counters[self.cell(row, key)]))
            .min()
            .unwrap_or(0)
    }

    #[cfg(test)]
    pub(crate) fn counters(&self) -> &[u8] {
        &self.counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(Sketch::new(0, 10).unwrap_err(), SketchmerError::ZeroWidth);
    }

    #[test]
    fn zero_depth_is_rejected() {
        assert_eq!(Sketch::new(1024, 0).unwrap_err(), SketchmerError::ZeroDepth);
    }

    #[test]
    fn fresh_sketch_estimates_zero() {
        let sketch = Sketch::with_seed(1024, 10, 777).unwrap();
        assert_eq!(sketch.estimate(b"anything"), 0);
        assert!(sketch.counters().iter().all(|&c| c == 0));
    }

    #[test]
    fn single_key_counts_exactly_in_small_regime() {
        // One key cannot collide with itself, and counts below the exact
        // cutoff step deterministically.
        let mut sketch = Sketch::with_seed(1024, 10, 777).unwrap();
        for n in 1..=u64::from(logcount::EXACT_MAX) {
            sketch.increment(b"GATTACA");
            assert_eq!(sketch.estimate(b"GATTACA"), n);
        }
    }

    #[test]
    fn increment_by_matches_repeated_increment() {
        let mut a = Sketch::with_seed(512, 6, 99).unwrap();
        let mut b = Sketch::with_seed(512, 6, 99).unwrap();
        a.increment_by(b"key", 20);
        for _ in 0..20 {
            b.increment(b"key");
        }
        assert_eq!(a.estimate(b"key"), b.estimate(b"key"));
        assert_eq!(a.counters(), b.counters());
    }

    #[test]
    fn counters_never_decrease() {
        let mut sketch = Sketch::with_seed(64, 4, 5).unwrap();
        let mut previous = sketch.counters().to_vec();
        for i in 0u32..200 {
            sketch.increment(&i.to_le_bytes());
            let current = sketch.counters();
            assert!(previous.iter().zip(current).all(|(&p, &c)| c >= p));
            previous = current.to_vec();
        }
    }

    #[test]
    fn distinct_keys_do_not_underestimate() {
        let mut sketch = Sketch::with_seed(4096, 8, 321).unwrap();
        for i in 0u32..100 {
            sketch.increment_by(&i.to_le_bytes(), u64::from(i % 10) + 1);
        }
        for i in 0u32..100 {
            assert!(sketch.estimate(&i.to_le_bytes()) >= u64::from(i % 10) + 1);
        }
    }

    #[test]
    fn same_seed_reproduces_state() {
        let mut a = Sketch::with_seed(256, 4, 2024).unwrap();
        let mut b = Sketch::with_seed(256, 4, 2024).unwrap();
        for i in 0u32..500 {
            a.increment(&i.to_le_bytes());
            b.increment(&i.to_le_bytes());
        }
        assert_eq!(a.counters(), b.counters());
    }

    #[test]
    fn dimensions_are_reported() {
        let sketch = Sketch::with_seed(40, 40, 0).unwrap();
        assert_eq!(sketch.width(), 40);
        assert_eq!(sketch.depth(), 40);
    }
}
