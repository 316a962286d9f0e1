//! Permutation-based sampling without replacement
//!
//! Draws indices from a shuffled full-range array, guaranteeing each
//! index in `[0, size)` appears exactly once per pass before the
//! permutation is rebuilt.

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Simple xorshift64 PRNG for no_std compatibility
#[derive(Clone, Debug)]
struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x853c49e6748fea9b } else { seed },
        }
    }

    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate random usize in [0, bound)
    fn next_bounded(&mut self, bound: usize) -> usize {
        // Rejection sampling to eliminate modulo bias
        let bound = bound as u64;
        let threshold = bound.wrapping_neg() % bound;
        loop {
            let r = self.next();
            if r >= threshold {
                return (r % bound) as usize;
            }
        }
    }
}

/// Without-replacement index sampler over `[0, size)`
///
/// Maintains a Fisher-Yates-shuffled permutation of `0..size` and a
/// cursor into it. [`next`](Self::next) walks the permutation, so
/// every `size` consecutive draws (with no intervening resize or reset)
/// yield each index exactly once. When a pass is exhausted the sampler
/// reshuffles in place and starts a new pass; the first draw of the new
/// pass may repeat the last draw of the previous one, which is accepted
/// rather than prevented.
///
/// The returned values are intended as indices into a caller-owned
/// collection of `size` elements.
///
/// # Example
///
/// ```
/// use runstats::sampling::RandomSampler;
///
/// let mut sampler = RandomSampler::new(5);
///
/// let mut seen: Vec<usize> = (0..5).map(|_| sampler.next()).collect();
/// seen.sort_unstable();
///
/// // One full pass visits every index exactly once
/// assert_eq!(seen, vec![0, 1, 2, 3, 4]);
///
/// // The next draw starts a fresh shuffled pass
/// assert!(sampler.next() < 5);
/// ```
#[derive(Clone, Debug)]
pub struct RandomSampler {
    /// Shuffled permutation of `0..size`
    indices: Vec<usize>,
    /// Position of the next draw within the current pass
    cursor: usize,
    /// Random number generator
    rng: Xorshift64,
}

impl RandomSampler {
    /// Create a sampler over `[0, size)`
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`: a zero-length permutation cannot produce
    /// a next value.
    pub fn new(size: usize) -> Self {
        Self::with_seed(size, 0x12345678)
    }

    /// Create a sampler over `[0, size)` with an explicit seed
    ///
    /// Two samplers built with the same size and seed draw identical
    /// sequences (for reproducibility).
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn with_seed(size: usize, seed: u64) -> Self {
        assert!(size > 0, "size must be positive");

        let mut sampler = Self {
            indices: Vec::new(),
            cursor: 0,
            rng: Xorshift64::new(seed),
        };
        sampler.set_size(size);
        sampler
    }

    /// Draw the next index
    ///
    /// Always returns a value in `[0, size)`. On pass exhaustion the
    /// permutation is reshuffled in place and the first index of the
    /// new pass is returned.
    pub fn next(&mut self) -> usize {
        if self.cursor == self.indices.len() {
            self.reset();
        }
        let index = self.indices[self.cursor];
        self.cursor += 1;
        index
    }

    /// Start a new pass: reshuffle without changing the size
    pub fn reset(&mut self) {
        self.shuffle();
        self.cursor = 0;
    }

    /// Resize the index space, rebuilding the permutation
    ///
    /// Equivalent to constructing a fresh pass over `[0, size)`.
    ///
    /// # Panics
    ///
    /// Panics if `size == 0`.
    pub fn set_size(&mut self, size: usize) {
        assert!(size > 0, "size must be positive");

        self.indices.clear();
        self.indices.extend(0..size);
        self.reset();
    }

    /// Get the size of the index space
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// Fisher-Yates shuffle of the permutation
    fn shuffle(&mut self) {
        for i in (1..self.indices.len()).rev() {
            let j = self.rng.next_bounded(i + 1);
            self.indices.swap(i, j);
        }
    }
}
