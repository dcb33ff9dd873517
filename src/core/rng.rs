//! Deterministic random number generation.
//!
//! One seed determines a whole game: the setup stream deals kingdom piles and
//! seats, and every deck and bot owns a fork of it.
//!
//! ```
//! use kingdom_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut deck_rng = rng.fork();
//!
//! // Forks are deterministic: the same seed forks the same way.
//! let mut again = GameRng::new(42).fork();
//! assert_eq!(deck_rng.roll(100), again.roll(100));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic, forkable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent stream.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Uniform index in `0..n`.
    ///
    /// Panics if `n` is zero.
    pub fn roll(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot roll a zero-sided die");
        self.inner.gen_range(0..n)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// `n` distinct elements of `items` in random order (fewer if `items` is short).
    pub fn deal<T: Clone>(&mut self, n: usize, items: &[T]) -> Vec<T> {
        items
            .choose_multiple(&mut self.inner, n.min(items.len()))
            .cloned()
            .collect()
    }
}
