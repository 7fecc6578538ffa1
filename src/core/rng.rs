//! Deterministic random number generation.
//!
//! Every randomized operation in the engine — the weighted burn draw and
//! deck seeding — takes a `&mut GameRng` rather than reaching for ambient
//! randomness. Gameplay needs no seeding guarantee, but tests do: a seeded
//! source lets distribution tests run over thousands of trials and lets
//! regression tests replay an exact scenario.
//!
//! ```
//! use arith_cards::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let draw = rng.gen_below(10);
//! assert!(draw < 10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG over ChaCha8.
///
/// ChaCha8 keeps the stream fast while its word-position counter makes
/// state capture O(1) regardless of how many numbers were drawn.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Uniform integer in `[0, bound)`.
    ///
    /// This is the draw shape the weighted elimination walk consumes.
    /// Panics if `bound` is zero, as an empty range has no uniform draw.
    pub fn gen_below(&mut self, bound: u32) -> u32 {
        self.inner.gen_range(0..bound)
    }

    /// Uniform `usize` in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Capture the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
