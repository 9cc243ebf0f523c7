//! Deterministic random number generation for shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffle sequence
//! - **Serializable**: O(1) state capture and restore, so a mid-battle
//!   save preserves the exact shuffle stream
//! - **Injectable**: The battle system takes the RNG as a capability,
//!   never reaches for ambient randomness
//!
//! ## Usage
//!
//! ```
//! use deck_battle::core::CardRng;
//!
//! let mut rng = CardRng::new(42);
//! let mut deck = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut deck);
//!
//! // Same seed, same permutation
//! let mut rng2 = CardRng::new(42);
//! let mut deck2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut deck2);
//! assert_eq!(deck, deck2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG behind every shuffle and anti-repeat swap.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Production construction uses entropy; tests supply seeds.
#[derive(Clone, Debug)]
pub struct CardRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl CardRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG seeded from OS entropy.
    ///
    /// The drawn seed is retained so the state stays serializable.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> CardRngState {
        CardRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &CardRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for mid-battle saves.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
