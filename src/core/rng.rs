//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical dice and shuffles
//! - **Injected**: Every transition that needs entropy takes a `&mut GameRng`,
//!   so games never share a process-wide generator
//! - **Serializable**: O(1) state capture and restore, so a persisted game
//!   resumes its entropy stream exactly where it left off
//!
//! ## Usage
//!
//! ```
//! use farkle_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let die = rng.roll_die();
//! assert!((1..=6).contains(&die));
//!
//! // Same seed, same sequence
//! let mut replay = GameRng::new(42);
//! assert_eq!(replay.roll_die(), die);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// Deterministic RNG for dice rolls and deck shuffles.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
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

    /// Roll a single die, returning a face in `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    /// Roll `count` dice.
    pub fn roll_dice(&mut self, count: usize) -> Vec<u8> {
        (0..count).map(|_| self.roll_die()).collect()
    }

    /// Generate a random `u32` (used for short game identifiers).
    pub fn gen_u32(&mut self) -> u32 {
        self.inner.gen()
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
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
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1 = rng1.roll_dice(20);
        let seq2 = rng2.roll_dice(20);

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_roll_die_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let face = rng.roll_die();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_roll_dice_count() {
        let mut rng = GameRng::new(7);
        assert_eq!(rng.roll_dice(0).len(), 0);
        assert_eq!(rng.roll_dice(6).len(), 6);
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.roll_die();
        }

        let state = rng.state();
        let expected = rng.roll_dice(10);

        let mut restored = GameRng::from_state(&state);
        let actual = restored.roll_dice(10);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
