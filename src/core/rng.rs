//! Dice: the randomness source for a match.
//!
//! ## Key Features
//!
//! - **Injected**: every match owns its die; nothing reads process-global state
//! - **Deterministic**: same seed produces an identical roll sequence
//! - **Scriptable**: `ScriptedDie` replays a fixed face sequence for tests
//!
//! ```
//! use pig_dice::core::{Die, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::config::DIE_FACES;

/// A six-sided die.
pub trait Die {
    /// Roll once, returning a face in `1..=6`.
    fn roll(&mut self) -> u8;
}

impl<D: Die + ?Sized> Die for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Seeded die backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a die with a seed drawn from the OS.
    ///
    /// The seed is still recorded so the match can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Die for GameRng {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

/// Die that replays a fixed sequence of faces, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    faces: Vec<u8>,
    cursor: usize,
}

impl ScriptedDie {
    /// Create a die that yields `faces` in order, forever.
    pub fn new(faces: Vec<u8>) -> Self {
        assert!(!faces.is_empty(), "Must script at least one face");
        assert!(
            faces.iter().all(|f| (1..=DIE_FACES).contains(f)),
            "Faces must be in 1..=6"
        );
        Self { faces, cursor: 0 }
    }

    /// Create a die that always shows `face`.
    pub fn always(face: u8) -> Self {
        Self::new(vec![face])
    }

    /// Number of rolls taken so far.
    #[must_use]
    pub fn rolls(&self) -> usize {
        self.cursor
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
