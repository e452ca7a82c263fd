//! Concrete dice sources.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{DiceSource, FACES};

/// Dice backed by a random number generator.
#[derive(Debug, Clone)]
pub struct RandomDice<R = StdRng> {
    rng: R,
}

impl RandomDice<StdRng> {
    /// Dice seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Deterministic dice for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomDice<R> {
    /// Wrap an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consume the dice and return the underlying RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> DiceSource for RandomDice<R> {
    fn roll_die(&mut self) -> u32 {
        self.rng.random_range(1..=FACES)
    }

    fn flip_coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}

/// Dice that replay a fixed script of faces, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create dice that return `faces` in order.
    ///
    /// # Panics
    ///
    /// Panics if `faces` is empty or contains a value outside `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u32>) -> Self {
        let faces: Vec<u32> = faces.into_iter().collect();
        assert!(!faces.is_empty(), "scripted dice need at least one face");
        assert!(
            faces.iter().all(|f| (1..=FACES).contains(f)),
            "scripted faces must be in 1..={FACES}"
        );
        Self { faces, cursor: 0 }
    }

    /// How many faces have been handed out so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self) -> u32 {
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face
    }
}
