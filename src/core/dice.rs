//! Two six-sided dice.
//!
//! `DiceSource` is the seam the session rolls through. `Dice` draws from a
//! seeded `GameRng`; `ScriptedDice` replays fixed rolls so turn sequences can
//! be tested exactly.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Result of rolling two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub die1: u8,
    pub die2: u8,
}

impl DiceRoll {
    /// Build a roll from two faces.
    ///
    /// Panics if a face is outside `1..=6`.
    #[must_use]
    pub fn new(die1: u8, die2: u8) -> Self {
        assert!((1..=6).contains(&die1), "die face out of range: {die1}");
        assert!((1..=6).contains(&die2), "die face out of range: {die2}");
        Self { die1, die2 }
    }

    #[must_use]
    pub fn total(self) -> u8 {
        self.die1 + self.die2
    }

    #[must_use]
    pub fn is_double(self) -> bool {
        self.die1 == self.die2
    }
}

/// Something that produces dice rolls.
pub trait DiceSource: Send {
    fn roll(&mut self) -> DiceRoll;

    /// Restart the stream for a new game on `seed`. Sources that do not
    /// derive from the seed keep their state.
    fn reseed(&mut self, _seed: u64) {}
}

/// Fair dice backed by a deterministic RNG stream.
#[derive(Clone, Debug)]
pub struct Dice {
    rng: GameRng,
}

impl Dice {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Dice on the `"dice"` stream of a session seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(GameRng::new(seed).for_context("dice"))
    }
}

impl DiceSource for Dice {
    fn roll(&mut self) -> DiceRoll {
        DiceRoll::new(self.rng.roll_die(), self.rng.roll_die())
    }

    fn reseed(&mut self, seed: u64) {
        *self = Self::from_seed(seed);
    }
}

/// Dice that return a predetermined sequence of rolls.
///
/// Panics when the script runs out; a test that rolls more often than it
/// scripted is wrong.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<DiceRoll>,
}

impl ScriptedDice {
    /// Script rolls from `(die1, die2)` pairs, consumed front to back.
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = (u8, u8)>) -> Self {
        Self {
            rolls: rolls.into_iter().map(|(a, b)| DiceRoll::new(a, b)).collect(),
        }
    }

    /// Rolls still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> DiceRoll {
        match self.rolls.pop_front() {
            Some(roll) => roll,
            None => panic!("scripted dice exhausted"),
        }
    }
}
