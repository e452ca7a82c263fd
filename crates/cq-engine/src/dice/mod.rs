//! Dice sources and recorded rolls.
//!
//! Every random value the engine uses comes from a [`DiceSource`]. The
//! production source wraps a seedable RNG; [`ScriptedDice`] replays fixed
//! faces so battles can be reproduced exactly in tests.

pub mod roll;
pub mod source;

pub use roll::Roll;
pub use source::{RandomDice, ScriptedDice};

/// Number of faces on the dice used by the game.
pub const FACES: u32 = 6;

/// A source of six-sided dice.
///
/// Implementors only need [`DiceSource::roll_die`]. Batched rolls and coin
/// flips are derived from it unless the source has a cheaper way to
/// produce them.
pub trait DiceSource {
    /// Roll a single die, returning a face in `1..=6`.
    fn roll_die(&mut self) -> u32;

    /// Roll `count` independent dice.
    fn roll(&mut self, count: u32) -> Vec<u32> {
        (0..count).map(|_| self.roll_die()).collect()
    }

    /// Flip a fair coin.
    fn flip_coin(&mut self) -> bool {
        self.roll_die() <= FACES / 2
    }
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll_die(&mut self) -> u32 {
        (**self).roll_die()
    }

    fn roll(&mut self, count: u32) -> Vec<u32> {
        (**self).roll(count)
    }

    fn flip_coin(&mut self) -> bool {
        (**self).flip_coin()
    }
}

/// Sort dice in place from highest to lowest face.
pub fn sort_descending(dice: &mut [u32]) {
    dice.sort_unstable_by(|a, b| b.cmp(a));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_uses_roll_die() {
        let mut dice = ScriptedDice::new([3, 1, 6]);
        assert_eq!(dice.roll(3), vec![3, 1, 6]);
    }

    #[test]
    fn roll_zero_is_empty() {
        let mut dice = ScriptedDice::new([4]);
        assert!(dice.roll(0).is_empty());
    }

    #[test]
    fn default_coin_splits_faces_in_half() {
        let mut dice = ScriptedDice::new([1, 2, 3, 4, 5, 6]);
        let flips: Vec<bool> = (0..6).map(|_| dice.flip_coin()).collect();
        assert_eq!(flips, vec![true, true, true, false, false, false]);
    }

    #[test]
    fn mutable_reference_is_a_source() {
        fn first_face(mut source: impl DiceSource) -> u32 {
            source.roll_die()
        }

        let mut dice = ScriptedDice::new([5, 2]);
        assert_eq!(first_face(&mut dice), 5);
        assert_eq!(dice.roll_die(), 2);
    }

    #[test]
    fn sort_descending_orders_highest_first() {
        let mut dice = vec![2, 6, 1, 6, 3];
        sort_descending(&mut dice);
        assert_eq!(dice, vec![6, 6, 3, 2, 1]);
    }
}
