//! Averaging a batch of battle outcomes.

use serde::{Deserialize, Serialize};

use super::condense::condense;
use crate::dice::DiceSource;
use crate::resolution::AttackResponse;

/// Mean outcome of a batch of rounds or series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackAverage {
    /// Mean defending armies, truncated toward zero.
    pub defence: i32,
    /// Mean attacking armies, truncated toward zero.
    pub attack: i32,
    /// The mean attack is below the first sample's starting attack.
    pub attacker_lost: bool,
    /// The mean defence is below the first sample's starting defence.
    pub defender_lost: bool,
    /// Starting defence of the first sample.
    pub initial_defence: i32,
    /// Starting attack of the first sample.
    pub initial_attack: i32,
    /// Every sample, in the order it was produced.
    pub attacks: Vec<AttackResponse>,
    /// At most fifty samples from `attacks`, for charts.
    pub attacks_condensed: Vec<AttackResponse>,
}

impl AttackAverage {
    /// Change in mean attacking armies against the baseline.
    pub fn attack_delta(&self) -> i32 {
        self.attack - self.initial_attack
    }

    /// Change in mean defending armies against the baseline.
    pub fn defence_delta(&self) -> i32 {
        self.defence - self.initial_defence
    }

    /// Index in `attacks` of a sample, matched by id.
    pub fn position_of(&self, response: &AttackResponse) -> Option<usize> {
        self.attacks.iter().position(|a| a.id == response.id)
    }

    /// Condensed samples paired with their index in `attacks`.
    pub fn condensed_with_positions(&self) -> impl Iterator<Item = (usize, &AttackResponse)> {
        self.attacks_condensed
            .iter()
            .filter_map(|a| self.position_of(a).map(|i| (i, a)))
    }
}

/// Average a batch of responses.
///
/// Means use truncating integer division. The baseline for the lost flags
/// is the first sample's starting forces. An empty batch averages to zero
/// with a zero baseline.
pub fn reduce(attacks: Vec<AttackResponse>, dice: &mut impl DiceSource) -> AttackAverage {
    let (initial_defence, initial_attack) = attacks
        .first()
        .map_or((0, 0), |first| (first.initial_defence, first.initial_attack));

    let defence = integer_mean(attacks.iter().map(|a| a.defence));
    let attack = integer_mean(attacks.iter().map(|a| a.attack));
    let attacks_condensed = condense(&attacks, dice);

    AttackAverage {
        defence,
        attack,
        attacker_lost: attack < initial_attack,
        defender_lost: defence < initial_defence,
        initial_defence,
        initial_attack,
        attacks,
        attacks_condensed,
    }
}

fn integer_mean(values: impl ExactSizeIterator<Item = i32>) -> i32 {
    let count = values.len() as i64;
    if count == 0 {
        return 0;
    }
    let total: i64 = values.map(i64::from).sum();
    // Forces are i32, so their mean is too.
    i32::try_from(total / count).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RandomDice, Roll, ScriptedDice};

    fn response(defence: i32, attack: i32, initial_defence: i32, initial_attack: i32) -> AttackResponse {
        AttackResponse::new(
            vec![Roll::new(vec![3], vec![3])],
            defence,
            attack,
            initial_defence,
            initial_attack,
        )
    }

    #[test]
    fn uniform_batch_keeps_value() {
        let batch: Vec<_> = (0..30).map(|_| response(4, 5, 5, 7)).collect();
        let average = reduce(batch, &mut ScriptedDice::new([1]));
        assert_eq!(average.attack, 5);
        assert_eq!(average.defence, 4);
        assert!(average.attacker_lost);
        assert!(average.defender_lost);
    }

    #[test]
    fn mean_truncates() {
        let batch = vec![response(1, 2, 5, 7), response(2, 3, 5, 7)];
        let average = reduce(batch, &mut ScriptedDice::new([1]));
        assert_eq!(average.defence, 1);
        assert_eq!(average.attack, 2);
    }

    #[test]
    fn baseline_comes_from_first_sample() {
        let batch = vec![response(3, 9, 5, 10), response(3, 9, 20, 20)];
        let average = reduce(batch, &mut ScriptedDice::new([1]));
        assert_eq!(average.initial_defence, 5);
        assert_eq!(average.initial_attack, 10);
        assert!(average.attacker_lost);
        assert!(average.defender_lost);
        assert_eq!(average.attack_delta(), -1);
        assert_eq!(average.defence_delta(), -2);
    }

    #[test]
    fn unchanged_forces_are_not_lost() {
        let batch = vec![response(5, 7, 5, 7)];
        let average = reduce(batch, &mut ScriptedDice::new([1]));
        assert!(!average.attacker_lost);
        assert!(!average.defender_lost);
    }

    #[test]
    fn empty_batch_is_zeroed() {
        let average = reduce(Vec::new(), &mut ScriptedDice::new([1]));
        assert_eq!(average.defence, 0);
        assert_eq!(average.attack, 0);
        assert_eq!(average.initial_defence, 0);
        assert_eq!(average.initial_attack, 0);
        assert!(!average.attacker_lost);
        assert!(!average.defender_lost);
        assert!(average.attacks.is_empty());
        assert!(average.attacks_condensed.is_empty());
    }

    #[test]
    fn small_batch_condensed_is_identity() {
        let batch: Vec<_> = (0..50).map(|i| response(i % 5 + 1, 7, 5, 7)).collect();
        let average = reduce(batch.clone(), &mut ScriptedDice::new([6]));
        assert_eq!(average.attacks_condensed, batch);
        assert_eq!(average.attacks, batch);
    }

    #[test]
    fn large_batch_is_condensed_with_positions() {
        let batch: Vec<_> = (0..1000).map(|i| response(i % 5 + 1, 7, 5, 7)).collect();
        let average = reduce(batch, &mut RandomDice::seeded(11));
        assert_eq!(average.attacks.len(), 1000);
        assert!(average.attacks_condensed.len() <= 50);

        let positions: Vec<usize> = average
            .condensed_with_positions()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions.len(), average.attacks_condensed.len());
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
