//! Statistical sampling over many independent battles.
//!
//! Each trial draws fresh dice from the same source. The batch is reduced
//! to an [`AttackAverage`]. Any failing trial aborts the whole run, and so
//! does cancellation; no partial average is ever returned.

pub mod average;
pub mod condense;

pub use average::{AttackAverage, reduce};
pub use condense::{CONDENSED_LIMIT, condense};

use crate::cancel::CancelToken;
use crate::config::{AttackConfiguration, AttackSeriesConfiguration};
use crate::dice::DiceSource;
use crate::error::{EngineError, EngineResult};
use crate::resolution::{AttackResponse, resolve_round, resolve_series};

/// Average `sample_size` independent single rounds.
pub fn sample_battle(
    sample_size: usize,
    config: &AttackConfiguration,
    dice: &mut impl DiceSource,
) -> EngineResult<AttackAverage> {
    sample_battle_cancellable(sample_size, config, dice, &CancelToken::new())
}

/// Average `sample_size` independent series.
pub fn sample_series(
    sample_size: usize,
    series: &AttackSeriesConfiguration,
    dice: &mut impl DiceSource,
) -> EngineResult<AttackAverage> {
    sample_series_cancellable(sample_size, series, dice, &CancelToken::new())
}

/// Like [`sample_battle`], checking `cancel` before every trial.
pub fn sample_battle_cancellable(
    sample_size: usize,
    config: &AttackConfiguration,
    dice: &mut impl DiceSource,
    cancel: &CancelToken,
) -> EngineResult<AttackAverage> {
    run_trials(sample_size, dice, cancel, |dice| resolve_round(config, dice))
}

/// Like [`sample_series`], checking `cancel` before every trial.
pub fn sample_series_cancellable(
    sample_size: usize,
    series: &AttackSeriesConfiguration,
    dice: &mut impl DiceSource,
    cancel: &CancelToken,
) -> EngineResult<AttackAverage> {
    run_trials(sample_size, dice, cancel, |dice| resolve_series(series, dice))
}

fn run_trials<D, F>(
    sample_size: usize,
    dice: &mut D,
    cancel: &CancelToken,
    mut trial: F,
) -> EngineResult<AttackAverage>
where
    D: DiceSource,
    F: FnMut(&mut D) -> EngineResult<AttackResponse>,
{
    if sample_size == 0 {
        return Err(EngineError::EmptySample);
    }

    let mut responses = Vec::with_capacity(sample_size);
    for completed in 0..sample_size {
        if cancel.is_cancelled() {
            tracing::info!(completed, sample_size, "sampling cancelled");
            return Err(EngineError::Cancelled);
        }
        responses.push(trial(dice)?);
    }

    let average = reduce(responses, dice);
    tracing::debug!(
        sample_size,
        defence = average.defence,
        attack = average.attack,
        condensed = average.attacks_condensed.len(),
        "sampling finished"
    );
    Ok(average)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RandomDice, ScriptedDice};
    use proptest::prelude::*;

    /// Dice that cancel a token after a number of faces have been rolled.
    struct CancellingDice {
        inner: ScriptedDice,
        after: usize,
        token: CancelToken,
    }

    impl DiceSource for CancellingDice {
        fn roll_die(&mut self) -> u32 {
            if self.inner.consumed() + 1 >= self.after {
                self.token.cancel();
            }
            self.inner.roll_die()
        }
    }

    #[test]
    fn uniform_outcome_averages_exactly() {
        // Attacker always loses both pairs: 7 -> 5 every trial.
        let config = AttackConfiguration::new(5, 7, 3);
        let mut dice = ScriptedDice::new([2, 1, 1, 4, 5]);
        let average = sample_battle(25, &config, &mut dice).unwrap();

        assert_eq!(average.attack, 5);
        assert_eq!(average.defence, 5);
        assert!(average.attacker_lost);
        assert!(!average.defender_lost);
        assert_eq!(average.attacks.len(), 25);
        assert_eq!(average.attacks_condensed, average.attacks);
        assert_eq!(average.initial_attack, 7);
        assert_eq!(average.initial_defence, 5);
    }

    #[test]
    fn zero_sample_size_is_rejected() {
        let config = AttackConfiguration::new(5, 7, 3);
        let mut dice = ScriptedDice::new([6]);
        assert_eq!(
            sample_battle(0, &config, &mut dice),
            Err(EngineError::EmptySample)
        );
    }

    #[test]
    fn trial_error_aborts_sampling() {
        let config = AttackConfiguration::new(5, 1, 3);
        let mut dice = ScriptedDice::new([6]);
        assert_eq!(
            sample_battle(10, &config, &mut dice),
            Err(EngineError::UnableToAttack)
        );
    }

    #[test]
    fn series_sampling_averages_series() {
        let config = AttackConfiguration::new(15, 25, 3);
        let series = AttackSeriesConfiguration::new(40, config).with_minimum_attack_reserve(Some(10));
        let mut dice = RandomDice::seeded(5);
        let average = sample_series(200, &series, &mut dice).unwrap();

        assert_eq!(average.attacks.len(), 200);
        assert!(average.attacks_condensed.len() <= CONDENSED_LIMIT);
        assert!(average.attacks.iter().all(|a| a.rounds() <= 40));
        assert_eq!(average.initial_attack, 25);
        assert_eq!(average.initial_defence, 15);
        assert!(average.attack <= 25);
    }

    #[test]
    fn thousand_series_condense_within_limit() {
        let config = AttackConfiguration::new(15, 25, 3);
        let series = AttackSeriesConfiguration::new(100, config);
        let mut dice = RandomDice::seeded(1000);
        let average = sample_series(1000, &series, &mut dice).unwrap();
        assert_eq!(average.attacks.len(), 1000);
        assert!(average.attacks_condensed.len() <= CONDENSED_LIMIT);
    }

    #[test]
    fn pre_cancelled_token_runs_nothing() {
        let config = AttackConfiguration::new(5, 7, 3);
        let mut dice = ScriptedDice::new([6]);
        let token = CancelToken::new();
        token.cancel();
        assert_eq!(
            sample_battle_cancellable(10, &config, &mut dice, &token),
            Err(EngineError::Cancelled)
        );
        assert_eq!(dice.consumed(), 0);
    }

    #[test]
    fn cancellation_is_checked_between_trials() {
        // Each trial rolls 4 dice (strong attack, one defender die). The token
        // trips during the second trial, which still completes.
        let token = CancelToken::new();
        let mut dice = CancellingDice {
            inner: ScriptedDice::new([6, 6, 6, 1]),
            after: 6,
            token: token.clone(),
        };
        let config = AttackConfiguration::new(50, 7, 3);
        let result = sample_battle_cancellable(10, &config, &mut dice, &token);

        assert_eq!(result, Err(EngineError::Cancelled));
        assert_eq!(dice.inner.consumed(), 8);
    }

    proptest! {
        #[test]
        fn sampled_averages_are_bounded(
            seed in any::<u64>(),
            size in 1..120usize,
            defence in 1..30i32,
            attack in 2..30i32,
            power in 1..4i32,
        ) {
            let config = AttackConfiguration::new(defence, attack, power);
            let mut dice = RandomDice::seeded(seed);
            let average = sample_battle(size, &config, &mut dice).unwrap();

            prop_assert!(average.defence >= 0 && average.defence <= defence);
            prop_assert!(average.attack >= 0 && average.attack <= attack);
            prop_assert_eq!(average.attacker_lost, average.attack < attack);
            prop_assert_eq!(average.defender_lost, average.defence < defence);
            prop_assert!(average.attacks_condensed.len() <= CONDENSED_LIMIT);
            if size <= CONDENSED_LIMIT {
                prop_assert_eq!(&average.attacks_condensed, &average.attacks);
            }
        }
    }
}
