//! Single-round resolution.
//!
//! The attacker rolls `power` dice. A smart defender looks at the
//! attacker's average face: at or above the threshold it rolls one die,
//! otherwise two. Without a threshold the defender always rolls one.
//! Dice are paired highest against highest; the attacker must beat the
//! defender outright, so ties go to the defence. Extra dice on either
//! side are ignored.

use crate::config::AttackConfiguration;
use crate::dice::{DiceSource, Roll};
use crate::error::EngineResult;
use crate::resolution::AttackResponse;

/// Resolve one round of combat, drawing dice from `dice`.
pub fn resolve_round(
    config: &AttackConfiguration,
    dice: &mut impl DiceSource,
) -> EngineResult<AttackResponse> {
    config.validate()?;

    let power = config.power.unsigned_abs();
    let attack_dice = dice.roll(power);
    let average = attack_dice.iter().sum::<u32>() / power;

    let defender_count = match config.smart_threshold {
        Some(threshold) if average >= threshold.unsigned_abs() => 1,
        Some(_) => 2,
        None => 1,
    };
    let defence_dice = dice.roll(defender_count);

    resolve_with_dice(config, attack_dice, defence_dice)
}

/// Resolve one round from dice that were already thrown.
///
/// The dice are sorted here, so callers may pass them in any order. The
/// defender's die count is taken as given; the smart threshold only
/// matters when [`resolve_round`] draws the dice itself.
pub fn resolve_with_dice(
    config: &AttackConfiguration,
    attack_dice: Vec<u32>,
    defence_dice: Vec<u32>,
) -> EngineResult<AttackResponse> {
    config.validate()?;

    let roll = Roll::new(attack_dice, defence_dice);
    let mut defence = config.defence;
    let mut attack = config.attack;

    for (att, def) in roll.attack.iter().zip(roll.defence.iter()) {
        if att > def {
            defence -= 1;
        } else {
            attack -= 1;
        }
    }

    Ok(AttackResponse::new(
        vec![roll],
        defence.max(0),
        attack.max(0),
        config.defence,
        config.attack,
    ))
}
