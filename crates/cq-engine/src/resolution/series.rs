//! Series resolution: rounds back to back until a stop condition fires.

use crate::config::{AttackConfiguration, AttackSeriesConfiguration};
use crate::dice::DiceSource;
use crate::error::EngineResult;
use crate::resolution::{AttackResponse, resolve_round};

/// Why a series stopped rolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    Reserve,
    Depleted,
    IterationLimit,
}

/// Resolve rounds until the reserve floor, a depleted side, or the
/// iteration limit stops the series.
///
/// Stop conditions are checked before each round. Every round rebuilds its
/// configuration from the running forces, the fixed power and the
/// threshold chosen by the series' [`crate::ThresholdPolicy`]. The lost
/// flags compare the final forces against the series' starting forces.
pub fn resolve_series(
    series: &AttackSeriesConfiguration,
    dice: &mut impl DiceSource,
) -> EngineResult<AttackResponse> {
    let start = series.sim_config;
    let reserve = series.reserve();
    let threshold = series.threshold_policy.threshold_for(&start);

    let mut defence = start.defence;
    let mut attack = start.attack;
    let mut rolls = Vec::new();
    let mut stop = StopReason::IterationLimit;

    for _ in 0..series.maximum_iterations {
        if series.reserve_rule.exhausted(attack, start.power, reserve) {
            stop = StopReason::Reserve;
            break;
        }
        if defence < 1 || attack < 2 {
            stop = StopReason::Depleted;
            break;
        }

        let round = AttackConfiguration::new(defence, attack, start.power)
            .with_smart_threshold(threshold);
        let result = resolve_round(&round, dice)?;

        defence = result.defence;
        attack = result.attack;
        rolls.extend(result.rolls);
    }

    tracing::debug!(
        rounds = rolls.len(),
        ?stop,
        defence,
        attack,
        "series finished"
    );

    Ok(AttackResponse::new(
        rolls,
        defence,
        attack,
        start.defence,
        start.attack,
    ))
}

/// Resolve a series with the default reserve rule and threshold policy.
pub fn resolve_series_with(
    maximum_iterations: u32,
    config: &AttackConfiguration,
    minimum_attack_reserve: Option<i32>,
    dice: &mut impl DiceSource,
) -> EngineResult<AttackResponse> {
    let series = AttackSeriesConfiguration::new(maximum_iterations, *config)
        .with_minimum_attack_reserve(minimum_attack_reserve);
    resolve_series(&series, dice)
}
