//! Configuration for rounds and series.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Smart defender threshold used when none is given.
pub const DEFAULT_SMART_THRESHOLD: i32 = 4;

/// Reserve kept back by a series when none is given.
pub const DEFAULT_ATTACK_RESERVE: i32 = 1;

/// Forces and dice for a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackConfiguration {
    /// Armies in the defending territory.
    pub defence: i32,
    /// Armies in the attacking territory.
    pub attack: i32,
    /// Number of dice the attacker rolls.
    pub power: i32,
    /// Attacker average at or above which the defender rolls a single die.
    /// `None` means the defender always rolls one die.
    pub smart_threshold: Option<i32>,
}

impl AttackConfiguration {
    /// A configuration with the default smart threshold.
    pub fn new(defence: i32, attack: i32, power: i32) -> Self {
        Self {
            defence,
            attack,
            power,
            smart_threshold: Some(DEFAULT_SMART_THRESHOLD),
        }
    }

    /// Override the smart threshold. `None` disables the smart defender.
    pub fn with_smart_threshold(mut self, threshold: Option<i32>) -> Self {
        self.smart_threshold = threshold;
        self
    }

    /// Check the configuration, in the order defence, attack, power, threshold.
    pub fn validate(&self) -> EngineResult<()> {
        if self.defence <= 0 {
            return Err(EngineError::UnableToDefend);
        }
        if self.attack <= 1 {
            return Err(EngineError::UnableToAttack);
        }
        if self.power <= 0 {
            return Err(EngineError::InvalidPower);
        }
        if let Some(threshold) = self.smart_threshold
            && !(1..=6).contains(&threshold)
        {
            return Err(EngineError::InvalidSmartThreshold(threshold));
        }
        Ok(())
    }
}

/// How the remaining attack force is compared with the reserve floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReserveRule {
    /// Stop once `attack - power < reserve`.
    #[default]
    Strict,
    /// Stop once `attack - power <= reserve`, keeping one more army back.
    Inclusive,
}

impl ReserveRule {
    /// Returns true when a series must stop before rolling again.
    pub fn exhausted(self, attack: i32, power: i32, reserve: i32) -> bool {
        let remaining = attack.saturating_sub(power);
        match self {
            Self::Strict => remaining < reserve,
            Self::Inclusive => remaining <= reserve,
        }
    }
}

/// Which smart threshold each round of a series uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThresholdPolicy {
    /// Every round uses [`DEFAULT_SMART_THRESHOLD`], whatever the caller set.
    #[default]
    ResetToDefault,
    /// Every round uses the caller's threshold.
    Carry,
}

impl ThresholdPolicy {
    /// The threshold for a round, given the series' original configuration.
    pub fn threshold_for(self, original: &AttackConfiguration) -> Option<i32> {
        match self {
            Self::ResetToDefault => Some(DEFAULT_SMART_THRESHOLD),
            Self::Carry => original.smart_threshold,
        }
    }
}

/// Configuration for a series of rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackSeriesConfiguration {
    /// Upper bound on rounds resolved.
    pub maximum_iterations: u32,
    /// Starting forces and dice.
    pub sim_config: AttackConfiguration,
    /// Armies the attacker keeps back. Defaults to [`DEFAULT_ATTACK_RESERVE`].
    pub minimum_attack_reserve: Option<i32>,
    /// Comparator for the reserve floor.
    pub reserve_rule: ReserveRule,
    /// Threshold forwarding between rounds.
    pub threshold_policy: ThresholdPolicy,
}

impl AttackSeriesConfiguration {
    /// A series with the default reserve, reserve rule and threshold policy.
    pub fn new(maximum_iterations: u32, sim_config: AttackConfiguration) -> Self {
        Self {
            maximum_iterations,
            sim_config,
            minimum_attack_reserve: None,
            reserve_rule: ReserveRule::default(),
            threshold_policy: ThresholdPolicy::default(),
        }
    }

    /// Set the reserve floor.
    pub fn with_minimum_attack_reserve(mut self, reserve: Option<i32>) -> Self {
        self.minimum_attack_reserve = reserve;
        self
    }

    /// Set the reserve comparator.
    pub fn with_reserve_rule(mut self, rule: ReserveRule) -> Self {
        self.reserve_rule = rule;
        self
    }

    /// Set the threshold policy.
    pub fn with_threshold_policy(mut self, policy: ThresholdPolicy) -> Self {
        self.threshold_policy = policy;
        self
    }

    /// The reserve floor in effect.
    pub fn reserve(&self) -> i32 {
        self.minimum_attack_reserve.unwrap_or(DEFAULT_ATTACK_RESERVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_threshold() {
        let config = AttackConfiguration::new(5, 7, 3);
        assert_eq!(config.smart_threshold, Some(4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validation_boundaries() {
        assert_eq!(
            AttackConfiguration::new(0, 7, 3).validate(),
            Err(EngineError::UnableToDefend)
        );
        assert_eq!(
            AttackConfiguration::new(5, 1, 3).validate(),
            Err(EngineError::UnableToAttack)
        );
        assert_eq!(
            AttackConfiguration::new(5, 7, 0).validate(),
            Err(EngineError::InvalidPower)
        );
        assert_eq!(
            AttackConfiguration::new(5, 7, 3)
                .with_smart_threshold(Some(7))
                .validate(),
            Err(EngineError::InvalidSmartThreshold(7))
        );
        assert_eq!(
            AttackConfiguration::new(5, 7, 3)
                .with_smart_threshold(Some(0))
                .validate(),
            Err(EngineError::InvalidSmartThreshold(0))
        );
    }

    #[test]
    fn validation_reports_first_failure() {
        let config = AttackConfiguration::new(-1, 0, 0).with_smart_threshold(Some(9));
        assert_eq!(config.validate(), Err(EngineError::UnableToDefend));
    }

    #[test]
    fn no_threshold_is_valid() {
        let config = AttackConfiguration::new(1, 2, 1).with_smart_threshold(None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reserve_rules_differ_by_one() {
        // attack 13, power 3, reserve 10: 10 remaining
        assert!(!ReserveRule::Strict.exhausted(13, 3, 10));
        assert!(ReserveRule::Inclusive.exhausted(13, 3, 10));
        assert!(ReserveRule::Strict.exhausted(12, 3, 10));
    }

    #[test]
    fn threshold_policy() {
        let config = AttackConfiguration::new(5, 7, 3).with_smart_threshold(Some(2));
        assert_eq!(ThresholdPolicy::ResetToDefault.threshold_for(&config), Some(4));
        assert_eq!(ThresholdPolicy::Carry.threshold_for(&config), Some(2));
        let none = config.with_smart_threshold(None);
        assert_eq!(ThresholdPolicy::Carry.threshold_for(&none), None);
    }

    #[test]
    fn series_builder_chain() {
        let series = AttackSeriesConfiguration::new(40, AttackConfiguration::new(15, 25, 3));
        assert_eq!(series.reserve(), 1);
        let series = series
            .with_minimum_attack_reserve(Some(10))
            .with_reserve_rule(ReserveRule::Inclusive)
            .with_threshold_policy(ThresholdPolicy::Carry);
        assert_eq!(series.reserve(), 10);
        assert_eq!(series.reserve_rule, ReserveRule::Inclusive);
        assert_eq!(series.threshold_policy, ThresholdPolicy::Carry);
    }
}
