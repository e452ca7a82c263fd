//! Dice combat engine for Conquest.
//!
//! Resolves single battle rounds, series of rounds held back by a reserve
//! floor, and batches of independent trials averaged for display. All
//! randomness comes from a [`DiceSource`], so any result can be reproduced
//! with [`ScriptedDice`] or a seeded [`RandomDice`].
//!
//! ```
//! use cq_engine::{AttackConfiguration, RandomDice, resolve_round};
//!
//! let config = AttackConfiguration::new(15, 25, 3);
//! let mut dice = RandomDice::seeded(7);
//! let response = resolve_round(&config, &mut dice).unwrap();
//! assert_eq!(response.rolls.len(), 1);
//! ```

pub mod cancel;
pub mod config;
pub mod dice;
pub mod error;
pub mod resolution;
pub mod sample;

pub use cancel::CancelToken;
pub use config::{
    AttackConfiguration, AttackSeriesConfiguration, DEFAULT_ATTACK_RESERVE,
    DEFAULT_SMART_THRESHOLD, ReserveRule, ThresholdPolicy,
};
pub use dice::{DiceSource, RandomDice, Roll, ScriptedDice};
pub use error::{EngineError, EngineResult};
pub use resolution::{
    AttackResponse, resolve_round, resolve_series, resolve_series_with, resolve_with_dice,
};
pub use sample::{
    AttackAverage, CONDENSED_LIMIT, reduce, sample_battle, sample_battle_cancellable,
    sample_series, sample_series_cancellable,
};
