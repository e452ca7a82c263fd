//! Battle resolution: single rounds and series of rounds.
//!
//! Both resolvers produce an [`AttackResponse`]. A round holds exactly one
//! [`Roll`]; a series holds one per round it resolved, in order.

pub mod round;
pub mod series;

pub use round::{resolve_round, resolve_with_dice};
pub use series::{resolve_series, resolve_series_with};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dice::Roll;

/// The outcome of a round or a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttackResponse {
    /// Dice thrown, one entry per round.
    pub rolls: Vec<Roll>,
    /// Defending armies after the battle.
    pub defence: i32,
    /// Attacking armies after the battle.
    pub attack: i32,
    /// The attacker ended with fewer armies than it started with.
    pub attacker_lost: bool,
    /// The defender ended with fewer armies than it started with.
    pub defender_lost: bool,
    /// Defending armies before the battle.
    pub initial_defence: i32,
    /// Attacking armies before the battle.
    pub initial_attack: i32,
    /// Identifier for list diffing in hosts. Not part of equality.
    pub id: Uuid,
}

impl AttackResponse {
    /// Build a response, deriving the lost flags from the force changes.
    pub fn new(
        rolls: Vec<Roll>,
        defence: i32,
        attack: i32,
        initial_defence: i32,
        initial_attack: i32,
    ) -> Self {
        Self {
            rolls,
            defence,
            attack,
            attacker_lost: attack < initial_attack,
            defender_lost: defence < initial_defence,
            initial_defence,
            initial_attack,
            id: Uuid::new_v4(),
        }
    }

    /// Change in attacking armies (negative when armies were lost).
    pub fn attack_delta(&self) -> i32 {
        self.attack - self.initial_attack
    }

    /// Change in defending armies (negative when armies were lost).
    pub fn defence_delta(&self) -> i32 {
        self.defence - self.initial_defence
    }

    /// Number of rounds resolved.
    pub fn rounds(&self) -> usize {
        self.rolls.len()
    }
}

impl PartialEq for AttackResponse {
    fn eq(&self, other: &Self) -> bool {
        self.rolls == other.rolls
            && self.defence == other.defence
            && self.attack == other.attack
            && self.attacker_lost == other.attacker_lost
            && self.defender_lost == other.defender_lost
            && self.initial_defence == other.initial_defence
            && self.initial_attack == other.initial_attack
    }
}

impl Eq for AttackResponse {}
