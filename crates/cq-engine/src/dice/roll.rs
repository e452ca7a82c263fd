//! The dice thrown by both sides in one battle round.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::sort_descending;

/// Attacker and defender dice from a single round, highest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roll {
    /// Attacker dice, sorted descending.
    pub attack: Vec<u32>,
    /// Defender dice, sorted descending.
    pub defence: Vec<u32>,
    /// Identifier for list diffing in hosts. Not part of equality.
    pub id: Uuid,
}

impl Roll {
    /// Record a round's dice, sorting both sides highest first.
    pub fn new(mut attack: Vec<u32>, mut defence: Vec<u32>) -> Self {
        sort_descending(&mut attack);
        sort_descending(&mut defence);
        Self {
            attack,
            defence,
            id: Uuid::new_v4(),
        }
    }

    /// Number of attacker/defender die pairs that are compared.
    pub fn pairs(&self) -> usize {
        self.attack.len().min(self.defence.len())
    }

    /// Integer-floor average of the attacker dice, or 0 if there are none.
    pub fn attack_average(&self) -> u32 {
        match u32::try_from(self.attack.len()) {
            Ok(0) | Err(_) => 0,
            Ok(count) => self.attack.iter().sum::<u32>() / count,
        }
    }
}

impl PartialEq for Roll {
    fn eq(&self, other: &Self) -> bool {
        self.attack == other.attack && self.defence == other.defence
    }
}

impl Eq for Roll {}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |dice: &[u32]| {
            dice.iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(f, "[{}] vs [{}]", join(&self.attack), join(&self.defence))
    }
}
