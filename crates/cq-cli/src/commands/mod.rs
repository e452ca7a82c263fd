pub mod battle;
pub mod count;
pub mod sample;
pub mod series;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use cq_engine::{
    AttackAverage, AttackConfiguration, AttackResponse, AttackSeriesConfiguration, RandomDice,
    ReserveRule, ThresholdPolicy,
};

/// Battle settings collected from the command line.
pub struct ForceOptions {
    pub defence: i32,
    pub attack: i32,
    pub power: i32,
    pub threshold: Option<i32>,
    pub seed: Option<u64>,
    pub json: bool,
}

impl ForceOptions {
    pub fn config(&self) -> AttackConfiguration {
        AttackConfiguration::new(self.defence, self.attack, self.power)
            .with_smart_threshold(self.threshold)
    }

    pub fn dice(&self) -> RandomDice {
        match self.seed {
            Some(seed) => RandomDice::seeded(seed),
            None => RandomDice::from_entropy(),
        }
    }
}

/// Series settings collected from the command line.
pub struct SeriesOptions {
    pub length: u32,
    pub reserve: i32,
    pub inclusive_reserve: bool,
    pub carry_threshold: bool,
}

impl SeriesOptions {
    pub fn config(&self, forces: &ForceOptions) -> AttackSeriesConfiguration {
        let rule = if self.inclusive_reserve {
            ReserveRule::Inclusive
        } else {
            ReserveRule::Strict
        };
        let policy = if self.carry_threshold {
            ThresholdPolicy::Carry
        } else {
            ThresholdPolicy::ResetToDefault
        };
        AttackSeriesConfiguration::new(self.length, forces.config())
            .with_minimum_attack_reserve(Some(self.reserve))
            .with_reserve_rule(rule)
            .with_threshold_policy(policy)
    }
}

/// Print any serializable result as pretty JSON on stdout.
fn print_json(value: &impl Serialize) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("JSON error: {e}"))?;
    println!("{json}");
    Ok(())
}

/// "Lost: 2" / "Gained: +1" / "Unchanged" for a change in armies.
fn format_delta(delta: i32) -> String {
    match delta {
        d if d < 0 => format!("Lost: {}", -d).red().to_string(),
        d if d > 0 => format!("Gained: +{d}").green().to_string(),
        _ => "Unchanged".dimmed().to_string(),
    }
}

/// Print a single round or series result.
fn print_response(response: &AttackResponse) {
    println!(
        "  {} {}",
        "Attacker's New Armies:".bold(),
        response.attack
    );
    println!("    {}", format_delta(response.attack_delta()));
    println!(
        "  {} {}",
        "Defender's New Armies:".bold(),
        response.defence
    );
    println!("    {}", format_delta(response.defence_delta()));
    println!();

    if response.rolls.is_empty() {
        println!("  {}", "(no rounds rolled)".dimmed());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Round", "Attack", "Defence", "Pairs"]);
    for (i, roll) in response.rolls.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            join_dice(&roll.attack),
            join_dice(&roll.defence),
            roll.pairs().to_string(),
        ]);
    }
    println!("{table}");
}

/// Print the averages of a sample run and its condensed samples.
fn print_average(average: &AttackAverage) {
    println!(
        "  {} {}",
        "Attacker's Average New Armies:".bold(),
        average.attack
    );
    println!("    {}", format_delta(average.attack_delta()));
    println!(
        "  {} {}",
        "Defender's Average New Armies:".bold(),
        average.defence
    );
    println!("    {}", format_delta(average.defence_delta()));
    println!();

    println!(
        "  {} {}",
        "Samples".bold().underline(),
        format!(
            "({} of {} shown)",
            average.attacks_condensed.len(),
            average.attacks.len()
        )
        .dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Iteration", "Attack", "Defence", "Rounds"]);
    for (i, sample) in average.condensed_with_positions() {
        table.add_row(vec![
            (i + 1).to_string(),
            colorize_force(sample.attack, average.attack),
            colorize_force(sample.defence, average.defence),
            sample.rounds().to_string(),
        ]);
    }
    println!("{table}");
}

/// Color a sample's force by how it compares with the batch mean.
fn colorize_force(value: i32, mean: i32) -> String {
    let text = value.to_string();
    match value.cmp(&mean) {
        std::cmp::Ordering::Less => text.yellow().to_string(),
        std::cmp::Ordering::Greater => text.cyan().to_string(),
        std::cmp::Ordering::Equal => text,
    }
}

fn join_dice(dice: &[u32]) -> String {
    dice.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
