use colored::Colorize;

use cq_engine::resolve_round;

use super::ForceOptions;

pub fn run(forces: &ForceOptions) -> Result<(), String> {
    let config = forces.config();
    let mut dice = forces.dice();
    let response = resolve_round(&config, &mut dice).map_err(|e| e.to_string())?;

    if forces.json {
        return super::print_json(&response);
    }

    println!(
        "  {} {}",
        "Battle".bold(),
        format!(
            "({} attacking {}, {} dice)",
            config.attack, config.defence, config.power
        )
        .dimmed()
    );
    println!();
    super::print_response(&response);
    Ok(())
}
