use colored::Colorize;

use cq_engine::resolve_series;

use super::{ForceOptions, SeriesOptions};

pub fn run(forces: &ForceOptions, options: &SeriesOptions) -> Result<(), String> {
    let series = options.config(forces);
    let mut dice = forces.dice();
    let response = resolve_series(&series, &mut dice).map_err(|e| e.to_string())?;

    if forces.json {
        return super::print_json(&response);
    }

    println!(
        "  {} {}",
        "Series".bold(),
        format!(
            "(up to {} rounds, reserve {})",
            series.maximum_iterations,
            series.reserve()
        )
        .dimmed()
    );
    if series
        .reserve_rule
        .exhausted(forces.attack, forces.power, series.reserve())
    {
        println!(
            "  {} no attacks will occur: attacking armies minus power are within the reserve",
            "WARN".yellow().bold()
        );
    }
    println!();
    super::print_response(&response);
    Ok(())
}
