use std::path::Path;

use colored::Colorize;

use cq_counter::{Detector, JsonDetections, count_pieces};

pub fn run(
    image: &Path,
    detections: Option<&Path>,
    min_confidence: f32,
    json: bool,
) -> Result<(), String> {
    let detector = match detections {
        Some(path) => JsonDetections::from_file(path),
        None => JsonDetections::sidecar(),
    };
    count_with(&detector, image, min_confidence, json)
}

fn count_with(
    detector: &impl Detector,
    image: &Path,
    min_confidence: f32,
    json: bool,
) -> Result<(), String> {
    let found = detector.detect(image).map_err(|e| e.to_string())?;
    let count = count_pieces(&found, min_confidence);

    if json {
        return super::print_json(&count);
    }

    println!(
        "  {} {}",
        "Armies:".bold(),
        count.armies.to_string().green().bold()
    );
    println!(
        "  {}",
        format!(
            "{} pieces counted, {} below confidence {min_confidence}",
            count.pieces, count.rejected
        )
        .dimmed()
    );
    if !count.unrecognized.is_empty() {
        println!(
            "  {} unrecognized labels: {}",
            "WARN".yellow().bold(),
            count.unrecognized.join(", ")
        );
    }
    Ok(())
}
