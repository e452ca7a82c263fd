use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use cq_engine::{
    AttackAverage, CancelToken, EngineError, EngineResult, sample_battle_cancellable,
    sample_series_cancellable,
};

use super::{ForceOptions, SeriesOptions};

pub fn run(
    forces: &ForceOptions,
    series: Option<&SeriesOptions>,
    size: usize,
    budget_ms: Option<u64>,
) -> Result<(), String> {
    let config = forces.config();
    let series_config = series.map(|s| s.config(forces));
    let mut dice = forces.dice();
    let cancel = CancelToken::new();

    // Sampling runs off the main thread so a time budget can cancel it.
    let (tx, rx) = mpsc::channel();
    let worker_cancel = cancel.clone();
    let worker = thread::spawn(move || {
        let result = match &series_config {
            Some(series) => sample_series_cancellable(size, series, &mut dice, &worker_cancel),
            None => sample_battle_cancellable(size, &config, &mut dice, &worker_cancel),
        };
        // The receiver only disappears if the main thread already gave up.
        let _ = tx.send(result);
    });

    let result = wait(&rx, &cancel, budget_ms)?;
    worker
        .join()
        .map_err(|_| "sampling thread panicked".to_string())?;
    let average = result.map_err(|e| match (e, budget_ms) {
        (EngineError::Cancelled, Some(ms)) => format!("sampling exceeded budget of {ms} ms"),
        (e, _) => e.to_string(),
    })?;

    if forces.json {
        return super::print_json(&average);
    }

    print_header(&average, series.is_some(), size);
    super::print_average(&average);
    Ok(())
}

/// Wait for the worker, cancelling it once the budget runs out.
fn wait(
    rx: &mpsc::Receiver<EngineResult<AttackAverage>>,
    cancel: &CancelToken,
    budget_ms: Option<u64>,
) -> Result<EngineResult<AttackAverage>, String> {
    let disconnected = || "sampling thread stopped without a result".to_string();

    let Some(ms) = budget_ms else {
        return rx.recv().map_err(|_| disconnected());
    };

    match rx.recv_timeout(Duration::from_millis(ms)) {
        Ok(result) => Ok(result),
        Err(RecvTimeoutError::Timeout) => {
            tracing::warn!(budget_ms = ms, "sampling budget exceeded, cancelling");
            cancel.cancel();
            rx.recv().map_err(|_| disconnected())
        }
        Err(RecvTimeoutError::Disconnected) => Err(disconnected()),
    }
}

fn print_header(average: &AttackAverage, series: bool, size: usize) {
    let kind = if series { "series" } else { "rounds" };
    println!(
        "  {} {}",
        "Sample".bold(),
        format!(
            "({size} {kind}, {} attacking {})",
            average.initial_attack, average.initial_defence
        )
        .dimmed()
    );
    println!();
}
