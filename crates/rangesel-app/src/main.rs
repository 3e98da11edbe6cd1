//! Replay entry point.

use std::io::Read;
use std::process::ExitCode;

use rangesel_app::{Scenario, replay};

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: rangesel-replay <scenario.json | ->");
        return ExitCode::from(2);
    };

    let json = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map(|_| buf)
    } else {
        std::fs::read_to_string(&path)
    };
    let json = match json {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to read {}: {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let scenario = match Scenario::from_json(&json) {
        Ok(scenario) => scenario,
        Err(e) => {
            log::error!("Failed to parse scenario: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Replaying {} steps from {}", scenario.steps.len(), path);

    let outcome = match replay(&scenario) {
        Ok(outcome) => outcome,
        Err(e) => {
            log::error!("Replay failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for record in &outcome.records {
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(e) => log::error!("Failed to serialize record: {}", e),
        }
    }
    match (outcome.start_ratio, outcome.end_ratio) {
        (Some(start), Some(end)) => log::info!("Final selection {start:.4}..{end:.4}"),
        _ => log::warn!("Final track is too narrow to hold a selection"),
    }
    ExitCode::SUCCESS
}
