//! Circle Quad entry point
//!
//! Runs the random-walk driver for a number of ticks and logs membership
//! changes. Usage: `circle-quad [CONFIG.json] [TICKS]`.

use std::process::ExitCode;

use circle_quad::sim::{SimEvent, SimState, tick};
use circle_quad::{SimConfig, index::quadrant_number};

const DEFAULT_TICKS: u64 = 1_000;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Circle Quad starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            log::info!("No config given, using defaults");
            SimConfig::default()
        }
    };
    let ticks = match args.next().map(|s| s.parse::<u64>()) {
        None => DEFAULT_TICKS,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::error!("TICKS must be a non-negative integer: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut state = match SimState::new(config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let mut steps_with_hits = 0u64;
    let mut entries = 0u64;
    for _ in 0..ticks {
        let report = tick(&mut state);
        if !report.hits.is_empty() {
            steps_with_hits += 1;
        }
        for event in &report.events {
            if let SimEvent::Entered(id) = event {
                entries += 1;
                log::info!(
                    "tick {}: point {:?} entered {id} (quadrant {})",
                    report.tick,
                    report.point,
                    quadrant_number(report.quadrant)
                );
            }
        }
    }

    log::info!(
        "Done: {ticks} ticks, {steps_with_hits} with hits, {entries} entries, {} still hit",
        state.hits.len()
    );
    ExitCode::SUCCESS
}
