//! Solve an ASCII maze from the command line.
//!
//! Run: cargo run --bin solve -- [FILE] [METRIC] [CLEARANCE]
//!
//! With no arguments (or `-` as the file) a built-in sample maze is
//! solved with the Euclid metric and a safety clearance of 1. Set
//! `RUST_LOG=info` to see the path-length report.

use std::env;
use std::fs;
use std::process::ExitCode;

use mazenav_core::MazeGrid;
use mazenav_demos::{SAMPLE, render_with_path};
use mazenav_paths::{Metric, solve};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let text = match args.first().map(String::as_str) {
        Some("-") | None => SAMPLE.to_string(),
        Some(file) => match fs::read_to_string(file) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{file}: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let metric = match args.get(1) {
        Some(name) => match Metric::from_name(name) {
            Some(m) => m,
            None => {
                eprintln!("unknown metric {name:?}; expected one of Checkerboard, Euclid, Manhattan");
                return ExitCode::FAILURE;
            }
        },
        None => Metric::Euclid,
    };

    let clearance: u32 = match args.get(2) {
        Some(raw) => match raw.parse() {
            Ok(c) => c,
            Err(_) => {
                eprintln!("clearance must be a non-negative integer, got {raw:?}");
                return ExitCode::FAILURE;
            }
        },
        None => 1,
    };

    let grid = match MazeGrid::parse(&text) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let tight = match solve(&grid, metric, 0) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    log::info!("{metric}: path length without safety distance: {}", tight.path.len());
    println!("{}", render_with_path(&grid, &tight.path));

    if clearance > 0 {
        match solve(&grid, metric, clearance) {
            Ok(safe) => {
                log::info!(
                    "{metric}: path length with safety distance {clearance}: {}",
                    safe.path.len()
                );
                log::info!(
                    "difference: {}",
                    safe.path.len() as i64 - tight.path.len() as i64
                );
                println!("{}", render_with_path(&grid, &safe.path));
            }
            Err(e) => log::warn!("with safety distance {clearance}: {e}"),
        }
    }

    ExitCode::SUCCESS
}
