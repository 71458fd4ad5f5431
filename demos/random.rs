//! Solve a randomly generated obstacle field.
//!
//! Run: cargo run --bin random
//!
//! Scatters walls and obstacles over a bordered grid until a solvable
//! maze comes up, then prints the clearance-respecting path.

use std::process::ExitCode;

use rand::{Rng, RngExt};

use mazenav_core::{CellKind, MazeGrid, Point};
use mazenav_demos::render_with_path;
use mazenav_paths::{Metric, solve};

const WIDTH: i32 = 41;
const HEIGHT: i32 = 17;
const WALL_CHANCE: f64 = 0.12;
const OBSTACLE_CHANCE: f64 = 0.03;
const CLEARANCE: u32 = 1;
const ATTEMPTS: u32 = 50;

fn scatter(rng: &mut impl Rng) -> MazeGrid {
    let start = Point::new(1, 1);
    let end = Point::new(WIDTH - 2, HEIGHT - 2);
    MazeGrid::from_fn(WIDTH, HEIGHT, |p| {
        if p.x == 0 || p.y == 0 || p.x == WIDTH - 1 || p.y == HEIGHT - 1 {
            CellKind::Wall
        } else if p == start {
            CellKind::Start
        } else if p == end {
            CellKind::End
        } else if rng.random_bool(OBSTACLE_CHANCE) {
            CellKind::Obstacle
        } else if rng.random_bool(WALL_CHANCE) {
            CellKind::Wall
        } else {
            CellKind::Background
        }
    })
}

fn main() -> ExitCode {
    env_logger::init();
    let mut rng = rand::rng();

    for attempt in 1..=ATTEMPTS {
        let grid = scatter(&mut rng);
        match solve(&grid, Metric::Checkerboard, CLEARANCE) {
            Ok(solution) => {
                log::info!(
                    "attempt {attempt}: path of {} cells, start distance {}",
                    solution.path.len(),
                    solution.field.at(solution.path[0])
                );
                println!("{}", render_with_path(&grid, &solution.path));
                return ExitCode::SUCCESS;
            }
            Err(e) => log::debug!("attempt {attempt}: {e}"),
        }
    }

    eprintln!("no solvable maze in {ATTEMPTS} attempts");
    ExitCode::FAILURE
}
