//! Shared glue for the mazenav demo binaries.

use std::collections::HashSet;

use mazenav_core::{CellKind, MazeGrid, Point};

/// A built-in maze for demos run without a file argument.
pub const SAMPLE: &str = "\
###########
#S........#
#.......o.#
#....##...#
#.o.......#
#........E#
###########";

/// Render the maze with `path` overlaid as `*` runes.
///
/// Start and end cells keep their own runes so the path endpoints stay
/// visible.
pub fn render_with_path(grid: &MazeGrid, path: &[Point]) -> String {
    let on_path: HashSet<Point> = path.iter().copied().collect();
    let mut out = String::with_capacity(grid.len() + grid.height() as usize);
    for (p, kind) in grid.iter() {
        let ch = match kind {
            CellKind::Start | CellKind::End => kind.rune(),
            _ if on_path.contains(&p) => '*',
            _ => kind.rune(),
        };
        out.push(ch);
        if p.x == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}
