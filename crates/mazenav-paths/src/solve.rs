//! The end-to-end solve pipeline.

use mazenav_core::{CellKind, MazeError, MazeGrid, Point};

use crate::descent::reconstruct;
use crate::field::DistanceField;
use crate::inflate::inflate;
use crate::metric::Metric;
use crate::relax::{FieldRange, FieldTarget};

/// A solved maze: the end-rooted distance field used for descent, and
/// the reconstructed path from the best start cell to an end cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub field: DistanceField,
    pub path: Vec<Point>,
}

/// Solve `grid` under `metric`, keeping at least `clearance` distance
/// from obstacles.
///
/// With `clearance == 0` the end-rooted field is built directly over
/// `grid`. Otherwise an obstacle-rooted field is built first, the grid
/// is [`inflate`]d, and the end-rooted field is built over the inflated
/// variant. Start cells still come from the caller's grid, which
/// inflation never modifies.
///
/// # Errors
///
/// [`MazeError::NoEnd`] when the grid has no end cell (checked before
/// any field work), plus everything [`reconstruct`] reports. A failure
/// yields no partial result.
pub fn solve(grid: &MazeGrid, metric: Metric, clearance: u32) -> Result<Solution, MazeError> {
    if grid.count(CellKind::End) == 0 {
        return Err(MazeError::NoEnd);
    }

    let mut range = FieldRange::new(grid.width(), grid.height());
    let field = if clearance == 0 {
        range.field(grid, metric, FieldTarget::End)
    } else {
        let obstacles = range.field(grid, metric, FieldTarget::Obstacles);
        let inflated = inflate(grid, &obstacles, f64::from(clearance));
        range.field(&inflated, metric, FieldTarget::End)
    };

    let path = reconstruct(grid, &field, metric)?;
    Ok(Solution { field, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::INACCESSIBLE;

    const CORRIDOR: &str = "\
.......
.......
.S.o.E.
.......
.......";

    #[test]
    fn clearance_routes_around_the_obstacle() {
        let grid = MazeGrid::parse(CORRIDOR).unwrap();

        let tight = solve(&grid, Metric::Checkerboard, 0).unwrap();
        assert_eq!(tight.path.len(), 5);
        assert_eq!(tight.field.at(Point::new(1, 2)), 4.0);

        let safe = solve(&grid, Metric::Checkerboard, 1).unwrap();
        assert_eq!(safe.path.len(), 7);
        assert_eq!(safe.field.at(Point::new(1, 2)), 6.0);
        // the cell next to the obstacle was walled off in the inflated
        // grid the field was built over
        assert_eq!(safe.field.at(Point::new(2, 2)), INACCESSIBLE);

        // every cell of the safe path keeps its distance
        let mut range = FieldRange::new(grid.width(), grid.height());
        let obstacles = range.field(&grid, Metric::Checkerboard, FieldTarget::Obstacles);
        for &p in &safe.path {
            assert!(obstacles.at(p) > 1.0, "path enters the clearance band at {p}");
        }

        // both paths share their endpoints
        assert_eq!(tight.path[0], Point::new(1, 2));
        assert_eq!(safe.path[0], Point::new(1, 2));
        assert_eq!(tight.path.last(), safe.path.last());
    }

    #[test]
    fn clearance_without_obstacles_changes_nothing() {
        const MAZE: &str = "\
S.#..
..#..
.....
..#.E";
        let grid = MazeGrid::parse(MAZE).unwrap();
        let plain = solve(&grid, Metric::Euclid, 0).unwrap();
        let padded = solve(&grid, Metric::Euclid, 3).unwrap();
        assert_eq!(plain.path, padded.path);
        assert_eq!(plain.field, padded.field);
    }

    #[test]
    fn missing_end_is_reported_before_field_work() {
        let grid = MazeGrid::parse("S....").unwrap();
        assert_eq!(
            solve(&grid, Metric::Manhattan, 0),
            Err(MazeError::NoEnd)
        );
    }

    #[test]
    fn missing_start_is_reported() {
        let grid = MazeGrid::parse("....E").unwrap();
        assert_eq!(
            solve(&grid, Metric::Manhattan, 0),
            Err(MazeError::NoStart)
        );
    }

    #[test]
    fn inflation_can_seal_the_corridor() {
        const MAZE: &str = "\
......
S.o..E";
        let grid = MazeGrid::parse(MAZE).unwrap();
        // hugging the obstacle through the top row is fine
        assert!(solve(&grid, Metric::Manhattan, 0).is_ok());
        // a one-cell band reaches the top row and seals the maze
        assert_eq!(solve(&grid, Metric::Manhattan, 1), Err(MazeError::NoPath));
        // a two-cell band swallows the start itself
        assert_eq!(solve(&grid, Metric::Manhattan, 2), Err(MazeError::NoPath));
    }
}
