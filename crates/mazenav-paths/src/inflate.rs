//! Obstacle clearance inflation.

use mazenav_core::{CellKind, MazeGrid};

use crate::field::DistanceField;

/// Derive a grid in which every cell within `clearance` of an obstacle
/// is reclassified as a wall.
///
/// `obstacle_field` must be rooted at
/// [`FieldTarget::Obstacles`](crate::FieldTarget::Obstacles). Obstacles
/// themselves read `0` and walls read the negative sentinel, so both
/// compare `<=` any non-negative clearance and are swept into the wall
/// class along with the surrounding band. All other cells keep their
/// original kind. The input grid is not modified.
pub fn inflate(grid: &MazeGrid, obstacle_field: &DistanceField, clearance: f64) -> MazeGrid {
    grid.map(|p, kind| {
        if obstacle_field.at(p) <= clearance {
            CellKind::Wall
        } else {
            kind
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::Metric;
    use crate::relax::{FieldRange, FieldTarget};
    use mazenav_core::Point;

    #[test]
    fn band_around_obstacle_becomes_wall() {
        const MAZE: &str = "\
.....
..o..
.....
S...E";
        let grid = MazeGrid::parse(MAZE).unwrap();
        let mut range = FieldRange::new(grid.width(), grid.height());
        let obstacles = range.field(&grid, Metric::Checkerboard, FieldTarget::Obstacles);
        let inflated = inflate(&grid, &obstacles, 1.0);

        // the obstacle and its full 8-ring are walls now
        for y in 0..=2 {
            for x in 1..=3 {
                assert_eq!(inflated.at(Point::new(x, y)), Some(CellKind::Wall));
            }
        }
        // cells at clearance 2 keep their kind
        assert_eq!(inflated.at(Point::new(0, 0)), Some(CellKind::Background));
        assert_eq!(inflated.at(Point::new(4, 1)), Some(CellKind::Background));
        assert_eq!(inflated.at(Point::new(0, 3)), Some(CellKind::Start));
        assert_eq!(inflated.at(Point::new(4, 3)), Some(CellKind::End));
        // and the input grid is untouched
        assert_eq!(grid.at(Point::new(2, 1)), Some(CellKind::Obstacle));
    }

    #[test]
    fn reclassification_matches_the_field_exactly() {
        const MAZE: &str = "\
#..o...
S......
......E";
        let grid = MazeGrid::parse(MAZE).unwrap();
        let mut range = FieldRange::new(grid.width(), grid.height());
        for metric in Metric::ALL {
            let obstacles = range.field(&grid, metric, FieldTarget::Obstacles);
            let clearance = 2.0;
            let inflated = inflate(&grid, &obstacles, clearance);
            for (p, kind) in inflated.iter() {
                if obstacles.at(p) <= clearance {
                    assert_eq!(kind, CellKind::Wall, "at {p}");
                } else {
                    assert_eq!(kind, grid.at(p).unwrap(), "at {p}");
                }
            }
        }
    }

    #[test]
    fn zero_clearance_still_walls_the_obstacle_itself() {
        let grid = MazeGrid::parse("S.o.E").unwrap();
        let mut range = FieldRange::new(grid.width(), grid.height());
        let obstacles = range.field(&grid, Metric::Manhattan, FieldTarget::Obstacles);
        let inflated = inflate(&grid, &obstacles, 0.0);
        assert_eq!(inflated.at(Point::new(2, 0)), Some(CellKind::Wall));
        assert_eq!(inflated.at(Point::new(1, 0)), Some(CellKind::Background));
    }
}
