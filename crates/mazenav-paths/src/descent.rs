//! Greedy shortest-path reconstruction by local descent.

use mazenav_core::{CellKind, MazeError, MazeGrid, Point};

use crate::field::DistanceField;
use crate::metric::Metric;
use crate::neighbors;

/// Walk from the best start cell of `grid` down an end-rooted `field`.
///
/// The start cell with the smallest field value wins; ties go to the
/// first one in the grid's x-outer scan order. Each step then moves to
/// the neighbor minimizing `field[n] + cost`, with ties broken by the
/// enumeration order, until a cell with field value `<= 0` (a target)
/// is appended. The returned path includes both endpoints.
///
/// `grid` supplies only the start cells, so it may be the pre-inflation
/// original while `field` was built over an inflated variant.
///
/// # Errors
///
/// [`MazeError::NoStart`] when the grid has no start cell at all, and
/// [`MazeError::NoPath`] when no start can reach a target: every start
/// is walled in or was swallowed by inflation, a step finds no eligible
/// neighbor, or the walk fails to descend.
pub fn reconstruct(
    grid: &MazeGrid,
    field: &DistanceField,
    metric: Metric,
) -> Result<Vec<Point>, MazeError> {
    let starts = grid.positions_of(CellKind::Start);
    if starts.is_empty() {
        return Err(MazeError::NoStart);
    }

    // Sentinel and infinite values are not distances: a start holding
    // one cannot reach any target and is skipped.
    let mut best: Option<(Point, f64)> = None;
    for &s in &starts {
        let v = field.at(s);
        if v < 0.0 || !v.is_finite() {
            continue;
        }
        if best.is_none_or(|(_, bv)| v < bv) {
            best = Some((s, v));
        }
    }
    let Some((start, _)) = best else {
        return Err(MazeError::NoPath);
    };

    let mut path = vec![start];
    let mut current = start;
    let mut nbuf: Vec<Point> = Vec::with_capacity(8);

    // A converged field descends strictly, so any walk longer than the
    // cell count is going in circles.
    for _ in 0..grid.len() {
        nbuf.clear();
        neighbors::collect_into(current, metric, field, &mut nbuf);

        let mut chosen: Option<(Point, f64)> = None;
        for &n in nbuf.iter() {
            let key = field.at(n) + metric.cost(current, n);
            if chosen.is_none_or(|(_, k)| key < k) {
                chosen = Some((n, key));
            }
        }
        let Some((next, _)) = chosen else {
            return Err(MazeError::NoPath);
        };
        if !field.at(next).is_finite() {
            return Err(MazeError::NoPath);
        }

        path.push(next);
        current = next;
        if field.at(next) <= 0.0 {
            return Ok(path);
        }
    }
    Err(MazeError::NoPath)
}
