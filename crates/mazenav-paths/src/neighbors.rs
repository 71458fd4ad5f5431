//! Neighbor enumeration over a distance field in progress.

use mazenav_core::Point;

use crate::field::DistanceField;
use crate::metric::Metric;

/// Append the traversable neighbors of `p` to `buf`, in `dx`-outer,
/// `dy`-inner ascending offset order. The caller clears `buf`.
///
/// A candidate is dropped when it is the center itself, falls outside
/// the field, is a true diagonal under `Manhattan`, or currently reads
/// as the inaccessible sentinel.
///
/// The enumeration order is part of the contract: descent breaks cost
/// ties by first occurrence.
pub(crate) fn collect_into(p: Point, metric: Metric, field: &DistanceField, buf: &mut Vec<Point>) {
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if !metric.diagonals() && dx != 0 && dy != 0 {
                continue;
            }
            let n = p.shift(dx, dy);
            if !field.contains(n) {
                continue;
            }
            if field.at(n) < 0.0 {
                continue;
            }
            buf.push(n);
        }
    }
}

/// Cached neighbor enumeration helper.
///
/// Owns the scratch buffer so repeated queries allocate nothing.
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// The traversable neighbors of `p` under `metric`, given the
    /// current state of `field`.
    pub fn of(&mut self, p: Point, metric: Metric, field: &DistanceField) -> &[Point] {
        self.buf.clear();
        collect_into(p, metric, field, &mut self.buf);
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::INACCESSIBLE;

    fn open_field() -> DistanceField {
        DistanceField::filled(3, 3, f64::INFINITY)
    }

    #[test]
    fn eight_neighbors_in_offset_order() {
        let mut nb = Neighbors::new();
        let got = nb.of(Point::new(1, 1), Metric::Checkerboard, &open_field());
        assert_eq!(
            got,
            &[
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn manhattan_drops_diagonals() {
        let mut nb = Neighbors::new();
        let got = nb.of(Point::new(1, 1), Metric::Manhattan, &open_field());
        assert_eq!(
            got,
            &[
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn bounds_and_sentinels_are_excluded() {
        let mut field = open_field();
        field.set(Point::new(1, 0), INACCESSIBLE);
        let mut nb = Neighbors::new();
        let got = nb.of(Point::new(0, 0), Metric::Euclid, &field);
        assert_eq!(got, &[Point::new(0, 1), Point::new(1, 1)]);
    }
}
