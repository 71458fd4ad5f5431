//! Multi-source label-correcting field relaxation.

use std::collections::VecDeque;

use mazenav_core::{CellKind, MazeGrid, Point};

use crate::field::{DistanceField, INACCESSIBLE};
use crate::metric::Metric;
use crate::neighbors;

/// Which cell kind a distance field is rooted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldTarget {
    /// Root the field at end cells. Walls and obstacles are both
    /// inaccessible: obstacles cannot be crossed on the way to the end.
    End,
    /// Root the field at obstacle cells, measuring clearance. Only
    /// walls are inaccessible.
    Obstacles,
}

impl FieldTarget {
    fn kind(self) -> CellKind {
        match self {
            FieldTarget::End => CellKind::End,
            FieldTarget::Obstacles => CellKind::Obstacle,
        }
    }
}

/// Reusable relaxation state for building distance fields.
///
/// Owns the FIFO queue, the queued-cell flags, and the neighbor scratch
/// buffer, so repeated builds over same-sized grids only allocate the
/// output field.
pub struct FieldRange {
    width: i32,
    height: i32,
    queue: VecDeque<usize>,
    queued: Vec<bool>,
    nbuf: Vec<Point>,
}

impl FieldRange {
    /// Create relaxation state for `width × height` grids.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            queue: VecDeque::new(),
            queued: vec![false; (w * h) as usize],
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Adapt to a new grid size. Keeps the flag allocation when the new
    /// size fits within existing capacity.
    pub fn set_size(&mut self, width: i32, height: i32) {
        self.width = width.max(0);
        self.height = height.max(0);
        let len = (self.width * self.height) as usize;
        self.queue.clear();
        if len > self.queued.len() {
            self.queued.resize(len, false);
        }
    }

    /// Build a distance field over `grid` rooted at `target` cells.
    ///
    /// Initialization: target cells start at `0` and seed the queue;
    /// walls (plus obstacles when targeting the end) are
    /// [`INACCESSIBLE`]; everything else starts infinite. The FIFO
    /// relaxation then repeatedly pops a cell, pulls it down to the
    /// cheapest neighbor-plus-step value, pushes improvements back out
    /// to its neighbors, and enqueues any neighbor whose value dropped.
    /// Cells in unreachable pockets stay at [`f64::INFINITY`]; callers
    /// must treat that as "no path".
    ///
    /// The input grid is not modified. A grid without target cells
    /// yields an all-infinite field.
    pub fn field(&mut self, grid: &MazeGrid, metric: Metric, target: FieldTarget) -> DistanceField {
        if grid.width() != self.width || grid.height() != self.height {
            self.set_size(grid.width(), grid.height());
        }
        let mut field = DistanceField::filled(self.width, self.height, f64::INFINITY);
        self.queue.clear();
        for q in self.queued.iter_mut() {
            *q = false;
        }

        let target_kind = target.kind();
        for x in 0..self.width {
            for y in 0..self.height {
                let p = Point::new(x, y);
                let Some(kind) = grid.at(p) else { continue };
                if kind == target_kind {
                    field.set(p, 0.0);
                    let i = self.index(p);
                    self.queued[i] = true;
                    self.queue.push_back(i);
                } else if kind == CellKind::Wall
                    || (target == FieldTarget::End && kind == CellKind::Obstacle)
                {
                    field.set(p, INACCESSIBLE);
                }
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.queue.pop_front() {
            self.queued[ci] = false;
            let cp = self.point(ci);

            nbuf.clear();
            neighbors::collect_into(cp, metric, &field, &mut nbuf);

            // Pull the center down to its cheapest neighbor first, so
            // the pushes below propagate the freshest value.
            let mut own = field.at(cp);
            for &np in nbuf.iter() {
                let relaxed = field.at(np) + metric.cost(cp, np);
                if own > relaxed {
                    own = relaxed;
                }
            }
            field.set(cp, own);

            for &np in nbuf.iter() {
                let relaxed = own + metric.cost(cp, np);
                if field.at(np) > relaxed {
                    field.set(np, relaxed);
                    let ni = self.index(np);
                    if !self.queued[ni] {
                        self.queued[ni] = true;
                        self.queue.push_back(ni);
                    }
                }
            }
        }

        self.nbuf = nbuf;
        field
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }
}
