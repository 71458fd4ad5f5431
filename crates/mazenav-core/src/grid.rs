//! The [`MazeGrid`] type, a dense grid of classified cells.
//!
//! A grid is validated at construction and read-only afterwards. Derived
//! grids (such as obstacle-inflated variants) are new values produced by
//! [`map`](MazeGrid::map); the original stays intact so later pipeline
//! stages can still consult it.

use crate::cell::{CellCodes, CellKind};
use crate::error::MazeError;
use crate::geom::Point;

/// A dense `width × height` grid of [`CellKind`]s in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeGrid {
    width: i32,
    height: i32,
    cells: Vec<CellKind>,
}

impl MazeGrid {
    /// Create a new grid filled with [`CellKind::Background`].
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            width: w,
            height: h,
            cells: vec![CellKind::Background; (w * h) as usize],
        }
    }

    /// Build a grid from a closure over each point, row-major.
    pub fn from_fn(width: i32, height: i32, mut f: impl FnMut(Point) -> CellKind) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        let mut cells = Vec::with_capacity((w * h) as usize);
        for y in 0..h {
            for x in 0..w {
                cells.push(f(Point::new(x, y)));
            }
        }
        Self {
            width: w,
            height: h,
            cells,
        }
    }

    /// Decode a raw intensity buffer (row-major, `width * height` bytes)
    /// into a classified grid.
    ///
    /// Every code must map to one of the five recognized kinds under
    /// `codes`; the first offending byte aborts the decode, before any
    /// algorithm can run on the grid.
    pub fn decode(
        width: i32,
        height: i32,
        raw: &[u8],
        codes: &CellCodes,
    ) -> Result<Self, MazeError> {
        let w = width.max(0);
        let h = height.max(0);
        let expected = (w * h) as usize;
        if raw.len() != expected {
            return Err(MazeError::SizeMismatch {
                expected,
                actual: raw.len(),
            });
        }
        let mut cells = Vec::with_capacity(expected);
        for (i, &code) in raw.iter().enumerate() {
            match codes.kind_of(code) {
                Some(kind) => cells.push(kind),
                None => {
                    return Err(MazeError::InvalidCell {
                        pos: Point::new(i as i32 % w, i as i32 / w),
                        code,
                    });
                }
            }
        }
        Ok(Self {
            width: w,
            height: h,
            cells,
        })
    }

    /// Parse an ASCII-art maze.
    ///
    /// Lines must all have the same width. Recognized runes are
    /// `.` background, `#` wall, `S` start, `E` end, `o` obstacle.
    /// Leading and trailing whitespace is trimmed from the whole string
    /// but not from individual lines.
    pub fn parse(text: &str) -> Result<Self, MazeError> {
        let text = text.trim();
        let mut cells = Vec::new();
        let mut width: i32 = -1;
        let mut y: i32 = 0;

        for line in text.lines() {
            let mut x: i32 = 0;
            for ch in line.chars() {
                match CellKind::from_rune(ch) {
                    Some(kind) => cells.push(kind),
                    None => {
                        return Err(MazeError::InvalidRune {
                            pos: Point::new(x, y),
                            ch,
                        });
                    }
                }
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(MazeError::InconsistentRow {
                    row: y,
                    len: x as usize,
                    expected: width as usize,
                });
            }
            y += 1;
        }

        Ok(Self {
            width: width.max(0),
            height: y,
            cells,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has zero cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    /// The kind at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<CellKind> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[(p.y * self.width + p.x) as usize])
    }

    /// Produce a new grid by applying `f` to every cell.
    ///
    /// The receiver is left untouched.
    pub fn map(&self, mut f: impl FnMut(Point, CellKind) -> CellKind) -> MazeGrid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x, y);
                cells.push(f(p, self.cells[(y * self.width + x) as usize]));
            }
        }
        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Count cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// All positions of the given kind, scanned column by column
    /// (x outer, y inner).
    ///
    /// The scan order is load-bearing: start selection breaks ties by
    /// first occurrence in this order.
    pub fn positions_of(&self, kind: CellKind) -> Vec<Point> {
        let mut out = Vec::new();
        for x in 0..self.width {
            for y in 0..self.height {
                let p = Point::new(x, y);
                if self.cells[(y * self.width + x) as usize] == kind {
                    out.push(p);
                }
            }
        }
        out
    }

    /// Row-major iterator over `(Point, CellKind)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter { grid: self, idx: 0 }
    }

    /// Render the grid as ASCII art, the inverse of [`parse`](Self::parse).
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.len() + self.height as usize).max(1));
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.cells[(y * self.width + x) as usize].rune());
            }
            out.push('\n');
        }
        out
    }
}

/// Iterator over `(Point, CellKind)` pairs of a [`MazeGrid`].
pub struct GridIter<'a> {
    grid: &'a MazeGrid,
    idx: usize,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, CellKind);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.grid.cells.len() {
            return None;
        }
        let w = self.grid.width;
        let p = Point::new(self.idx as i32 % w, self.idx as i32 / w);
        let kind = self.grid.cells[self.idx];
        self.idx += 1;
        Some((p, kind))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.cells.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a MazeGrid {
    type Item = (Point, CellKind);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}
