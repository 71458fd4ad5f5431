//! Neighbor-distance metrics.

use std::f64::consts::SQRT_2;
use std::fmt;

use mazenav_core::Point;

/// The neighbor-distance policy shared by field relaxation and descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// All 8 neighbors, every step cost 1 (Chebyshev moves).
    Checkerboard,
    /// All 8 neighbors; axis-aligned steps cost 1, diagonals √2.
    Euclid,
    /// 4 neighbors only; diagonal moves are not offered at all.
    Manhattan,
}

impl Metric {
    /// Every metric, in presentation order.
    pub const ALL: [Metric; 3] = [Metric::Checkerboard, Metric::Euclid, Metric::Manhattan];

    /// Traversal cost between `from` and a cell of its 3×3 block.
    ///
    /// Orthogonal moves (and the degenerate `from == to` query) cost 1
    /// under every metric. A true diagonal costs 1 under `Checkerboard`,
    /// √2 under `Euclid`, and is infinite under `Manhattan`, which
    /// forbids diagonal traversal outright.
    pub fn cost(self, from: Point, to: Point) -> f64 {
        if from.x == to.x || from.y == to.y {
            return 1.0;
        }
        match self {
            Metric::Checkerboard => 1.0,
            Metric::Euclid => SQRT_2,
            Metric::Manhattan => f64::INFINITY,
        }
    }

    /// Whether true diagonals are enumerable neighbors.
    #[inline]
    pub fn diagonals(self) -> bool {
        !matches!(self, Metric::Manhattan)
    }

    /// Parse a metric from its display name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "checkerboard" => Some(Metric::Checkerboard),
            "euclid" => Some(Metric::Euclid),
            "manhattan" => Some(Metric::Manhattan),
            _ => None,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Checkerboard => "Checkerboard",
            Metric::Euclid => "Euclid",
            Metric::Manhattan => "Manhattan",
        };
        f.write_str(name)
    }
}
