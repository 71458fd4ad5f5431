//! Cell classification and the intensity-code mapping.

/// Classification of a single maze cell.
///
/// Every cell of a [`MazeGrid`](crate::MazeGrid) carries exactly one of
/// these five kinds, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Open space.
    Background,
    /// Impassable under every metric.
    Wall,
    /// A candidate path origin. A grid may carry several.
    Start,
    /// A path target. A grid may carry several.
    End,
    /// Passable terrain that paths must avoid, with optional clearance.
    Obstacle,
}

impl CellKind {
    /// Character representation, used by text fixtures and demos.
    pub const fn rune(self) -> char {
        match self {
            CellKind::Background => '.',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Obstacle => 'o',
        }
    }

    /// Parse a character representation. `None` for unknown runes.
    pub const fn from_rune(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(CellKind::Background),
            '#' => Some(CellKind::Wall),
            'S' => Some(CellKind::Start),
            'E' => Some(CellKind::End),
            'o' => Some(CellKind::Obstacle),
            _ => None,
        }
    }
}

/// Mapping from 8-bit raster intensities to cell kinds.
///
/// Raster adapters classify pixels by intensity before handing the grid
/// to the solver. The mapping is injected rather than hard-coded; the
/// default matches the conventional encoding of the source rasters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCodes {
    pub background: u8,
    pub wall: u8,
    pub start: u8,
    pub end: u8,
    pub obstacle: u8,
}

impl Default for CellCodes {
    fn default() -> Self {
        Self {
            background: 255,
            wall: 0,
            start: 60,
            end: 120,
            obstacle: 180,
        }
    }
}

impl CellCodes {
    /// Classify an intensity code. `None` if the code is not one of the
    /// five recognized values.
    pub fn kind_of(&self, code: u8) -> Option<CellKind> {
        if code == self.background {
            Some(CellKind::Background)
        } else if code == self.wall {
            Some(CellKind::Wall)
        } else if code == self.start {
            Some(CellKind::Start)
        } else if code == self.end {
            Some(CellKind::End)
        } else if code == self.obstacle {
            Some(CellKind::Obstacle)
        } else {
            None
        }
    }

    /// The intensity code of a kind.
    pub fn code_of(&self, kind: CellKind) -> u8 {
        match kind {
            CellKind::Background => self.background,
            CellKind::Wall => self.wall,
            CellKind::Start => self.start,
            CellKind::End => self.end,
            CellKind::Obstacle => self.obstacle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_codes_round_trip() {
        let codes = CellCodes::default();
        for kind in [
            CellKind::Background,
            CellKind::Wall,
            CellKind::Start,
            CellKind::End,
            CellKind::Obstacle,
        ] {
            assert_eq!(codes.kind_of(codes.code_of(kind)), Some(kind));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let codes = CellCodes::default();
        assert_eq!(codes.kind_of(99), None);
    }

    #[test]
    fn runes_round_trip() {
        for kind in [
            CellKind::Background,
            CellKind::Wall,
            CellKind::Start,
            CellKind::End,
            CellKind::Obstacle,
        ] {
            assert_eq!(CellKind::from_rune(kind.rune()), Some(kind));
        }
        assert_eq!(CellKind::from_rune('?'), None);
    }
}
