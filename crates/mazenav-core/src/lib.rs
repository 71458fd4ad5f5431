//! **mazenav-core**: foundational types for rasterized-maze navigation.
//!
//! This crate provides the classified grid and its supporting types:
//! geometry primitives, cell classification, the intensity-code mapping
//! used by raster adapters, and the error taxonomy shared across the
//! *mazenav* workspace.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{CellCodes, CellKind};
pub use error::MazeError;
pub use geom::Point;
pub use grid::MazeGrid;
