//! Shortest-path navigation over classified maze grids.
//!
//! This crate computes scalar distance fields over a
//! [`MazeGrid`](mazenav_core::MazeGrid) and reconstructs discrete paths
//! from them:
//!
//! - **Distance fields** rooted at end or obstacle cells, by FIFO
//!   label-correcting relaxation ([`FieldRange::field`])
//! - **Obstacle inflation** deriving a clearance-respecting grid
//!   ([`inflate`])
//! - **Greedy descent** path reconstruction ([`reconstruct`])
//! - **The full pipeline** combining the above ([`solve`])
//!
//! [`FieldRange`] owns and reuses its internal queue and scratch buffers,
//! so repeated builds over same-sized grids only allocate the output
//! field.

mod descent;
mod field;
mod inflate;
mod metric;
mod neighbors;
mod relax;
mod solve;

pub use descent::reconstruct;
pub use field::{DistanceField, INACCESSIBLE};
pub use inflate::inflate;
pub use metric::Metric;
pub use neighbors::Neighbors;
pub use relax::{FieldRange, FieldTarget};
pub use solve::{Solution, solve};
