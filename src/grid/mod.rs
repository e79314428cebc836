//! Voxel grid construction and point classification.
//!
//! ## Architecture
//!
//! ```text
//! AxisRange (X) ─┐
//! AxisRange (Y) ─┼─► slice() ×3 ─► VoxelGrid::build ─► cells[voxel]
//! AxisRange (Z) ─┘                       │
//!                                        ▼
//!                          locate(x, y, z) -> Option<voxel>
//! ```
//!
//! ## Boundary Semantics
//!
//! Each cell covers `low < v <= high` on every axis. A coordinate equal to
//! a shared boundary belongs to the lower cell; a coordinate equal to the
//! global axis minimum belongs to no cell.
//!
//! ## Example
//!
//! ```rust,ignore
//! use voxel_balance::grid::{AxisRange, VoxelGrid};
//!
//! let grid = VoxelGrid::build(
//!     AxisRange::new(-113.5, -109.0, 35)?,
//!     AxisRange::new(43.7, 45.7, 35)?,
//!     AxisRange::new(0.0, 25.0, 6)?,
//! );
//! let voxel = grid.locate(-111.2, 44.6, 7.3);
//! ```

mod axis;
mod cell;
mod voxel_grid;

pub use axis::{Axis, AxisRange, slice};
pub use cell::{Cell, VoxelIndex};
pub use voxel_grid::VoxelGrid;
