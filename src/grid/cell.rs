//! Voxel cell geometry.

use serde::{Deserialize, Serialize};

/// Grid index of a voxel as `(i, j, k)` along X, Y and Z.
pub type VoxelIndex = (usize, usize, usize);

/// A single voxel: its coordinate range and midpoint on each axis.
///
/// A cell covers `low < v <= high` on every axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Linear voxel number (enumeration order of the grid)
    pub voxel: usize,
    /// Grid index `(i, j, k)`
    pub index: VoxelIndex,
    /// X range `(low, high)`
    pub x_range: (f64, f64),
    /// Y range `(low, high)`
    pub y_range: (f64, f64),
    /// Z range `(low, high)`
    pub z_range: (f64, f64),
    /// X midpoint
    pub x_mid: f64,
    /// Y midpoint
    pub y_mid: f64,
    /// Z midpoint
    pub z_mid: f64,
}

impl Cell {
    pub(crate) fn new(
        voxel: usize,
        index: VoxelIndex,
        x_range: (f64, f64),
        y_range: (f64, f64),
        z_range: (f64, f64),
    ) -> Self {
        Self {
            voxel,
            index,
            x_range,
            y_range,
            z_range,
            x_mid: midpoint(x_range),
            y_mid: midpoint(y_range),
            z_mid: midpoint(z_range),
        }
    }

    /// Whether the point lies in this cell (low-exclusive, high-inclusive).
    #[inline]
    pub fn contains(&self, x: f64, y: f64, z: f64) -> bool {
        in_range(self.x_range, x) && in_range(self.y_range, y) && in_range(self.z_range, z)
    }

    /// Cell volume in coordinate units.
    pub fn volume(&self) -> f64 {
        (self.x_range.1 - self.x_range.0)
            * (self.y_range.1 - self.y_range.0)
            * (self.z_range.1 - self.z_range.0)
    }
}

#[inline]
fn in_range(range: (f64, f64), v: f64) -> bool {
    v > range.0 && v <= range.1
}

#[inline]
fn midpoint(range: (f64, f64)) -> f64 {
    (range.0 + range.1) / 2.0
}
