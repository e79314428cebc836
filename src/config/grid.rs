//! Grid configuration section.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::{AxisRange, VoxelGrid};

use super::defaults;

/// Extent and slice count of one axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSection {
    /// Lower bound (exclusive for classification)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
    /// Number of boundary coordinates, including both ends
    pub slices: usize,
}

impl AxisSection {
    /// Validate into an [`AxisRange`]
    pub fn to_axis_range(&self) -> Result<AxisRange> {
        AxisRange::new(self.min, self.max, self.slices)
    }
}

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Longitude axis
    #[serde(default = "defaults::x_axis")]
    pub x: AxisSection,

    /// Latitude axis
    #[serde(default = "defaults::y_axis")]
    pub y: AxisSection,

    /// Depth axis
    #[serde(default = "defaults::z_axis")]
    pub z: AxisSection,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            x: defaults::x_axis(),
            y: defaults::y_axis(),
            z: defaults::z_axis(),
        }
    }
}

impl GridSection {
    /// Validated axis ranges `[x, y, z]`
    pub fn axis_ranges(&self) -> Result<[AxisRange; 3]> {
        Ok([
            self.x.to_axis_range()?,
            self.y.to_axis_range()?,
            self.z.to_axis_range()?,
        ])
    }

    /// Validate and build the voxel grid
    pub fn build_grid(&self) -> Result<VoxelGrid> {
        let [x, y, z] = self.axis_ranges()?;
        Ok(VoxelGrid::build(x, y, z))
    }

    /// Number of voxels this section produces, without building the grid
    pub fn voxel_count(&self) -> usize {
        [self.x, self.y, self.z]
            .iter()
            .map(|a| a.slices.saturating_sub(1))
            .product()
    }
}
