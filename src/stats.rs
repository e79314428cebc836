//! Voxel occupancy diagnostics.

use serde::{Deserialize, Serialize};

use crate::assign::AssignedCatalog;
use crate::grid::{Cell, VoxelGrid};

/// Event counts per voxel for one assigned catalog.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OccupancySummary {
    /// Events per voxel, indexed by voxel number
    pub per_voxel: Vec<usize>,
    /// Events with no voxel
    pub unassigned: usize,
}

impl OccupancySummary {
    /// Count events per voxel.
    ///
    /// Voxel numbers outside the grid are counted as unassigned.
    pub fn from_assigned(assigned: &AssignedCatalog, grid: &VoxelGrid) -> Self {
        let mut per_voxel = vec![0usize; grid.len()];
        let mut unassigned = 0;

        for voxel in assigned.voxels() {
            match voxel.and_then(|v| per_voxel.get_mut(v)) {
                Some(count) => *count += 1,
                None => unassigned += 1,
            }
        }

        Self {
            per_voxel,
            unassigned,
        }
    }

    /// Total events counted.
    pub fn total(&self) -> usize {
        self.assigned() + self.unassigned
    }

    /// Events with a voxel.
    pub fn assigned(&self) -> usize {
        self.per_voxel.iter().sum()
    }

    /// Voxels holding at least one event.
    pub fn occupied_voxels(&self) -> usize {
        self.per_voxel.iter().filter(|&&n| n > 0).count()
    }

    /// Largest per-voxel count.
    pub fn max_occupancy(&self) -> usize {
        self.per_voxel.iter().copied().max().unwrap_or(0)
    }

    /// Mean events per occupied voxel.
    pub fn mean_occupancy(&self) -> f64 {
        let occupied = self.occupied_voxels();
        if occupied == 0 {
            0.0
        } else {
            self.assigned() as f64 / occupied as f64
        }
    }

    /// One row per cell for plotting grid occupancy.
    pub fn table(&self, grid: &VoxelGrid) -> Vec<VoxelOccupancy> {
        grid.cells()
            .iter()
            .map(|cell| VoxelOccupancy {
                cell: *cell,
                events: self.per_voxel.get(cell.voxel).copied().unwrap_or(0),
            })
            .collect()
    }
}

/// Voxel metadata row with its event count.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VoxelOccupancy {
    /// Cell geometry and voxel number
    #[serde(flatten)]
    pub cell: Cell,
    /// Events in this voxel
    pub events: usize,
}
