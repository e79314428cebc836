//! # Voxel Balance
//!
//! Spatial balancing of geophysical event catalogs on a regular 3-D grid.
//!
//! ## Overview
//!
//! Event catalogs are dense where recording coverage is dense. This crate
//! bins events into rectangular voxels and keeps at most N events per voxel,
//! preferring events with more observations, to produce a subsample with
//! roughly uniform spatial density.
//!
//! ```text
//! AxisRange ×3 ─► VoxelGrid ─► VoxelAssigner ─► AssignedCatalog ─► VoxelReducer ─► balanced
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use voxel_balance::{BalanceConfig, GeoBalancer};
//!
//! let config = BalanceConfig::load_default()?;
//! let balancer = GeoBalancer::new(&config)?;
//!
//! let outcome = balancer.balance(&catalog)?;
//! println!(
//!     "{} -> {} events in {} voxels",
//!     outcome.assigned.len(),
//!     outcome.balanced.len(),
//!     outcome.after.occupied_voxels()
//! );
//!
//! // Voxel metadata for plotting
//! let table = outcome.after.table(balancer.grid());
//! ```
//!
//! ## Coordinate System
//!
//! - X: longitude (degrees)
//! - Y: latitude (degrees)
//! - Z: depth (km, positive down)
//!
//! Each voxel covers `low < v <= high` on every axis.

#![warn(missing_docs)]

// Event tables
pub mod catalog;

// Grid construction and classification
pub mod grid;

// Unified configuration
pub mod config;

// Point-to-voxel assignment
pub mod assign;

// Per-voxel capping
pub mod reduce;

// Occupancy diagnostics
pub mod stats;

mod error;

// Re-export commonly used types
pub use assign::{AssignedCatalog, UnassignedPolicy, VoxelAssigner};
pub use catalog::{Column, Event, EventCatalog};
pub use config::{BalanceConfig, ConfigLoadError};
pub use error::{Error, Result};
pub use grid::{Axis, AxisRange, Cell, VoxelGrid};
pub use reduce::VoxelReducer;
pub use stats::{OccupancySummary, VoxelOccupancy};

/// Result of one balancing pass
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceOutcome {
    /// Every input event with its voxel
    pub assigned: AssignedCatalog,
    /// Events surviving the per-voxel cap
    pub balanced: AssignedCatalog,
    /// Occupancy before capping
    pub before: OccupancySummary,
    /// Occupancy after capping
    pub after: OccupancySummary,
}

/// Grid, assigner and reducer built once from a configuration.
///
/// The grid is read-only after construction; `balance` may be called any
/// number of times.
#[derive(Clone, Debug)]
pub struct GeoBalancer {
    grid: VoxelGrid,
    assigner: VoxelAssigner,
    reducer: VoxelReducer,
}

impl GeoBalancer {
    /// Validate the configuration and build the grid.
    pub fn new(config: &BalanceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            grid: config.build_grid()?,
            assigner: config.assigner()?,
            reducer: config.reducer()?,
        })
    }

    /// Assemble from parts.
    pub fn from_parts(grid: VoxelGrid, assigner: VoxelAssigner, reducer: VoxelReducer) -> Self {
        Self {
            grid,
            assigner,
            reducer,
        }
    }

    /// The voxel grid.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// The assigner.
    pub fn assigner(&self) -> &VoxelAssigner {
        &self.assigner
    }

    /// The reducer.
    pub fn reducer(&self) -> &VoxelReducer {
        &self.reducer
    }

    /// Assign events to voxels without capping.
    pub fn assign(&self, catalog: &EventCatalog) -> Result<AssignedCatalog> {
        self.assigner.assign(catalog, &self.grid)
    }

    /// Assign, then cap per voxel.
    pub fn balance(&self, catalog: &EventCatalog) -> Result<BalanceOutcome> {
        // Fail on a bad count column before doing any work.
        catalog.counts(self.reducer.count_field())?;

        let assigned = self.assign(catalog)?;
        let before = OccupancySummary::from_assigned(&assigned, &self.grid);

        let balanced = self.reducer.reduce(&assigned)?;
        let after = OccupancySummary::from_assigned(&balanced, &self.grid);

        log::info!(
            "Balanced {} events -> {} across {} occupied voxels (max {} per voxel, {} marked unassigned)",
            assigned.len(),
            balanced.len(),
            after.occupied_voxels(),
            self.reducer.max_per_voxel(),
            before.unassigned
        );

        Ok(BalanceOutcome {
            assigned,
            balanced,
            before,
            after,
        })
    }
}
