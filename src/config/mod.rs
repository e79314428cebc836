//! Configuration loading for voxel balancing.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//! Defaults are built fresh for every config, never shared.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use voxel_balance::config::BalanceConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = BalanceConfig::load_default()?;
//!
//! // Or use built-in defaults (no file needed)
//! let config = BalanceConfig::default();
//!
//! let grid = config.build_grid()?;
//! let assigner = config.assigner()?;
//! let reducer = config.reducer()?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Per-axis min, max and slice count |
//! | [`CatalogSection`] | Coordinate and observation-count column names |
//! | [`ReduceSection`] | Per-voxel cap and unassigned-event policy |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   x: { min: -113.5, max: -109.0, slices: 35 }   # longitude
//!   y: { min: 43.7, max: 45.7, slices: 35 }       # latitude
//!   z: { min: 0.0, max: 25.0, slices: 6 }         # depth (km)
//!
//! catalog:
//!   x_field: EqLon
//!   y_field: EqLat
//!   z_field: EqDep
//!   count_field: num_obs
//!
//! reduce:
//!   max_per_voxel: 10
//!   unassigned: mark      # mark | collapse | reject
//! ```

mod balance;
mod catalog;
mod defaults;
mod error;
mod grid;
mod reduce;

// Re-export main types
pub use balance::BalanceConfig;
pub use error::ConfigLoadError;

// Re-export section types
pub use catalog::CatalogSection;
pub use grid::{AxisSection, GridSection};
pub use reduce::ReduceSection;
