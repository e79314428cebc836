//! Main BalanceConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assign::VoxelAssigner;
use crate::error::Result;
use crate::grid::VoxelGrid;
use crate::reduce::VoxelReducer;

use super::catalog::CatalogSection;
use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::reduce::ReduceSection;

/// Full balancing configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct BalanceConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Catalog column names
    #[serde(default)]
    pub catalog: CatalogSection,

    /// Capping settings
    #[serde(default)]
    pub reduce: ReduceSection,
}

impl BalanceConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> std::result::Result<String, ConfigLoadError> {
        serde_yaml::to_string(self).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Check every section without building anything
    pub fn validate(&self) -> Result<()> {
        self.grid.axis_ranges()?;
        self.catalog.validate()?;
        VoxelReducer::new(self.reduce.max_per_voxel, &self.catalog.count_field)?;
        Ok(())
    }

    /// Build the voxel grid
    pub fn build_grid(&self) -> Result<VoxelGrid> {
        self.grid.build_grid()
    }

    /// Create the assigner for the configured fields and policy
    pub fn assigner(&self) -> Result<VoxelAssigner> {
        self.catalog.validate()?;
        Ok(VoxelAssigner::new(
            self.catalog.clone(),
            self.reduce.unassigned,
        ))
    }

    /// Create the reducer for the configured cap
    pub fn reducer(&self) -> Result<VoxelReducer> {
        VoxelReducer::new(self.reduce.max_per_voxel, &self.catalog.count_field)
    }
}
