//! Reduction configuration section.

use serde::{Deserialize, Serialize};

use crate::assign::UnassignedPolicy;

use super::defaults;

/// Per-voxel capping settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReduceSection {
    /// Maximum events kept per voxel (>= 1)
    #[serde(default = "defaults::max_per_voxel")]
    pub max_per_voxel: usize,

    /// What to do with events that fall in no voxel
    #[serde(default)]
    pub unassigned: UnassignedPolicy,
}

impl Default for ReduceSection {
    fn default() -> Self {
        Self {
            max_per_voxel: defaults::max_per_voxel(),
            unassigned: UnassignedPolicy::default(),
        }
    }
}
