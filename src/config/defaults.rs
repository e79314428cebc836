//! Default value functions for serde deserialization.
//!
//! Every call builds a fresh value; nothing is shared between configs.

use super::grid::AxisSection;

pub fn x_axis() -> AxisSection {
    AxisSection {
        min: -113.5,
        max: -109.0,
        slices: 35,
    }
}

pub fn y_axis() -> AxisSection {
    AxisSection {
        min: 43.7,
        max: 45.7,
        slices: 35,
    }
}

pub fn z_axis() -> AxisSection {
    AxisSection {
        min: 0.0,
        max: 25.0,
        slices: 6,
    }
}

pub fn x_field() -> String {
    "EqLon".to_string()
}

pub fn y_field() -> String {
    "EqLat".to_string()
}

pub fn z_field() -> String {
    "EqDep".to_string()
}

pub fn count_field() -> String {
    "num_obs".to_string()
}

pub fn max_per_voxel() -> usize {
    10
}
