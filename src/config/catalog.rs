//! Catalog field-name section.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::defaults;

/// Names of the catalog columns read during balancing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Longitude column
    #[serde(default = "defaults::x_field")]
    pub x_field: String,

    /// Latitude column
    #[serde(default = "defaults::y_field")]
    pub y_field: String,

    /// Depth column
    #[serde(default = "defaults::z_field")]
    pub z_field: String,

    /// Observation-count column (integer)
    #[serde(default = "defaults::count_field")]
    pub count_field: String,
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            x_field: defaults::x_field(),
            y_field: defaults::y_field(),
            z_field: defaults::z_field(),
            count_field: defaults::count_field(),
        }
    }
}

impl CatalogSection {
    /// Coordinate column names `[x, y, z]`
    pub fn coordinate_fields(&self) -> [&str; 3] {
        [&self.x_field, &self.y_field, &self.z_field]
    }

    /// Reject empty field names
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("x_field", &self.x_field),
            ("y_field", &self.y_field),
            ("z_field", &self.z_field),
            ("count_field", &self.count_field),
        ];
        for (key, name) in fields {
            if name.trim().is_empty() {
                return Err(Error::invalid(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }
}
