//! Error types for voxel balancing.

use crate::config::ConfigLoadError;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Voxel balancing error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Axis range, slice count, cap or field name is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A required catalog column is missing or has the wrong shape
    #[error("Schema mismatch on field '{field}': {reason}")]
    SchemaMismatch {
        /// Column name
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// An event matched no voxel under the `reject` policy
    #[error("Event at row {row} ({x}, {y}, {z}) lies outside every voxel")]
    UnassignedEvent {
        /// Row index in the input catalog
        row: usize,
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
        /// Z coordinate
        z: f64,
    },

    /// Configuration file could not be loaded
    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }

    pub(crate) fn schema(field: &str, reason: impl Into<String>) -> Self {
        Error::SchemaMismatch {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
