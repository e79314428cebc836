//! Typed event rows.

use serde::{Deserialize, Serialize};

/// A single catalog event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
    /// Depth
    pub z: f64,
    /// Number of recording stations
    pub num_obs: i64,
}

impl Event {
    /// Create a new event.
    pub fn new(x: f64, y: f64, z: f64, num_obs: i64) -> Self {
        Self { x, y, z, num_obs }
    }
}
