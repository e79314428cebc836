//! Axis ranges and boundary slicing.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the three grid axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    /// Longitude
    X,
    /// Latitude
    Y,
    /// Depth
    Z,
}

impl Axis {
    /// All axes in grid nesting order (outermost first).
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// Produce `count` evenly spaced boundaries spanning `[min, max]` inclusive.
///
/// `boundary[m] = min + m * (max - min) / (count - 1)`. The last value is
/// pinned to `max` so the upper edge never drifts by rounding.
pub fn slice(min: f64, max: f64, count: usize) -> Result<Vec<f64>> {
    if count < 2 {
        return Err(Error::invalid(format!(
            "slice count must be at least 2, got {}",
            count
        )));
    }

    Ok(linspace(min, max, count))
}

fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    let step = (max - min) / (count - 1) as f64;
    let mut boundaries: Vec<f64> = (0..count).map(|m| min + m as f64 * step).collect();
    boundaries[count - 1] = max;
    boundaries
}

/// Extent and slice count of one axis.
///
/// Deserialization goes through [`AxisRange::new`], so a deserialized range
/// is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAxisRange", into = "RawAxisRange")]
pub struct AxisRange {
    min: f64,
    max: f64,
    slice_count: usize,
}

/// Unvalidated serialized form of [`AxisRange`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct RawAxisRange {
    min: f64,
    max: f64,
    slice_count: usize,
}

impl TryFrom<RawAxisRange> for AxisRange {
    type Error = Error;

    fn try_from(raw: RawAxisRange) -> Result<Self> {
        Self::new(raw.min, raw.max, raw.slice_count)
    }
}

impl From<AxisRange> for RawAxisRange {
    fn from(range: AxisRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
            slice_count: range.slice_count,
        }
    }
}

impl AxisRange {
    /// Create a validated axis range.
    ///
    /// Fails with [`Error::InvalidConfiguration`] unless both bounds are
    /// finite, `min < max` and `slice_count >= 2`.
    pub fn new(min: f64, max: f64, slice_count: usize) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::invalid(format!(
                "axis bounds must be finite, got [{}, {}]",
                min, max
            )));
        }
        if min >= max {
            return Err(Error::invalid(format!(
                "axis minimum {} must be below maximum {}",
                min, max
            )));
        }
        if slice_count < 2 {
            return Err(Error::invalid(format!(
                "slice count must be at least 2, got {}",
                slice_count
            )));
        }

        Ok(Self {
            min,
            max,
            slice_count,
        })
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of boundary coordinates.
    #[inline]
    pub fn slice_count(&self) -> usize {
        self.slice_count
    }

    /// Number of cells along this axis (`slice_count - 1`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.slice_count - 1
    }

    /// Boundary coordinates for this axis.
    pub fn boundaries(&self) -> Vec<f64> {
        linspace(self.min, self.max, self.slice_count)
    }
}

/// Find the cell index `i` with `boundaries[i] < value <= boundaries[i + 1]`.
///
/// Values at or below the first boundary, above the last one, or NaN have
/// no cell.
#[inline]
pub(crate) fn locate_on_axis(boundaries: &[f64], value: f64) -> Option<usize> {
    let below = boundaries.partition_point(|&b| b < value);
    if below == 0 || below == boundaries.len() {
        None
    } else {
        Some(below - 1)
    }
}
