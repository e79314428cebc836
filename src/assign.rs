//! Point-to-voxel assignment.
//!
//! Every event is classified against the grid with a per-axis binary search
//! (see [`VoxelGrid::locate`]). The result is identical to testing every
//! cell's bounds in voxel order, which [`VoxelGrid::locate_by_scan`] does.
//!
//! Events that match no cell (outside the bounding box, exactly on an axis
//! minimum, or with a NaN coordinate) are handled by [`UnassignedPolicy`].

use serde::{Deserialize, Serialize};

use crate::catalog::{Column, EventCatalog};
use crate::config::CatalogSection;
use crate::error::{Error, Result};
use crate::grid::VoxelGrid;

/// Name of the voxel column added by [`AssignedCatalog::to_catalog`].
pub const VOXEL_FIELD: &str = "voxel";

/// Integer written for unassigned rows in the exported voxel column.
pub const UNASSIGNED_VOXEL: i64 = -1;

/// Handling of events that fall in no voxel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnassignedPolicy {
    /// Leave the voxel empty (`None`), distinct from every real voxel
    #[default]
    Mark,
    /// Put the event in voxel 0 (legacy catalog-tool behavior)
    Collapse,
    /// Fail the batch on the first such event
    Reject,
}

/// Events annotated with their voxel numbers.
///
/// Holds exactly one voxel entry per catalog row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssignedCatalog", into = "RawAssignedCatalog")]
pub struct AssignedCatalog {
    catalog: EventCatalog,
    voxels: Vec<Option<usize>>,
}

/// Unvalidated serialized form of [`AssignedCatalog`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawAssignedCatalog {
    catalog: EventCatalog,
    voxels: Vec<Option<usize>>,
}

impl TryFrom<RawAssignedCatalog> for AssignedCatalog {
    type Error = Error;

    fn try_from(raw: RawAssignedCatalog) -> Result<Self> {
        Self::from_parts(raw.catalog, raw.voxels)
    }
}

impl From<AssignedCatalog> for RawAssignedCatalog {
    fn from(assigned: AssignedCatalog) -> Self {
        let (catalog, voxels) = assigned.into_parts();
        Self { catalog, voxels }
    }
}

impl AssignedCatalog {
    /// Pair a catalog with per-row voxels.
    ///
    /// Fails with [`Error::SchemaMismatch`] unless there is one voxel entry
    /// per catalog row.
    pub fn from_parts(catalog: EventCatalog, voxels: Vec<Option<usize>>) -> Result<Self> {
        if voxels.len() != catalog.len() {
            return Err(Error::schema(
                VOXEL_FIELD,
                format!("expected {} rows, got {}", catalog.len(), voxels.len()),
            ));
        }
        Ok(Self { catalog, voxels })
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    /// True if there are no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    /// Source columns.
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Voxel of each row (`None` = unassigned).
    pub fn voxels(&self) -> &[Option<usize>] {
        &self.voxels
    }

    /// Voxel of a single row.
    pub fn voxel(&self, row: usize) -> Option<usize> {
        self.voxels.get(row).copied().flatten()
    }

    /// Rows without a voxel.
    pub fn unassigned_count(&self) -> usize {
        self.voxels.iter().filter(|v| v.is_none()).count()
    }

    /// Voxel numbers as a plain integer column.
    pub fn voxel_column(&self) -> Vec<i64> {
        self.voxels
            .iter()
            .map(|v| v.map_or(UNASSIGNED_VOXEL, |n| n as i64))
            .collect()
    }

    /// Source catalog with an added integer `voxel` column.
    pub fn to_catalog(&self) -> Result<EventCatalog> {
        self.catalog
            .clone()
            .with_column(VOXEL_FIELD, Column::Int(self.voxel_column()))
    }

    /// Rows in the given order, keeping their voxels.
    pub fn select(&self, rows: &[usize]) -> Self {
        Self {
            catalog: self.catalog.select(rows),
            voxels: rows.iter().map(|&r| self.voxels[r]).collect(),
        }
    }

    /// Split back into catalog and voxel column.
    pub fn into_parts(self) -> (EventCatalog, Vec<Option<usize>>) {
        (self.catalog, self.voxels)
    }
}

/// Classifies catalog events into voxels.
#[derive(Clone, Debug)]
pub struct VoxelAssigner {
    fields: CatalogSection,
    policy: UnassignedPolicy,
}

impl VoxelAssigner {
    /// Create an assigner reading the given coordinate columns.
    pub fn new(fields: CatalogSection, policy: UnassignedPolicy) -> Self {
        Self { fields, policy }
    }

    /// Column names in use.
    pub fn fields(&self) -> &CatalogSection {
        &self.fields
    }

    /// Unassigned-event policy in use.
    pub fn policy(&self) -> UnassignedPolicy {
        self.policy
    }

    /// Assign every event to a voxel.
    ///
    /// The input catalog is not modified; the result holds a copy.
    ///
    /// # Errors
    /// - [`Error::SchemaMismatch`] if a coordinate column is missing
    /// - [`Error::UnassignedEvent`] under [`UnassignedPolicy::Reject`]
    pub fn assign(&self, catalog: &EventCatalog, grid: &VoxelGrid) -> Result<AssignedCatalog> {
        let [x_field, y_field, z_field] = self.fields.coordinate_fields();
        let xs = catalog.coordinates(x_field)?;
        let ys = catalog.coordinates(y_field)?;
        let zs = catalog.coordinates(z_field)?;

        let mut voxels = Vec::with_capacity(catalog.len());
        let mut unassigned = 0usize;

        for (row, ((&x, &y), &z)) in xs.iter().zip(ys.iter()).zip(zs.iter()).enumerate() {
            let voxel = match grid.locate(x, y, z) {
                Some(v) => Some(v),
                None => {
                    unassigned += 1;
                    match self.policy {
                        UnassignedPolicy::Mark => None,
                        UnassignedPolicy::Collapse => Some(0),
                        UnassignedPolicy::Reject => {
                            return Err(Error::UnassignedEvent { row, x, y, z });
                        }
                    }
                }
            };
            voxels.push(voxel);
        }

        if unassigned > 0 {
            log::warn!(
                "{} of {} events lie outside the voxel grid (policy: {:?})",
                unassigned,
                catalog.len(),
                self.policy
            );
        }
        log::debug!(
            "Assigned {} events to {} voxels",
            catalog.len() - unassigned,
            grid.len()
        );

        Ok(AssignedCatalog {
            catalog: catalog.clone(),
            voxels,
        })
    }
}

impl Default for VoxelAssigner {
    fn default() -> Self {
        Self::new(CatalogSection::default(), UnassignedPolicy::default())
    }
}
