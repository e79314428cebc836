//! Per-voxel capping.
//!
//! Keeps at most `max_per_voxel` events in each voxel, preferring events
//! with more observations. Ties keep input order (stable sort), so the
//! result is reproducible.
//!
//! Output is grouped by voxel in ascending voxel order, with the unassigned
//! group (if any) last, and by observation count descending within a group.

use std::cmp::Reverse;

use crate::assign::AssignedCatalog;
use crate::error::{Error, Result};

/// Row indices surviving the cap, in output order.
///
/// `voxels` and `counts` are parallel per-row slices.
pub fn select_rows(voxels: &[Option<usize>], counts: &[i64], max_per_voxel: usize) -> Vec<usize> {
    debug_assert_eq!(voxels.len(), counts.len());

    let mut order: Vec<usize> = (0..voxels.len()).collect();
    order.sort_by_key(|&r| (voxels[r].is_none(), voxels[r], Reverse(counts[r])));

    let mut kept = Vec::with_capacity(order.len());
    let mut current: Option<Option<usize>> = None;
    let mut taken = 0usize;

    for r in order {
        if current != Some(voxels[r]) {
            current = Some(voxels[r]);
            taken = 0;
        }
        if taken < max_per_voxel {
            kept.push(r);
            taken += 1;
        }
    }

    kept
}

/// Caps the number of events per voxel.
#[derive(Clone, Debug)]
pub struct VoxelReducer {
    max_per_voxel: usize,
    count_field: String,
}

impl VoxelReducer {
    /// Create a reducer.
    ///
    /// Fails with [`Error::InvalidConfiguration`] if `max_per_voxel` is 0
    /// or the count field name is empty.
    pub fn new(max_per_voxel: usize, count_field: &str) -> Result<Self> {
        if max_per_voxel < 1 {
            return Err(Error::invalid("max_per_voxel must be at least 1"));
        }
        if count_field.trim().is_empty() {
            return Err(Error::invalid("count_field must not be empty"));
        }
        Ok(Self {
            max_per_voxel,
            count_field: count_field.to_string(),
        })
    }

    /// Cap per voxel.
    #[inline]
    pub fn max_per_voxel(&self) -> usize {
        self.max_per_voxel
    }

    /// Observation-count column name.
    pub fn count_field(&self) -> &str {
        &self.count_field
    }

    /// Keep at most `max_per_voxel` events per voxel.
    ///
    /// # Errors
    /// [`Error::SchemaMismatch`] if the observation-count column is missing
    /// or not an integer column.
    pub fn reduce(&self, assigned: &AssignedCatalog) -> Result<AssignedCatalog> {
        let counts = assigned.catalog().counts(&self.count_field)?;
        let rows = select_rows(assigned.voxels(), counts, self.max_per_voxel);

        log::debug!(
            "Reduced {} events to {} (max {} per voxel)",
            assigned.len(),
            rows.len(),
            self.max_per_voxel
        );

        Ok(assigned.select(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assign::VoxelAssigner;
    use crate::catalog::{Event, EventCatalog};
    use crate::config::CatalogSection;
    use crate::grid::{AxisRange, VoxelGrid};

    #[test]
    fn test_cap_prefers_observations_and_keeps_tie_order() {
        let voxels = [Some(3); 5];
        let counts = [10, 5, 5, 3, 1];
        assert_eq!(select_rows(&voxels, &counts, 3), vec![0, 1, 2]);

        // same counts, shuffled input: tie between the 5s still follows input order
        let counts = [5, 1, 10, 3, 5];
        assert_eq!(select_rows(&voxels, &counts, 3), vec![2, 0, 4]);
    }

    #[test]
    fn test_small_groups_kept_whole() {
        let voxels = [Some(1), Some(0), Some(1), Some(2)];
        let counts = [4, 9, 6, 1];
        assert_eq!(select_rows(&voxels, &counts, 10), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_unassigned_group_last_and_capped() {
        let voxels = [None, Some(5), None, None, Some(0)];
        let counts = [1, 2, 3, 4, 5];
        assert_eq!(select_rows(&voxels, &counts, 2), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_empty_input() {
        assert!(select_rows(&[], &[], 3).is_empty());
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let voxels = [Some(2), Some(0), Some(2), Some(2), Some(0), None, Some(2)];
        let counts = [7, 3, 7, 9, 8, 2, 1];
        let first = select_rows(&voxels, &counts, 2);

        let v2: Vec<_> = first.iter().map(|&r| voxels[r]).collect();
        let c2: Vec<_> = first.iter().map(|&r| counts[r]).collect();
        let second = select_rows(&v2, &c2, 2);

        assert_eq!(second, (0..first.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_reducer_validation() {
        assert!(matches!(
            VoxelReducer::new(0, "num_obs"),
            Err(Error::InvalidConfiguration(_))
        ));
        assert!(VoxelReducer::new(1, "").is_err());
        assert_eq!(VoxelReducer::new(10, "num_obs").unwrap().max_per_voxel(), 10);
    }

    #[test]
    fn test_reduce_catalog() {
        let grid = VoxelGrid::build(
            AxisRange::new(0.0, 2.0, 3).unwrap(),
            AxisRange::new(0.0, 1.0, 2).unwrap(),
            AxisRange::new(0.0, 1.0, 2).unwrap(),
        );
        let events = [
            Event::new(0.5, 0.5, 0.5, 10),
            Event::new(1.5, 0.5, 0.5, 4),
            Event::new(0.5, 0.5, 0.5, 5),
            Event::new(0.5, 0.5, 0.5, 5),
            Event::new(0.5, 0.5, 0.5, 3),
            Event::new(0.5, 0.5, 0.5, 1),
        ];
        let fields = CatalogSection::default();
        let catalog = EventCatalog::from_events(&events, &fields).unwrap();
        let assigned = VoxelAssigner::default().assign(&catalog, &grid).unwrap();

        let reduced = VoxelReducer::new(3, "num_obs").unwrap().reduce(&assigned).unwrap();

        assert_eq!(reduced.voxels(), &[Some(0), Some(0), Some(0), Some(1)]);
        assert_eq!(reduced.catalog().counts("num_obs").unwrap(), &[10, 5, 5, 4]);
    }

    #[test]
    fn test_reduce_requires_int_counts() {
        let grid = VoxelGrid::build(
            AxisRange::new(0.0, 1.0, 2).unwrap(),
            AxisRange::new(0.0, 1.0, 2).unwrap(),
            AxisRange::new(0.0, 1.0, 2).unwrap(),
        );
        let catalog = EventCatalog::new()
            .with_column("EqLon", vec![0.5])
            .unwrap()
            .with_column("EqLat", vec![0.5])
            .unwrap()
            .with_column("EqDep", vec![0.5])
            .unwrap()
            .with_column("num_obs", vec![3.0])
            .unwrap();
        let assigned = VoxelAssigner::default().assign(&catalog, &grid).unwrap();

        let err = VoxelReducer::new(2, "num_obs").unwrap().reduce(&assigned).unwrap_err();
        assert!(matches!(err, Error::SchemaMismatch { .. }));
    }
}
