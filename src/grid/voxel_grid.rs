//! Regular 3-D voxel lattice.

use serde::{Deserialize, Serialize};

use super::axis::{Axis, AxisRange, locate_on_axis};
use super::cell::{Cell, VoxelIndex};

/// Immutable lattice of voxels built from three axis ranges.
///
/// Cells are enumerated with X outermost and Z innermost; the enumeration
/// position is the voxel number:
///
/// ```text
/// for i in 0..nx { for j in 0..ny { for k in 0..nz { voxel += 1 } } }
/// voxel(i, j, k) = (i * ny + j) * nz + k
/// ```
///
/// where `nx`, `ny`, `nz` are cell counts (slice count minus one).
///
/// Serialized as its three axis ranges; deserializing rebuilds the cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "GridRanges", into = "GridRanges")]
pub struct VoxelGrid {
    ranges: [AxisRange; 3],
    x_boundaries: Vec<f64>,
    y_boundaries: Vec<f64>,
    z_boundaries: Vec<f64>,
    cells: Vec<Cell>,
}

/// Serialized form of [`VoxelGrid`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct GridRanges {
    x: AxisRange,
    y: AxisRange,
    z: AxisRange,
}

impl From<GridRanges> for VoxelGrid {
    fn from(ranges: GridRanges) -> Self {
        Self::build(ranges.x, ranges.y, ranges.z)
    }
}

impl From<VoxelGrid> for GridRanges {
    fn from(grid: VoxelGrid) -> Self {
        let [x, y, z] = grid.ranges;
        Self { x, y, z }
    }
}

impl VoxelGrid {
    /// Build the grid.
    ///
    /// Identical ranges always yield an identical grid, so voxel numbers are
    /// reproducible across runs.
    pub fn build(x: AxisRange, y: AxisRange, z: AxisRange) -> Self {
        let xb = x.boundaries();
        let yb = y.boundaries();
        let zb = z.boundaries();

        let total = x.cell_count() * y.cell_count() * z.cell_count();
        let mut cells = Vec::with_capacity(total);

        for i in 0..xb.len() - 1 {
            for j in 0..yb.len() - 1 {
                for k in 0..zb.len() - 1 {
                    cells.push(Cell::new(
                        cells.len(),
                        (i, j, k),
                        (xb[i], xb[i + 1]),
                        (yb[j], yb[j + 1]),
                        (zb[k], zb[k + 1]),
                    ));
                }
            }
        }

        log::debug!(
            "Built voxel grid: {} cells ({} x {} x {} boundaries)",
            cells.len(),
            xb.len(),
            yb.len(),
            zb.len()
        );

        Self {
            ranges: [x, y, z],
            x_boundaries: xb,
            y_boundaries: yb,
            z_boundaries: zb,
            cells,
        }
    }

    // === Basic Properties ===

    /// Number of voxels.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a built grid; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell counts along each axis `(nx, ny, nz)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize, usize) {
        (
            self.x_boundaries.len() - 1,
            self.y_boundaries.len() - 1,
            self.z_boundaries.len() - 1,
        )
    }

    /// Range used to build the given axis.
    pub fn range(&self, axis: Axis) -> AxisRange {
        match axis {
            Axis::X => self.ranges[0],
            Axis::Y => self.ranges[1],
            Axis::Z => self.ranges[2],
        }
    }

    /// Boundary sequence of the given axis.
    pub fn boundaries(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x_boundaries,
            Axis::Y => &self.y_boundaries,
            Axis::Z => &self.z_boundaries,
        }
    }

    /// Bounding box as `((x_min, y_min, z_min), (x_max, y_max, z_max))`.
    pub fn bounds(&self) -> ((f64, f64, f64), (f64, f64, f64)) {
        let [x, y, z] = self.ranges;
        ((x.min(), y.min(), z.min()), (x.max(), y.max(), z.max()))
    }

    /// All cells in voxel-number order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell with the given voxel number.
    #[inline]
    pub fn cell(&self, voxel: usize) -> Option<&Cell> {
        self.cells.get(voxel)
    }

    // === Index Conversion ===

    /// Voxel number for a grid index, if the index is inside the grid.
    pub fn voxel_of(&self, index: VoxelIndex) -> Option<usize> {
        let (nx, ny, nz) = self.dimensions();
        let (i, j, k) = index;
        if i >= nx || j >= ny || k >= nz {
            return None;
        }
        Some((i * ny + j) * nz + k)
    }

    /// Grid index of a voxel number.
    pub fn index_of(&self, voxel: usize) -> Option<VoxelIndex> {
        self.cells.get(voxel).map(|cell| cell.index)
    }

    // === Point Classification ===

    /// Voxel containing the point, by binary search on each axis.
    ///
    /// Returns `None` for points outside the bounding box, exactly on an
    /// axis minimum, or with a NaN coordinate.
    #[inline]
    pub fn locate(&self, x: f64, y: f64, z: f64) -> Option<usize> {
        let i = locate_on_axis(&self.x_boundaries, x)?;
        let j = locate_on_axis(&self.y_boundaries, y)?;
        let k = locate_on_axis(&self.z_boundaries, z)?;
        self.voxel_of((i, j, k))
    }

    /// Voxel containing the point, by testing every cell in order.
    ///
    /// Reference classification; [`locate`](Self::locate) gives the same
    /// answer in logarithmic time.
    pub fn locate_by_scan(&self, x: f64, y: f64, z: f64) -> Option<usize> {
        self.cells
            .iter()
            .find(|cell| cell.contains(x, y, z))
            .map(|cell| cell.voxel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn small_grid() -> VoxelGrid {
        VoxelGrid::build(
            AxisRange::new(0.0, 4.0, 3).unwrap(),
            AxisRange::new(10.0, 13.0, 4).unwrap(),
            AxisRange::new(0.0, 25.0, 6).unwrap(),
        )
    }

    #[test]
    fn test_grid_cardinality() {
        let grid = small_grid();
        assert_eq!(grid.dimensions(), (2, 3, 5));
        assert_eq!(grid.len(), 30);

        for (n, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.voxel, n);
        }
    }

    #[test]
    fn test_enumeration_order_matches_formula() {
        let grid = small_grid();
        for cell in grid.cells() {
            assert_eq!(grid.voxel_of(cell.index), Some(cell.voxel));
            assert_eq!(grid.index_of(cell.voxel), Some(cell.index));
        }
        // k is innermost
        assert_eq!(grid.cell(1).unwrap().index, (0, 0, 1));
        assert_eq!(grid.cell(5).unwrap().index, (0, 1, 0));
        assert_eq!(grid.cell(15).unwrap().index, (1, 0, 0));
        assert_eq!(grid.voxel_of((2, 0, 0)), None);
    }

    #[test]
    fn test_cell_ranges_and_midpoints() {
        let grid = small_grid();
        let last = grid.cell(29).unwrap();
        assert_eq!(last.x_range, (2.0, 4.0));
        assert_eq!(last.y_range.1, 13.0);
        assert_eq!(last.z_range, (20.0, 25.0));
        assert_relative_eq!(last.x_mid, 3.0);
        assert_relative_eq!(last.z_mid, 22.5);
    }

    #[test]
    fn test_one_dimensional_example() {
        // X = (0, 4, 3) -> boundaries [0, 2, 4]
        let grid = VoxelGrid::build(
            AxisRange::new(0.0, 4.0, 3).unwrap(),
            AxisRange::new(0.0, 1.0, 2).unwrap(),
            AxisRange::new(0.0, 1.0, 2).unwrap(),
        );
        assert_eq!(grid.boundaries(Axis::X), &[0.0, 2.0, 4.0]);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.locate(3.0, 0.5, 0.5), Some(1));
        assert_eq!(grid.locate(1.0, 0.5, 0.5), Some(0));
        assert_eq!(grid.locate(0.0, 0.5, 0.5), None);
    }

    #[test]
    fn test_boundary_corners() {
        let grid = small_grid();
        let ((x0, y0, z0), (x1, y1, z1)) = grid.bounds();

        assert_eq!(grid.locate(x0, y0, z0), None);
        assert_eq!(grid.locate_by_scan(x0, y0, z0), None);

        assert_eq!(grid.locate(x1, y1, z1), Some(grid.len() - 1));
        assert_eq!(grid.locate_by_scan(x1, y1, z1), Some(grid.len() - 1));
    }

    #[test]
    fn test_locate_matches_scan_on_lattice() {
        let grid = small_grid();
        let xs = [-1.0, 0.0, 0.5, 2.0, 2.5, 4.0, 4.5];
        let ys = [10.0, 10.5, 11.0, 12.0, 12.9, 13.0, 14.0];
        let zs = [-0.1, 0.0, 5.0, 7.5, 25.0, 30.0];

        for &x in &xs {
            for &y in &ys {
                for &z in &zs {
                    assert_eq!(
                        grid.locate(x, y, z),
                        grid.locate_by_scan(x, y, z),
                        "mismatch at ({}, {}, {})",
                        x,
                        y,
                        z
                    );
                }
            }
        }
    }

    #[test]
    fn test_serde_rebuilds_grid() {
        let grid = small_grid();
        let yaml = serde_yaml::to_string(&grid).unwrap();
        let restored: VoxelGrid = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored, grid);
        assert_eq!(restored.locate(3.0, 12.5, 24.0), grid.locate(3.0, 12.5, 24.0));
    }

    #[test]
    fn test_serde_rejects_degenerate_axis() {
        let yaml = r#"
x: { min: 0.0, max: 1.0, slice_count: 0 }
y: { min: 0.0, max: 1.0, slice_count: 2 }
z: { min: 0.0, max: 1.0, slice_count: 2 }
"#;
        assert!(serde_yaml::from_str::<VoxelGrid>(yaml).is_err());
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(small_grid(), small_grid());
    }
}
