//! Test utilities for voxel balancing.
//!
//! Synthetic catalogs use seeded RNGs so every run sees the same events.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use voxel_balance::config::CatalogSection;
use voxel_balance::{AxisRange, Event, EventCatalog, VoxelGrid};

/// Grid with the default catalog extents.
pub fn default_grid() -> VoxelGrid {
    VoxelGrid::build(
        AxisRange::new(-113.5, -109.0, 35).unwrap(),
        AxisRange::new(43.7, 45.7, 35).unwrap(),
        AxisRange::new(0.0, 25.0, 6).unwrap(),
    )
}

/// Uniformly scattered events, some of them outside the grid.
///
/// Coordinates are drawn from a box 10% larger than the grid on each side.
pub fn scattered_events(grid: &VoxelGrid, n: usize, seed: u64) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ((x0, y0, z0), (x1, y1, z1)) = grid.bounds();
    let pad = |lo: f64, hi: f64| {
        let margin = (hi - lo) * 0.1;
        (lo - margin, hi + margin)
    };
    let (xa, xb) = pad(x0, x1);
    let (ya, yb) = pad(y0, y1);
    let (za, zb) = pad(z0, z1);

    (0..n)
        .map(|_| {
            Event::new(
                rng.random_range(xa..xb),
                rng.random_range(ya..yb),
                rng.random_range(za..zb),
                rng.random_range(1..60),
            )
        })
        .collect()
}

/// A dense cluster around one point plus sparse background inside the grid.
///
/// Mimics a catalog where one station network records far more events.
pub fn clustered_events(grid: &VoxelGrid, cluster: usize, background: usize, seed: u64) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ((x0, y0, z0), (x1, y1, z1)) = grid.bounds();
    let (cx, cy) = (x0 + (x1 - x0) * 0.3, y0 + (y1 - y0) * 0.6);

    let mut events = Vec::with_capacity(cluster + background);
    for _ in 0..cluster {
        events.push(Event::new(
            cx + rng.random_range(-0.05..0.05),
            cy + rng.random_range(-0.03..0.03),
            rng.random_range(2.0..8.0),
            rng.random_range(3..80),
        ));
    }
    for _ in 0..background {
        events.push(Event::new(
            rng.random_range(x0..x1),
            rng.random_range(y0..y1),
            rng.random_range(z0..z1),
            rng.random_range(1..30),
        ));
    }
    events
}

/// Catalog with the default column names.
pub fn catalog_of(events: &[Event]) -> EventCatalog {
    EventCatalog::from_events(events, &CatalogSection::default()).unwrap()
}

/// Points sitting exactly on boundaries, on midpoints, and just outside.
pub fn lattice_sample_points(grid: &VoxelGrid) -> Vec<(f64, f64, f64)> {
    use voxel_balance::Axis;

    let samples = |axis: Axis| {
        let b = grid.boundaries(axis);
        let mut values: Vec<f64> = b.to_vec();
        values.extend(b.windows(2).map(|w| (w[0] + w[1]) / 2.0));
        let step = b[1] - b[0];
        values.push(b[0] - step);
        values.push(b[b.len() - 1] + step);
        values
    };

    let xs = samples(Axis::X);
    let ys = samples(Axis::Y);
    let zs = samples(Axis::Z);

    let mut points = Vec::with_capacity(xs.len() * ys.len() * zs.len());
    for &x in &xs {
        for &y in &ys {
            for &z in &zs {
                points.push((x, y, z));
            }
        }
    }
    points
}
