//! Balance a synthetic clustered catalog and report voxel occupancy.
//!
//! Usage:
//!   cargo run --example balance_synthetic
//!   cargo run --example balance_synthetic -- --cluster 5000 --max-per-voxel 5
//!   cargo run --example balance_synthetic -- --config configs/config.yaml --top 20

use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use voxel_balance::{BalanceConfig, Event, EventCatalog, GeoBalancer, OccupancySummary};

/// Synthetic catalog balancing demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (built-in defaults if missing)
    #[arg(short, long, default_value = "configs/config.yaml")]
    config: String,

    /// Events in the dense cluster
    #[arg(long, default_value_t = 2000)]
    cluster: usize,

    /// Events scattered uniformly over the grid
    #[arg(long, default_value_t = 1000)]
    background: usize,

    /// Events placed outside the grid
    #[arg(long, default_value_t = 20)]
    outside: usize,

    /// Override the per-voxel cap
    #[arg(short, long)]
    max_per_voxel: Option<usize>,

    /// RNG seed
    #[arg(short, long, default_value_t = 1)]
    seed: u64,

    /// Print the N most occupied voxels
    #[arg(short, long, default_value_t = 10)]
    top: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let path = Path::new(&args.config);
    let mut config = if path.exists() {
        log::info!("Loading config from {:?}", path);
        BalanceConfig::load(path)?
    } else {
        log::info!("Config {:?} not found, using defaults", path);
        BalanceConfig::default()
    };
    if let Some(cap) = args.max_per_voxel {
        config.reduce.max_per_voxel = cap;
    }

    let balancer = GeoBalancer::new(&config)?;
    let (nx, ny, nz) = balancer.grid().dimensions();
    log::info!("Grid: {} x {} x {} = {} voxels", nx, ny, nz, balancer.grid().len());

    let events = synthetic_catalog(&config, &args);
    let catalog = EventCatalog::from_events(&events, &config.catalog)?;
    log::info!("Generated {} events (seed {})", catalog.len(), args.seed);

    let outcome = balancer.balance(&catalog)?;

    println!();
    print_summary("Before", &outcome.before);
    print_summary("After", &outcome.after);

    println!();
    println!("Most occupied voxels (before -> after):");
    println!(
        "{:>7} {:>14} {:>12} {:>8} {:>7} {:>6}",
        "voxel", "lon", "lat", "depth", "before", "after"
    );

    let mut rows = outcome.before.table(balancer.grid());
    rows.sort_by(|a, b| b.events.cmp(&a.events).then(a.cell.voxel.cmp(&b.cell.voxel)));

    for row in rows.iter().take(args.top).filter(|r| r.events > 0) {
        let after = outcome.after.per_voxel[row.cell.voxel];
        println!(
            "{:>7} {:>14.4} {:>12.4} {:>8.2} {:>7} {:>6}",
            row.cell.voxel, row.cell.x_mid, row.cell.y_mid, row.cell.z_mid, row.events, after
        );
    }

    Ok(())
}

fn print_summary(label: &str, summary: &OccupancySummary) {
    println!(
        "{:<6} events: {:>6}  occupied voxels: {:>5}  max/voxel: {:>5}  mean/voxel: {:>6.2}  unassigned: {}",
        label,
        summary.total(),
        summary.occupied_voxels(),
        summary.max_occupancy(),
        summary.mean_occupancy(),
        summary.unassigned
    );
}

/// Dense cluster, uniform background and a few stray events outside the grid.
fn synthetic_catalog(config: &BalanceConfig, args: &Args) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(args.seed);
    let (x, y, z) = (config.grid.x, config.grid.y, config.grid.z);

    let cx = x.min + (x.max - x.min) * 0.35;
    let cy = y.min + (y.max - y.min) * 0.55;
    let spread_x = (x.max - x.min) * 0.02;
    let spread_y = (y.max - y.min) * 0.02;

    let mut events = Vec::with_capacity(args.cluster + args.background + args.outside);

    for _ in 0..args.cluster {
        events.push(Event::new(
            cx + rng.random_range(-spread_x..spread_x),
            cy + rng.random_range(-spread_y..spread_y),
            z.min + (z.max - z.min) * rng.random_range(0.1..0.4),
            rng.random_range(4..120),
        ));
    }

    for _ in 0..args.background {
        events.push(Event::new(
            rng.random_range(x.min..x.max),
            rng.random_range(y.min..y.max),
            rng.random_range(z.min..z.max),
            rng.random_range(1..40),
        ));
    }

    for _ in 0..args.outside {
        events.push(Event::new(
            x.max + rng.random_range(0.1..1.0),
            rng.random_range(y.min..y.max),
            rng.random_range(z.min..z.max),
            rng.random_range(1..40),
        ));
    }

    events
}
