//! Generate a seeded cave and compare both search modes on it.
//!
//! Run: cargo run --bin wayfind-cave -- --seed 7

use clap::Parser;
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wayfind_demo::{cell_center, render, summary};
use wayfind_paths::{Pathfinder, PathfinderConfig, SearchMode};
use wayfind_terrain::{CaveGen, CaveRule};

/// Route between two random floor cells of a generated cave.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 80)]
    width: i32,

    #[arg(long, default_value_t = 30)]
    height: i32,

    /// Initial wall probability before smoothing.
    #[arg(long, default_value_t = 0.45)]
    wall_pct: f64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut cg = CaveGen::new(StdRng::seed_from_u64(args.seed));
    let grid = cg.cave(args.width, args.height, args.wall_pct, &[CaveRule::default()]);
    info!("seed {}: {} walkable cells", args.seed, grid.walkable_count());

    let (Some(a), Some(b)) = (cg.walkable_cell(&grid), cg.walkable_cell(&grid)) else {
        warn!("cave has no floor, try another seed");
        return Ok(());
    };
    let (start, end) = (cell_center(&grid, a), cell_center(&grid, b));

    let dfs = Pathfinder::new(grid);
    let best = Pathfinder::with_walkable(dfs.terrain().clone(), dfs.walkable().clone())
        .with_config(PathfinderConfig::default().with_mode(SearchMode::BestFirst))?;

    let report = dfs.find_path_report(start, end)?;
    println!("{}", render(dfs.terrain(), start, end, &report.waypoints));
    println!();
    println!("depth-first: {}", summary(&report));
    println!("best-first:  {}", summary(&best.find_path_report(start, end)?));
    Ok(())
}
