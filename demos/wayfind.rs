//! Find a route across an ASCII map and print it.
//!
//! Run: cargo run --bin wayfind -- [--map FILE] [--start X,Y] [--end X,Y]

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use wayfind_core::WorldPoint;
use wayfind_demo::{BUILTIN_MAP, cell_center, parse_point, render, summary};
use wayfind_paths::{Pathfinder, PathfinderConfig, SearchMode};
use wayfind_terrain::AsciiMap;
use wayfind_terrain::ascii::{GOAL, START};

/// Route a path across an ASCII map (`.` floor, `#` wall, `S` start, `G` goal).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map file; the built-in map is used when omitted.
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Start point in world units, defaults to the `S` marker.
    #[arg(short, long, value_parser = parse_point)]
    start: Option<WorldPoint>,

    /// End point in world units, defaults to the `G` marker.
    #[arg(short, long, value_parser = parse_point)]
    end: Option<WorldPoint>,

    /// Search with the global open set instead of depth-first.
    #[arg(long)]
    best_first: bool,

    /// Distance to the goal above which coarse steps are tried.
    #[arg(long, default_value_t = 25.0)]
    hint_threshold: f32,

    /// Cell stride of coarse steps.
    #[arg(long, default_value_t = 10)]
    hint_step: i32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &args.map {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUILTIN_MAP.to_string(),
    };
    let map = AsciiMap::parse(&text)?;
    let grid = map.to_nav_grid();
    info!("map {}x{}, {} walkable cells", grid.width(), grid.height(), grid.walkable_count());

    let marker = |ch: char, given: Option<WorldPoint>| {
        given
            .or_else(|| map.find(ch).map(|p| cell_center(&grid, p)))
            .ok_or_else(|| format!("no {ch:?} marker on the map and no point given"))
    };
    let start = marker(START, args.start)?;
    let end = marker(GOAL, args.end)?;

    let mode = if args.best_first {
        SearchMode::BestFirst
    } else {
        SearchMode::DepthFirst
    };
    let config = PathfinderConfig::default()
        .with_hint_threshold(args.hint_threshold)
        .with_hint_step(args.hint_step)
        .with_mode(mode);
    let finder = Pathfinder::new(grid).with_config(config)?;

    let report = finder.find_path_report(start, end)?;
    println!("{}", render(finder.terrain(), start, end, &report.waypoints));
    println!();
    println!("{start} -> {end}: {}", summary(&report));
    Ok(())
}
