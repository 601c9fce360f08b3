//! Shared pieces of the wayfind command-line demos.

use wayfind_core::{Point, WorldPoint};
use wayfind_paths::{PathReport, Terrain};
use wayfind_terrain::NavGrid;

/// Map used when no file is given.
pub const BUILTIN_MAP: &str = "
........................................
.S.......#..............................
.........#..............#######.........
.........#..............#.....#.........
.........#######........#.....#.........
...............#........#..G..#.........
...............#........#.....#.........
...............#........###.###.........
...............#........................
....######.....#######..................
....#...................................
....#...................................
........................................
";

/// Parse a world point written as `x,y`.
pub fn parse_point(s: &str) -> Result<WorldPoint, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(WorldPoint::new(x, y))
}

/// World position at the middle of cell `p`.
pub fn cell_center(grid: &NavGrid, p: Point) -> WorldPoint {
    let half = grid.cell_size() * 0.5;
    grid.from_grid(p) + WorldPoint::new(half, half)
}

/// Draw `grid` with the route overlaid: `S` start, `G` goal, `*` waypoints.
pub fn render(
    grid: &NavGrid,
    start: WorldPoint,
    end: WorldPoint,
    route: &[WorldPoint],
) -> String {
    let rng = grid.bounds();
    let mut rows: Vec<Vec<char>> = (rng.min.y..rng.max.y)
        .map(|y| {
            (rng.min.x..rng.max.x)
                .map(|x| if grid.is_walkable(Point::new(x, y)) { '.' } else { '#' })
                .collect()
        })
        .collect();

    let mut mark = |p: WorldPoint, ch: char| {
        let c = grid.to_grid(p);
        if rng.contains(c) {
            rows[(c.y - rng.min.y) as usize][(c.x - rng.min.x) as usize] = ch;
        }
    };
    for &p in route {
        mark(p, '*');
    }
    mark(start, 'S');
    mark(end, 'G');

    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of a search.
pub fn summary(report: &PathReport) -> String {
    if report.is_empty() {
        return format!("no path ({} nodes expanded)", report.expanded);
    }
    if report.fast_path {
        return "direct line of sight".to_string();
    }
    format!(
        "{} waypoints, cost {:.2}, {} nodes expanded in {:?}",
        report.waypoints.len(),
        report.cost.unwrap_or_default(),
        report.expanded,
        report.elapsed
    )
}
