//! Random cave maps.
//!
//! [`CaveGen`] seeds a [`NavGrid`] with random walls and smooths it with
//! cellular automata rules, producing organic caves for tests and demos.

use rand::{Rng, RngExt};
use wayfind_core::Point;

use crate::grid::{Cell, NavGrid};

/// One pass of cellular automata smoothing.
#[derive(Debug, Clone)]
pub struct CaveRule {
    /// A cell becomes a wall with at least this many walls among its 8
    /// neighbours.
    pub wall_cutoff1: i32,
    /// A cell also becomes a wall with at most this many walls within
    /// Chebyshev distance 2. Fills large open areas.
    pub wall_cutoff2: i32,
    /// Whether cells outside the grid count as walls.
    pub walls_out_of_range: bool,
    pub reps: usize,
}

impl Default for CaveRule {
    fn default() -> Self {
        Self {
            wall_cutoff1: 5,
            wall_cutoff2: 2,
            walls_out_of_range: true,
            reps: 4,
        }
    }
}

/// Cave generator driven by a caller-provided RNG.
pub struct CaveGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> CaveGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `width` × `height` cave.
    ///
    /// Each cell starts as a wall with probability `wall_pct`, then every
    /// rule is applied for its number of repetitions.
    pub fn cave(
        &mut self,
        width: i32,
        height: i32,
        wall_pct: f64,
        rules: &[CaveRule],
    ) -> NavGrid {
        let mut grid = NavGrid::new(width, height);
        grid.fill_fn(|_| {
            let r: f64 = self.rng.random();
            if r < wall_pct { Cell::WALL } else { Cell::WALKABLE }
        });

        let mut next = grid.clone();
        for rule in rules {
            for _ in 0..rule.reps {
                next.fill_fn(|p| {
                    let walls1 = count_walls(&grid, p, 1, rule.walls_out_of_range);
                    let walls2 = count_walls(&grid, p, 2, rule.walls_out_of_range);
                    if walls1 >= rule.wall_cutoff1 || walls2 <= rule.wall_cutoff2 {
                        Cell::WALL
                    } else {
                        Cell::WALKABLE
                    }
                });
                std::mem::swap(&mut grid, &mut next);
            }
        }
        grid
    }

    /// A uniformly chosen walkable cell, if any.
    pub fn walkable_cell(&mut self, grid: &NavGrid) -> Option<Point> {
        let n = grid.walkable_count();
        if n == 0 {
            return None;
        }
        let k = self.rng.random_range(0..n);
        grid.iter()
            .filter(|(_, c)| c.is_walkable())
            .nth(k)
            .map(|(p, _)| p)
    }
}

/// Count walls within Chebyshev distance `radius` of `center`.
fn count_walls(grid: &NavGrid, center: Point, radius: i32, walls_out_of_range: bool) -> i32 {
    let mut count = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx == 0 && dy == 0 {
                continue;
            }
            match grid.at(center.shift(dx, dy)) {
                Some(c) if !c.is_walkable() => count += 1,
                None if walls_out_of_range => count += 1,
                _ => {}
            }
        }
    }
    count
}
