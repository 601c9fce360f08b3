//! Small terrain used by the unit tests: one world unit per cell, `#` walls.

use std::convert::Infallible;
use std::sync::atomic::{AtomicUsize, Ordering};

use wayfind_core::{Point, Range, WorldPoint};

use crate::traits::Terrain;

pub(crate) struct CharTerrain {
    rng: Range,
    walls: Vec<bool>,
    pub(crate) blocked_calls: AtomicUsize,
}

impl CharTerrain {
    pub(crate) fn new(rows: &[&str]) -> Self {
        let h = rows.len() as i32;
        let w = rows.first().map_or(0, |r| r.len()) as i32;
        let walls = rows.iter().flat_map(|r| r.chars().map(|c| c == '#')).collect();
        Self {
            rng: Range::with_size(w, h),
            walls,
            blocked_calls: AtomicUsize::new(0),
        }
    }

    /// An all-floor terrain.
    pub(crate) fn open(w: usize, h: usize) -> Self {
        let row = ".".repeat(w);
        let rows: Vec<&str> = (0..h).map(|_| row.as_str()).collect();
        Self::new(&rows)
    }

    pub(crate) fn set_wall(&mut self, p: Point, wall: bool) {
        if self.rng.contains(p) {
            let i = (p.y * self.rng.width() + p.x) as usize;
            self.walls[i] = wall;
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.blocked_calls.load(Ordering::Relaxed)
    }

    fn walkable(&self, p: Point) -> bool {
        self.rng.contains(p) && !self.walls[(p.y * self.rng.width() + p.x) as usize]
    }
}

impl Terrain for CharTerrain {
    type Error = Infallible;

    fn bounds(&self) -> Range {
        self.rng
    }

    fn to_grid(&self, p: WorldPoint) -> Point {
        Point::new(p.x.floor() as i32, p.y.floor() as i32)
    }

    fn from_grid(&self, p: Point) -> WorldPoint {
        WorldPoint::new(p.x as f32, p.y as f32)
    }

    fn cell_is_walkable(&self, p: Point) -> bool {
        self.walkable(p)
    }

    fn is_blocked(&self, a: WorldPoint, b: WorldPoint) -> Result<bool, Infallible> {
        self.blocked_calls.fetch_add(1, Ordering::Relaxed);
        let n = (a.distance(b) * 4.0).ceil().max(1.0) as usize;
        Ok((0..=n).any(|i| !self.walkable(self.to_grid(a.lerp(b, i as f32 / n as f32)))))
    }
}
