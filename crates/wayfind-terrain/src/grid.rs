//! A flag grid placed in world space.
//!
//! [`NavGrid`] stores one [`Cell`] per grid position and maps cells to world
//! space through a square `cell_size` and an `origin`. It implements
//! [`Terrain`], so it can back a [`Pathfinder`](wayfind_paths::Pathfinder)
//! directly.

use std::convert::Infallible;
use std::fmt;

use wayfind_core::{Point, Range, WorldPoint};
use wayfind_paths::Terrain;

/// Per-cell flag set.
///
/// Only [`Cell::WALKABLE`] has a meaning for pathfinding; the remaining bits
/// are free for callers (water, doors, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub u8);

impl Cell {
    pub const WALL: Self = Self(0);
    pub const WALKABLE: Self = Self(1);

    #[inline]
    pub const fn contains(self, flags: Cell) -> bool {
        self.0 & flags.0 == flags.0
    }

    #[inline]
    pub const fn with(self, flags: Cell) -> Self {
        Self(self.0 | flags.0)
    }

    #[inline]
    pub const fn without(self, flags: Cell) -> Self {
        Self(self.0 & !flags.0)
    }

    #[inline]
    pub const fn is_walkable(self) -> bool {
        self.contains(Self::WALKABLE)
    }
}

impl From<u8> for Cell {
    fn from(v: u8) -> Self {
        Self(v)
    }
}

/// Walkability grid with a world-space transform.
///
/// Cell `(x, y)` covers the world square starting at
/// `origin + (x, y) * cell_size`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavGrid {
    rng: Range,
    cells: Vec<Cell>,
    cell_size: f32,
    origin: WorldPoint,
}

impl NavGrid {
    /// A grid of walkable cells, one world unit per cell, origin at zero.
    pub fn new(width: i32, height: i32) -> Self {
        let rng = Range::with_size(width, height);
        Self {
            rng,
            cells: vec![Cell::WALKABLE; rng.len()],
            cell_size: 1.0,
            origin: WorldPoint::ZERO,
        }
    }

    /// Set the world size of a cell. Non-positive or non-finite sizes are
    /// ignored.
    pub fn with_cell_size(mut self, size: f32) -> Self {
        if size.is_finite() && size > 0.0 {
            self.cell_size = size;
        }
        self
    }

    pub fn with_origin(mut self, origin: WorldPoint) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.rng
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rng.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rng.height()
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.rng.contains(p)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Toggle the walkable flag of `p`, keeping its other flags.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) {
        if let Some(i) = self.index(p) {
            let c = self.cells[i];
            self.cells[i] = if walkable {
                c.with(Cell::WALKABLE)
            } else {
                c.without(Cell::WALKABLE)
            };
        }
    }

    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_walkable)
    }

    /// Fill the grid using a function of each position.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Cell) {
        for (c, p) in self.cells.iter_mut().zip(self.rng.iter()) {
            *c = f(p);
        }
    }

    /// Number of walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_walkable()).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.rng.iter().zip(self.cells.iter().copied())
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        Some(((p.y - self.rng.min.y) * self.rng.width() + (p.x - self.rng.min.x)) as usize)
    }
}

impl Terrain for NavGrid {
    type Error = Infallible;

    fn bounds(&self) -> Range {
        self.rng
    }

    fn to_grid(&self, p: WorldPoint) -> Point {
        let local = p - self.origin;
        Point::new(
            quantize(local.x / self.cell_size),
            quantize(local.y / self.cell_size),
        )
    }

    fn from_grid(&self, p: Point) -> WorldPoint {
        self.origin + WorldPoint::new(p.x as f32, p.y as f32) * self.cell_size
    }

    fn cell_is_walkable(&self, p: Point) -> bool {
        self.is_walkable(p)
    }

    /// Samples the segment every quarter cell, endpoints included.
    fn is_blocked(&self, a: WorldPoint, b: WorldPoint) -> Result<bool, Infallible> {
        let steps = (a.distance(b) * 4.0 / self.cell_size).ceil().max(1.0) as usize;
        Ok((0..=steps).any(|i| {
            let t = i as f32 / steps as f32;
            !self.is_walkable(self.to_grid(a.lerp(b, t)))
        }))
    }
}

/// Fraction of a cell within which a coordinate counts as lying on the
/// boundary.
const SNAP: f32 = 1e-4;

/// Floor a coordinate in cell units, snapping values that rounding left just
/// short of a boundary onto it, so cell corners map back to their own cell.
fn quantize(v: f32) -> i32 {
    let r = v.round();
    if (v - r).abs() <= SNAP * r.abs().max(1.0) {
        r as i32
    } else {
        v.floor() as i32
    }
}

impl fmt::Display for NavGrid {
    /// One line per row: `.` walkable, `#` wall.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.rng.min.y..self.rng.max.y {
            if y > self.rng.min.y {
                writeln!(f)?;
            }
            for x in self.rng.min.x..self.rng.max.x {
                let ch = if self.is_walkable(Point::new(x, y)) { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
