use wayfind_core::{Point, Range};

use crate::traits::Terrain;

/// Slot value for cells that are not walkable.
const NO_NODE: u32 = u32::MAX;

/// The static set of walkable cells of one terrain.
///
/// Built once and shared read-only (typically behind an `Arc`) by every
/// search on that terrain. Cells are stored in row-major order; a flat slot
/// table over the bounding [`Range`] maps a position to its node index in
/// O(1).
#[derive(Debug, Clone, Default)]
pub struct WalkableCells {
    rng: Range,
    width: usize,
    cells: Vec<Point>,
    slots: Vec<u32>,
}

impl WalkableCells {
    /// Enumerate the walkable cells of `terrain`.
    pub fn from_terrain<T: Terrain + ?Sized>(terrain: &T) -> Self {
        let rng = terrain.bounds();
        Self::from_cells(rng, rng.iter().filter(|&p| terrain.cell_is_walkable(p)))
    }

    /// Build from an explicit cell list. Cells outside `rng` and duplicates
    /// are ignored.
    pub fn from_cells(rng: Range, cells: impl IntoIterator<Item = Point>) -> Self {
        let width = rng.width().max(0) as usize;
        let mut slots = vec![NO_NODE; rng.len()];
        for p in cells {
            if !rng.contains(p) {
                continue;
            }
            let i = flat(rng, width, p);
            slots[i] = 0;
        }

        // Number the marked slots in row-major order.
        let mut out = Vec::new();
        for (i, slot) in slots.iter_mut().enumerate() {
            if *slot == NO_NODE {
                continue;
            }
            *slot = out.len() as u32;
            out.push(Point::new(
                (i % width) as i32 + rng.min.x,
                (i / width) as i32 + rng.min.y,
            ));
        }

        Self {
            rng,
            width,
            cells: out,
            slots,
        }
    }

    /// The bounding rectangle the set was built over.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Walkable cells in row-major order. A cell's position in this slice is
    /// its node index in every snapshot built from this set.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Node index of cell `p`, or `None` if it is not walkable or lies
    /// outside the range.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        match self.slots[flat(self.rng, self.width, p)] {
            NO_NODE => None,
            i => Some(i as usize),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index_of(p).is_some()
    }
}

#[inline]
fn flat(rng: Range, width: usize, p: Point) -> usize {
    let x = (p.x - rng.min.x) as usize;
    let y = (p.y - rng.min.y) as usize;
    y * width + x
}
