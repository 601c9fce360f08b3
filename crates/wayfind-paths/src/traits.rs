use std::sync::Arc;

use wayfind_core::{Point, Range, WorldPoint};

/// The terrain collaborator consumed by the engine: world/grid transform,
/// per-cell walkability and the obstruction test.
///
/// Implementations are shared read-only between concurrent searches, hence
/// the `Send + Sync` bound.
pub trait Terrain: Send + Sync {
    /// Fault raised by the obstruction test. Propagated unchanged by
    /// [`Pathfinder::find_path`](crate::Pathfinder::find_path).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Grid rectangle covered by the terrain.
    fn bounds(&self) -> Range;

    /// Quantize a world point to the cell containing it.
    fn to_grid(&self, p: WorldPoint) -> Point;

    /// World position of a cell. Must satisfy `to_grid(from_grid(p)) == p`.
    fn from_grid(&self, p: Point) -> WorldPoint;

    /// Whether agents may stand on cell `p`. Only queried when building
    /// [`WalkableCells`](crate::WalkableCells).
    fn cell_is_walkable(&self, p: Point) -> bool;

    /// Whether any obstruction lies on the straight segment `a`–`b`.
    fn is_blocked(&self, a: WorldPoint, b: WorldPoint) -> Result<bool, Self::Error>;
}

impl<T: Terrain + ?Sized> Terrain for &T {
    type Error = T::Error;

    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    fn to_grid(&self, p: WorldPoint) -> Point {
        (**self).to_grid(p)
    }

    fn from_grid(&self, p: Point) -> WorldPoint {
        (**self).from_grid(p)
    }

    fn cell_is_walkable(&self, p: Point) -> bool {
        (**self).cell_is_walkable(p)
    }

    fn is_blocked(&self, a: WorldPoint, b: WorldPoint) -> Result<bool, Self::Error> {
        (**self).is_blocked(a, b)
    }
}

impl<T: Terrain + ?Sized> Terrain for Arc<T> {
    type Error = T::Error;

    fn bounds(&self) -> Range {
        (**self).bounds()
    }

    fn to_grid(&self, p: WorldPoint) -> Point {
        (**self).to_grid(p)
    }

    fn from_grid(&self, p: Point) -> WorldPoint {
        (**self).from_grid(p)
    }

    fn cell_is_walkable(&self, p: Point) -> bool {
        (**self).cell_is_walkable(p)
    }

    fn is_blocked(&self, a: WorldPoint, b: WorldPoint) -> Result<bool, Self::Error> {
        (**self).is_blocked(a, b)
    }
}
