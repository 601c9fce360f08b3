//! **wayfind-core** — geometry primitives shared by the *wayfind* crates.
//!
//! Grid cells are addressed with [`Point`] and bounded by [`Range`]; agents
//! live in continuous world space addressed with [`WorldPoint`].

pub mod geom;
pub mod world;

pub use geom::{Point, Range, RangeIter};
pub use world::WorldPoint;
