//! Reference terrain for the *wayfind* pathfinding engine.
//!
//! - [`NavGrid`]: a walkability grid in world space implementing
//!   [`Terrain`](wayfind_paths::Terrain).
//! - [`AsciiMap`]: text maps (`.` floor, `#` wall) converted into grids.
//! - [`CaveGen`]: seeded cellular-automata caves.

pub mod ascii;
pub mod grid;
pub mod mapgen;

pub use ascii::{AsciiMap, MapError};
pub use grid::{Cell, NavGrid};
pub use mapgen::{CaveGen, CaveRule};
