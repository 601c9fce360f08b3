//! Grid pathfinding between world-space points.
//!
//! A [`Pathfinder`] owns a [`Terrain`] collaborator (world/grid transform,
//! per-cell walkability and a straight-line obstruction test) together with
//! the [`WalkableCells`] of that terrain. Each [`Pathfinder::find_path`] call:
//!
//! 1. returns `[start, end]` at once when the segment is unobstructed;
//! 2. otherwise builds a fresh [`NodeGraph`] snapshot and runs an informed
//!    search over it, using coarse "hinted" steps while far from the goal;
//! 3. converts the resulting cells back to world positions.
//!
//! No path is an empty result, never an error. Collaborator faults are
//! propagated through [`Terrain::Error`].
//!
//! Two strategies are available through [`SearchMode`]:
//!
//! | Mode | Neighbours | Result |
//! |---|---|---|
//! | [`SearchMode::DepthFirst`] | hinted, then unit steps | first path found |
//! | [`SearchMode::BestFirst`] | unit steps | cheapest path |

mod astar;
mod config;
mod distance;
mod graph;
mod neighbors;
mod node;
mod pathfinder;
mod search;
#[cfg(test)]
mod testing;
mod traits;
mod walkable;

pub use config::{ConfigError, PathfinderConfig, SearchMode};
pub use distance::traversal_cost;
pub use graph::NodeGraph;
pub use node::{Node, NodeState};
pub use pathfinder::{PathReport, Pathfinder};
pub use traits::Terrain;
pub use walkable::WalkableCells;
