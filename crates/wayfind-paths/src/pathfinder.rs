use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, trace};
use wayfind_core::WorldPoint;

use crate::astar::best_first;
use crate::config::{ConfigError, PathfinderConfig, SearchMode};
use crate::graph::NodeGraph;
use crate::neighbors::Neighbors;
use crate::search::{Outcome, depth_first};
use crate::traits::Terrain;
use crate::walkable::WalkableCells;

/// Outcome of one [`Pathfinder::find_path_report`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathReport {
    /// World-space route. Empty when no path exists; otherwise starts with
    /// the literal start point.
    pub waypoints: Vec<WorldPoint>,
    /// `g_cost` of the end node, when a grid search produced the route.
    pub cost: Option<f32>,
    /// Nodes closed and expanded by the search.
    pub expanded: usize,
    /// The straight segment was unobstructed and no search ran.
    pub fast_path: bool,
    pub elapsed: Duration,
}

impl PathReport {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}

/// Path builder over one terrain.
///
/// Holds the terrain, the shared set of its walkable cells and the search
/// configuration. Every call builds its own [`NodeGraph`] snapshot, so one
/// `Pathfinder` can serve concurrent searches through `&self`.
///
/// ```ignore
/// let finder = Pathfinder::new(grid);
/// let route = finder.find_path(WorldPoint::new(0.5, 0.5), WorldPoint::new(9.5, 9.5))?;
/// ```
#[derive(Clone)]
pub struct Pathfinder<T> {
    terrain: T,
    walkable: Arc<WalkableCells>,
    config: PathfinderConfig,
}

impl<T: Terrain> Pathfinder<T> {
    /// Build a pathfinder, enumerating the walkable cells of `terrain`.
    pub fn new(terrain: T) -> Self {
        let walkable = Arc::new(WalkableCells::from_terrain(&terrain));
        Self::with_walkable(terrain, walkable)
    }

    /// Build a pathfinder from a prebuilt walkable set, typically one shared
    /// with other pathfinders over the same terrain.
    pub fn with_walkable(terrain: T, walkable: Arc<WalkableCells>) -> Self {
        Self {
            terrain,
            walkable,
            config: PathfinderConfig::default(),
        }
    }

    /// Replace the search configuration.
    pub fn with_config(mut self, config: PathfinderConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    #[inline]
    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    #[inline]
    pub fn terrain(&self) -> &T {
        &self.terrain
    }

    /// Mutable access to the terrain. Walkability changes only take effect
    /// after [`reload`](Self::reload).
    #[inline]
    pub fn terrain_mut(&mut self) -> &mut T {
        &mut self.terrain
    }

    #[inline]
    pub fn walkable(&self) -> &Arc<WalkableCells> {
        &self.walkable
    }

    /// Re-enumerate the walkable cells after the terrain changed.
    ///
    /// Searches already running keep the set they started with.
    pub fn reload(&mut self) {
        self.walkable = Arc::new(WalkableCells::from_terrain(&self.terrain));
        debug!("reloaded {} walkable cells", self.walkable.len());
    }

    /// World-space route from `start` to `end`, or an empty vector when
    /// there is none.
    ///
    /// The first waypoint is `start` itself; every following one is the
    /// world position of a grid cell, ending with the cell containing `end`.
    /// When the straight segment is unobstructed the result is just
    /// `[start, end]`.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of [`Terrain::is_blocked`].
    pub fn find_path(
        &self,
        start: WorldPoint,
        end: WorldPoint,
    ) -> Result<Vec<WorldPoint>, T::Error> {
        Ok(self.find_path_report(start, end)?.waypoints)
    }

    /// Like [`find_path`](Self::find_path), with search statistics.
    pub fn find_path_report(
        &self,
        start: WorldPoint,
        end: WorldPoint,
    ) -> Result<PathReport, T::Error> {
        let timer = Instant::now();
        let mut report = self.search(start, end)?;
        report.elapsed = timer.elapsed();
        if report.is_empty() {
            debug!(
                "no path between {start} and {end} ({} expanded, {} ms)",
                report.expanded,
                report.elapsed.as_millis()
            );
        } else {
            debug!(
                "found path between {start} and {end} in {} ms",
                report.elapsed.as_millis()
            );
        }
        Ok(report)
    }

    fn search(&self, start: WorldPoint, end: WorldPoint) -> Result<PathReport, T::Error> {
        if !start.is_finite() || !end.is_finite() {
            return Ok(PathReport::default());
        }

        if !self.terrain.is_blocked(start, end)? {
            trace!("{start} -> {end}: unobstructed");
            return Ok(PathReport {
                waypoints: vec![start, end],
                fast_path: true,
                ..PathReport::default()
            });
        }

        let from = self.terrain.to_grid(start);
        let to = self.terrain.to_grid(end);
        let Some(mut graph) = NodeGraph::build(&self.walkable, from, to) else {
            trace!("{from} -> {to}: endpoint not walkable");
            return Ok(PathReport::default());
        };

        if graph.start() == graph.end() {
            return Ok(PathReport {
                waypoints: vec![start, self.terrain.from_grid(to)],
                cost: Some(0.0),
                ..PathReport::default()
            });
        }

        let mut neighbors =
            Neighbors::new(&self.terrain, self.config.hint_threshold, self.config.hint_step);
        let Outcome { found, expanded } = match self.config.mode {
            SearchMode::DepthFirst => depth_first(&mut graph, &mut neighbors)?,
            SearchMode::BestFirst => best_first(&mut graph, &mut neighbors),
        };
        if !found {
            return Ok(PathReport {
                expanded,
                ..PathReport::default()
            });
        }

        let end_node = graph.node(graph.end());
        let waypoints = std::iter::once(start)
            .chain(graph.trace(graph.end()).into_iter().map(|p| self.terrain.from_grid(p)))
            .collect();
        Ok(PathReport {
            waypoints,
            cost: Some(end_node.g_cost()),
            expanded,
            ..PathReport::default()
        })
    }
}
