//! Neighbour expansion policy.
//!
//! Far from the goal, candidates are sought at a coarse step in the eight
//! compass directions and kept only when the straight segment to them is
//! unobstructed ("hinted" neighbours). Near the goal, or when no hinted
//! candidate passes that filter, the eight unit-step neighbours are used.
//! Hints that pass the filter but are then rejected by
//! [`NodeGraph::offer`] do not trigger the unit-step fallback.

use log::trace;

use crate::distance::traversal_cost;
use crate::graph::NodeGraph;
use crate::node::NodeState;
use crate::traits::Terrain;

/// Computes the candidates of each expanded node.
///
/// Owns a scratch buffer so repeated expansions within one search do not
/// allocate for the raw neighbour list.
pub(crate) struct Neighbors<'t, T: ?Sized> {
    terrain: &'t T,
    hint_threshold: f32,
    hint_step: i32,
    buf: Vec<usize>,
}

impl<'t, T: Terrain + ?Sized> Neighbors<'t, T> {
    pub(crate) fn new(terrain: &'t T, hint_threshold: f32, hint_step: i32) -> Self {
        Self {
            terrain,
            hint_threshold,
            hint_step,
            buf: Vec::with_capacity(8),
        }
    }

    /// Candidates of `current`, in exploration order.
    ///
    /// Every returned node has been offered through [`NodeGraph::offer`] and
    /// is therefore `Open` with `current` as its parent. Ordered by ascending
    /// `f_cost`, ties broken by row-major cell order.
    pub(crate) fn expand(
        &mut self,
        graph: &mut NodeGraph<'_>,
        current: usize,
    ) -> Result<Vec<usize>, T::Error> {
        let pos = graph.node(current).pos();
        let goal = graph.node(graph.end()).pos();

        self.buf.clear();
        if traversal_cost(pos, goal) > self.hint_threshold {
            self.hinted(graph, current)?;
            if !self.buf.is_empty() {
                trace!("{pos}: {} hinted neighbours", self.buf.len());
            }
        }
        if self.buf.is_empty() {
            self.unit(graph, current);
        }

        let mut out: Vec<usize> = self
            .buf
            .iter()
            .copied()
            .filter(|&n| graph.offer(current, n))
            .collect();
        sort_candidates(graph, &mut out);
        Ok(out)
    }

    /// Collect coarse-step neighbours reachable in a straight line.
    fn hinted(&mut self, graph: &NodeGraph<'_>, current: usize) -> Result<(), T::Error> {
        let pos = graph.node(current).pos();
        let from = self.terrain.from_grid(pos);
        for p in pos.neighbors_8(self.hint_step) {
            let Some(n) = graph.node_at(p) else {
                continue;
            };
            if graph.node(n).state() == NodeState::Closed {
                continue;
            }
            if self.terrain.is_blocked(from, self.terrain.from_grid(p))? {
                continue;
            }
            self.buf.push(n);
        }
        Ok(())
    }

    /// Collect the walkable unit-step neighbours of `current` that are not
    /// closed.
    pub(crate) fn unit(&mut self, graph: &NodeGraph<'_>, current: usize) {
        for p in graph.node(current).pos().neighbors_8(1) {
            if let Some(n) = graph.node_at(p) {
                if graph.node(n).state() != NodeState::Closed {
                    self.buf.push(n);
                }
            }
        }
    }

    /// The raw neighbours gathered by the last [`unit`](Self::unit) call.
    #[inline]
    pub(crate) fn gathered(&self) -> &[usize] {
        &self.buf
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.buf.clear();
    }
}

/// Ascending `f_cost`; equal costs fall back to row-major cell order so the
/// outcome never depends on neighbour enumeration order.
pub(crate) fn sort_candidates(graph: &NodeGraph<'_>, candidates: &mut [usize]) {
    candidates.sort_by(|&a, &b| {
        let (na, nb) = (graph.node(a), graph.node(b));
        na.f_cost()
            .total_cmp(&nb.f_cost())
            .then_with(|| na.pos().cmp(&nb.pos()))
    });
}
