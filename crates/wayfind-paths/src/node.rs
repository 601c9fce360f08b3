use std::fmt;

use wayfind_core::{Point, WorldPoint};

use crate::distance::traversal_cost;
use crate::traits::Terrain;

/// Visitation state of a [`Node`] within one search.
///
/// Transitions only go forward: `NotTested → Open → Closed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NodeState {
    #[default]
    NotTested,
    Open,
    Closed,
}

impl fmt::Display for NodeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotTested => "NotTested",
            Self::Open => "Open",
            Self::Closed => "Closed",
        })
    }
}

/// A search-time vertex bound to one walkable cell.
///
/// The predecessor is stored as an index into the owning
/// [`NodeGraph`](crate::NodeGraph), which owns every node of a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pos: Point,
    parent: Option<usize>,
    g: f32,
    h: f32,
    state: NodeState,
}

impl Node {
    /// A fresh `NotTested` node at `pos` whose heuristic targets `goal`.
    pub(crate) fn new(pos: Point, goal: Point) -> Self {
        Self {
            pos,
            parent: None,
            g: 0.0,
            h: traversal_cost(pos, goal),
            state: NodeState::NotTested,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Index of the predecessor on the best known path, if any.
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Accumulated cost from the start node.
    #[inline]
    pub fn g_cost(&self) -> f32 {
        self.g
    }

    /// Straight-line estimate to the goal.
    #[inline]
    pub fn h_cost(&self) -> f32 {
        self.h
    }

    #[inline]
    pub fn f_cost(&self) -> f32 {
        self.g + self.h
    }

    #[inline]
    pub fn state(&self) -> NodeState {
        self.state
    }

    /// World position of the node's cell.
    pub fn world_position<T: Terrain + ?Sized>(&self, terrain: &T) -> WorldPoint {
        terrain.from_grid(self.pos)
    }

    /// Cost of reaching this node through `via`.
    #[inline]
    pub(crate) fn cost_through(&self, via: &Node) -> f32 {
        via.g + traversal_cost(self.pos, via.pos)
    }

    /// Link to the predecessor at `parent` and recompute `g` from it.
    pub(crate) fn set_parent(&mut self, parent: usize, via: &Node) {
        self.g = self.cost_through(via);
        self.parent = Some(parent);
    }

    pub(crate) fn open(&mut self) {
        debug_assert_eq!(self.state, NodeState::NotTested);
        self.state = NodeState::Open;
    }

    pub(crate) fn close(&mut self) {
        self.state = NodeState::Closed;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pos, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_fixed_at_creation() {
        let n = Node::new(Point::new(0, 0), Point::new(3, 4));
        assert_eq!(n.h_cost(), 5.0);
        assert_eq!(n.g_cost(), 0.0);
        assert_eq!(n.f_cost(), 5.0);
        assert_eq!(n.state(), NodeState::NotTested);
        assert_eq!(n.parent(), None);
    }

    #[test]
    fn parent_recomputes_g() {
        let goal = Point::new(10, 0);
        let mut a = Node::new(Point::new(0, 0), goal);
        a.g = 2.0;
        let mut b = Node::new(Point::new(1, 1), goal);
        b.set_parent(7, &a);
        assert_eq!(b.parent(), Some(7));
        assert!((b.g_cost() - (2.0 + std::f32::consts::SQRT_2)).abs() < 1e-6);
        assert!((b.f_cost() - (b.g_cost() + b.h_cost())).abs() < 1e-6);
    }

    #[test]
    fn state_transitions() {
        let mut n = Node::new(Point::new(2, 3), Point::ZERO);
        n.open();
        assert_eq!(n.state(), NodeState::Open);
        n.close();
        assert_eq!(n.state(), NodeState::Closed);
        assert_eq!(n.to_string(), "(2, 3):Closed");
    }

    #[test]
    fn world_position_uses_terrain() {
        let t = crate::testing::CharTerrain::open(4, 4);
        let n = Node::new(Point::new(3, 1), Point::ZERO);
        assert_eq!(n.world_position(&t), WorldPoint::new(3.0, 1.0));
    }
}
