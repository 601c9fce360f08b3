use wayfind_core::Point;

use crate::node::{Node, NodeState};
use crate::walkable::WalkableCells;

/// Per-search snapshot of the node graph.
///
/// Owns one fresh [`Node`] per walkable cell, with heuristic costs computed
/// against the goal of this search. Node indices match positions in
/// [`WalkableCells::cells`]. The shared base set is only borrowed, never
/// mutated, so any number of snapshots may coexist.
#[derive(Debug, Clone)]
pub struct NodeGraph<'a> {
    base: &'a WalkableCells,
    nodes: Vec<Node>,
    start: usize,
    end: usize,
}

impl<'a> NodeGraph<'a> {
    /// Instantiate the snapshot for a search from `start` to `end`.
    ///
    /// Returns `None` when either cell is not walkable or lies outside the
    /// terrain, which callers treat as "no path". The start node is `Open`
    /// with a zero cost.
    pub fn build(base: &'a WalkableCells, start: Point, end: Point) -> Option<Self> {
        let start_idx = base.index_of(start)?;
        let end_idx = base.index_of(end)?;

        let mut nodes: Vec<Node> = base.cells().iter().map(|&p| Node::new(p, end)).collect();
        nodes[start_idx].open();

        Some(Self {
            base,
            nodes,
            start: start_idx,
            end: end_idx,
        })
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Index of the node at cell `p`, if `p` is walkable.
    #[inline]
    pub fn node_at(&self, p: Point) -> Option<usize> {
        self.base.index_of(p)
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn close(&mut self, idx: usize) {
        self.nodes[idx].close();
    }

    /// Offer node `to` as a candidate reached from the node being expanded.
    ///
    /// - `Closed`: rejected.
    /// - `Open`: relinked to `from` only if that is strictly cheaper.
    /// - `NotTested`: linked to `from` and opened.
    ///
    /// Returns whether `to` should be explored from `from`.
    pub(crate) fn offer(&mut self, from: usize, to: usize) -> bool {
        let via = self.nodes[from];
        let node = &mut self.nodes[to];
        match node.state() {
            NodeState::Closed => false,
            NodeState::Open => {
                if node.cost_through(&via) < node.g_cost() {
                    node.set_parent(from, &via);
                    true
                } else {
                    false
                }
            }
            NodeState::NotTested => {
                node.set_parent(from, &via);
                node.open();
                true
            }
        }
    }

    /// Grid positions along the parent chain ending at `idx`, in travel
    /// order. The start node itself is not included.
    pub fn trace(&self, idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = &self.nodes[idx];
        while let Some(parent) = cur.parent() {
            path.push(cur.pos());
            cur = &self.nodes[parent];
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfind_core::Range;

    fn open_set(w: i32, h: i32) -> WalkableCells {
        let rng = Range::with_size(w, h);
        WalkableCells::from_cells(rng, rng.iter())
    }

    #[test]
    fn build_resolves_endpoints() {
        let base = open_set(5, 5);
        let g = NodeGraph::build(&base, Point::new(1, 1), Point::new(4, 4)).unwrap();
        assert_eq!(g.len(), 25);
        assert_eq!(g.node(g.start()).pos(), Point::new(1, 1));
        assert_eq!(g.node(g.end()).pos(), Point::new(4, 4));
        assert_eq!(g.node(g.start()).state(), NodeState::Open);
        assert_eq!(g.node(g.start()).g_cost(), 0.0);
        assert_eq!(g.node(g.end()).state(), NodeState::NotTested);
    }

    #[test]
    fn heuristic_targets_goal() {
        let base = open_set(5, 5);
        let g = NodeGraph::build(&base, Point::new(0, 0), Point::new(3, 4)).unwrap();
        let i = g.node_at(Point::new(0, 0)).unwrap();
        assert_eq!(g.node(i).h_cost(), 5.0);
        assert_eq!(g.node(g.end()).h_cost(), 0.0);
    }

    #[test]
    fn build_fails_on_unwalkable_or_outside() {
        let rng = Range::with_size(3, 3);
        let base = WalkableCells::from_cells(rng, rng.iter().filter(|p| *p != Point::new(2, 2)));
        assert!(NodeGraph::build(&base, Point::new(0, 0), Point::new(2, 2)).is_none());
        assert!(NodeGraph::build(&base, Point::new(2, 2), Point::new(0, 0)).is_none());
        assert!(NodeGraph::build(&base, Point::new(-1, 0), Point::new(0, 0)).is_none());
        assert!(NodeGraph::build(&base, Point::new(0, 0), Point::new(3, 0)).is_none());
    }

    #[test]
    fn snapshots_are_independent() {
        let base = open_set(4, 4);
        let mut a = NodeGraph::build(&base, Point::new(0, 0), Point::new(3, 3)).unwrap();
        let b = NodeGraph::build(&base, Point::new(0, 0), Point::new(0, 3)).unwrap();
        let start = a.start();
        a.close(start);
        assert_eq!(a.node(start).state(), NodeState::Closed);
        assert_eq!(b.node(start).state(), NodeState::Open);
        assert_ne!(a.node(start).h_cost(), b.node(start).h_cost());
    }

    #[test]
    fn offer_follows_state_rules() {
        let base = open_set(4, 4);
        let mut g = NodeGraph::build(&base, Point::new(0, 0), Point::new(3, 3)).unwrap();
        let s = g.start();
        g.close(s);

        // NotTested: linked and opened.
        let far = g.node_at(Point::new(2, 0)).unwrap();
        assert!(g.offer(s, far));
        assert_eq!(g.node(far).state(), NodeState::Open);
        assert_eq!(g.node(far).parent(), Some(s));
        assert_eq!(g.node(far).g_cost(), 2.0);

        // Open, reached again by a longer route: left alone.
        let mid = g.node_at(Point::new(1, 1)).unwrap();
        assert!(g.offer(s, mid));
        g.close(mid);
        assert!(!g.offer(mid, far));
        assert_eq!(g.node(far).parent(), Some(s));
        assert_eq!(g.node(far).g_cost(), 2.0);

        // Closed: rejected.
        assert!(!g.offer(far, s));
        assert_eq!(g.node(s).parent(), None);
    }

    #[test]
    fn offer_relinks_when_cheaper() {
        let base = open_set(6, 2);
        let mut g = NodeGraph::build(&base, Point::new(0, 0), Point::new(5, 0)).unwrap();
        let s = g.start();
        g.close(s);

        // Detour through the second row.
        let a = g.node_at(Point::new(1, 1)).unwrap();
        let b = g.node_at(Point::new(2, 1)).unwrap();
        let t = g.node_at(Point::new(3, 0)).unwrap();
        assert!(g.offer(s, a));
        g.close(a);
        assert!(g.offer(a, b));
        g.close(b);
        assert!(g.offer(b, t));
        let detour = g.node(t).g_cost();
        assert!((detour - (2.0 * std::f32::consts::SQRT_2 + 1.0)).abs() < 1e-5);

        // Straight route is strictly cheaper: relinked.
        let c = g.node_at(Point::new(2, 0)).unwrap();
        assert!(g.offer(s, c));
        g.close(c);
        assert!(g.offer(c, t));
        assert_eq!(g.node(t).parent(), Some(c));
        assert_eq!(g.node(t).g_cost(), 3.0);
        assert_eq!(g.node(t).state(), NodeState::Open);
    }

    #[test]
    fn trace_excludes_start() {
        let base = open_set(4, 1);
        let mut g = NodeGraph::build(&base, Point::new(0, 0), Point::new(3, 0)).unwrap();
        let ids: Vec<usize> = (0..4).map(|x| g.node_at(Point::new(x, 0)).unwrap()).collect();
        for w in ids.windows(2) {
            g.close(w[0]);
            assert!(g.offer(w[0], w[1]));
        }
        assert_eq!(
            g.trace(g.end()),
            vec![Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)]
        );
        assert_eq!(g.node(g.end()).g_cost(), 3.0);
        assert!(g.trace(g.start()).is_empty());
    }
}
