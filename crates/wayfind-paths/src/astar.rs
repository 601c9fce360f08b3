use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wayfind_core::Point;

use crate::graph::NodeGraph;
use crate::neighbors::Neighbors;
use crate::node::NodeState;
use crate::search::Outcome;
use crate::traits::Terrain;

/// Heap entry: min-heap by `f`, then by row-major position.
#[derive(Clone, Copy)]
struct NodeRef {
    idx: usize,
    f: f32,
    pos: Point,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap pops the smallest f first.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

/// Global open-set A* over unit-step neighbours.
///
/// The Euclidean heuristic is consistent for 8-connected moves, so the path
/// left in `graph` is a cheapest one.
pub(crate) fn best_first<T: Terrain + ?Sized>(
    graph: &mut NodeGraph<'_>,
    neighbors: &mut Neighbors<'_, T>,
) -> Outcome {
    let end = graph.end();
    let start = graph.start();
    let mut expanded = 0;

    let mut open = BinaryHeap::new();
    open.push(entry(graph, start));

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Stale entry left behind by a relink.
        if graph.node(ci).state() == NodeState::Closed {
            continue;
        }
        if ci == end {
            return Outcome {
                found: true,
                expanded,
            };
        }
        graph.close(ci);
        expanded += 1;

        neighbors.clear();
        neighbors.unit(graph, ci);
        for &ni in neighbors.gathered() {
            if graph.offer(ci, ni) {
                open.push(entry(graph, ni));
            }
        }
    }

    Outcome {
        found: false,
        expanded,
    }
}

fn entry(graph: &NodeGraph<'_>, idx: usize) -> NodeRef {
    let node = graph.node(idx);
    NodeRef {
        idx,
        f: node.f_cost(),
        pos: node.pos(),
    }
}
