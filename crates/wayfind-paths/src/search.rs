//! Depth-first informed search.
//!
//! Each expanded node closes itself, sorts its candidates by `f_cost` and
//! descends into the best one immediately; the first time the goal shows up
//! as a candidate the search succeeds. Siblings are only tried once a
//! branch is exhausted. This is not a global open-set A*, so the path found
//! is not guaranteed to be the cheapest one.
//!
//! The recursion runs on an explicit frame stack, so large grids cannot
//! exhaust the native stack.

use log::trace;

use crate::graph::NodeGraph;
use crate::neighbors::Neighbors;
use crate::node::NodeState;
use crate::traits::Terrain;

/// Result of running a search over a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub(crate) found: bool,
    /// Number of nodes closed and expanded.
    pub(crate) expanded: usize,
}

/// One suspended expansion: the sorted candidates of a node and how many of
/// them have been tried.
struct Frame {
    candidates: Vec<usize>,
    next: usize,
}

pub(crate) fn depth_first<T: Terrain + ?Sized>(
    graph: &mut NodeGraph<'_>,
    neighbors: &mut Neighbors<'_, T>,
) -> Result<Outcome, T::Error> {
    let (start, end) = (graph.start(), graph.end());
    let mut expanded = 0;
    let mut stack = vec![expand(graph, neighbors, start, &mut expanded)?];

    loop {
        let Some(frame) = stack.last_mut() else {
            return Ok(Outcome {
                found: false,
                expanded,
            });
        };
        let Some(candidate) = frame.candidates.get(frame.next).copied() else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        if candidate == end {
            return Ok(Outcome {
                found: true,
                expanded,
            });
        }
        // Closed by a deeper branch since it was offered here; its subtree
        // has already been explored.
        if graph.node(candidate).state() == NodeState::Closed {
            continue;
        }
        let frame = expand(graph, neighbors, candidate, &mut expanded)?;
        stack.push(frame);
    }
}

fn expand<T: Terrain + ?Sized>(
    graph: &mut NodeGraph<'_>,
    neighbors: &mut Neighbors<'_, T>,
    idx: usize,
    expanded: &mut usize,
) -> Result<Frame, T::Error> {
    graph.close(idx);
    *expanded += 1;
    let candidates = neighbors.expand(graph, idx)?;
    trace!("expand {} -> {} candidates", graph.node(idx), candidates.len());
    Ok(Frame {
        candidates,
        next: 0,
    })
}
