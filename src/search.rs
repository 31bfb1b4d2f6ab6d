//! The shared expansion loop behind all three algorithms. BFS, Dijkstra and
//! A* differ only in the [Frontier] order and the heuristic closure they are
//! instantiated with; termination, tie-breaking and trace emission are
//! identical.

use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use grid_util::point::Point;

use crate::frontier::Frontier;
use crate::trace::TraceEvent;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Search strategy selector. All three return a shortest path on a
/// unit-cost 4-grid; they differ in expansion order and therefore in the
/// exploration trace they produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Unweighted breadth-first search (FIFO frontier).
    Bfs,
    /// Uniform-cost search (min-heap keyed by g-cost).
    Dijkstra,
    /// A* with the Manhattan-distance heuristic (min-heap keyed by g + h).
    AStar,
}

/// Per-coordinate bookkeeping for one run. Nodes live in an insertion-ordered
/// map; `parent` is the map index of the predecessor (`usize::MAX` for the
/// start, which has none).
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode<C> {
    pub parent: usize,
    pub g: C,
    pub h: C,
    pub closed: bool,
}

/// Everything one run produces: the node map (predecessors and costs), the
/// map index of the goal if it was reached, and the ordered event trace.
pub(crate) struct SearchOutcome<C> {
    pub nodes: FxIndexMap<Point, SearchNode<C>>,
    pub goal_index: Option<usize>,
    pub trace: Vec<TraceEvent>,
}

/// Runs one search from `start` to `goal` over the given frontier.
///
/// `successors` yields the expandable neighbours of a coordinate with their
/// move costs; `heuristic` is the cost-to-go estimate (constant zero for BFS
/// and Dijkstra). The start is treated as pre-finalized and never appears in
/// the trace; every other coordinate emits `Discovered` when it first enters
/// the frontier and `Finalized` when it is popped and expanded.
pub(crate) fn search<C, FN, IN, FH>(
    start: Point,
    goal: Point,
    mut frontier: Frontier<C>,
    mut successors: FN,
    mut heuristic: FH,
) -> SearchOutcome<C>
where
    C: Zero + Ord + Copy,
    FN: FnMut(&Point) -> IN,
    IN: IntoIterator<Item = (Point, C)>,
    FH: FnMut(&Point) -> C,
{
    let mut nodes: FxIndexMap<Point, SearchNode<C>> = FxIndexMap::default();
    let mut trace: Vec<TraceEvent> = Vec::new();
    let start_h = heuristic(&start);
    nodes.insert(
        start,
        SearchNode {
            parent: usize::MAX,
            g: Zero::zero(),
            h: start_h,
            closed: false,
        },
    );
    frontier.push(0, Zero::zero(), start_h);

    while let Some((index, cost)) = frontier.pop() {
        let (coord, node) = {
            let (coord, node) = nodes.get_index(index).unwrap();
            (*coord, *node)
        };
        if node.closed {
            continue;
        }
        // A node may sit in the frontier several times if a better way to
        // reach it was found after an earlier push. Only the entry carrying
        // the best known cost expands; the rest are stale and discarded.
        if cost > node.g {
            continue;
        }
        nodes.get_index_mut(index).unwrap().1.closed = true;
        if coord != start {
            trace.push(TraceEvent::finalized(coord));
        }
        if coord == goal {
            return SearchOutcome {
                nodes,
                goal_index: Some(index),
                trace,
            };
        }
        for (successor, move_cost) in successors(&coord) {
            let new_cost = node.g + move_cost;
            let h;
            let successor_index;
            match nodes.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    successor_index = e.index();
                    e.insert(SearchNode {
                        parent: index,
                        g: new_cost,
                        h,
                        closed: false,
                    });
                    trace.push(TraceEvent::discovered(successor));
                }
                Occupied(mut e) => {
                    if e.get().closed || e.get().g <= new_cost {
                        continue;
                    }
                    h = e.get().h;
                    successor_index = e.index();
                    e.insert(SearchNode {
                        parent: index,
                        g: new_cost,
                        h,
                        closed: false,
                    });
                }
            }
            frontier.push(successor_index, new_cost, new_cost + h);
        }
    }
    SearchOutcome {
        nodes,
        goal_index: None,
        trace,
    }
}
