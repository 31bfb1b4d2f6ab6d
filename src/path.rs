//! Rebuilds the final path from the predecessor chain of a finished run.

use grid_util::point::Point;
use log::warn;

use crate::search::SearchOutcome;

/// Walks the predecessor chain from the goal back to the start and reverses
/// it into start-to-end order. If the run did not reach the goal there is
/// nothing to walk; callers are expected to check `found` first, so this
/// warns and returns an empty path rather than failing.
pub(crate) fn reconstruct<C>(outcome: &SearchOutcome<C>) -> Vec<Point> {
    let Some(goal_index) = outcome.goal_index else {
        warn!("path reconstruction requested for a run that found no path");
        return Vec::new();
    };
    let mut path: Vec<Point> = itertools::unfold(goal_index, |i| {
        outcome.nodes.get_index(*i).map(|(coord, node)| {
            *i = node.parent;
            *coord
        })
    })
    .collect();
    path.reverse();
    path
}
