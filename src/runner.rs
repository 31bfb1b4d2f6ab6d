//! The single entry point a caller (typically a visualizer front-end) uses to
//! execute one search: request validation, timing and result packaging.

use std::time::{Duration, Instant};

use grid_util::point::Point;
use log::{debug, info};
use thiserror::Error;

use crate::frontier::Frontier;
use crate::grid::SearchGrid;
use crate::path;
use crate::search::{search, Algorithm};
use crate::trace::{EventKind, TraceEvent};

/// Rejected search request. Raised before any search runs; a rejected call
/// produces no partial trace.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start {0} is out of bounds")]
    StartOutOfBounds(Point),
    #[error("end {0} is out of bounds")]
    EndOutOfBounds(Point),
    #[error("start {0} is a wall")]
    StartOnWall(Point),
    #[error("end {0} is a wall")]
    EndOnWall(Point),
}

/// The complete outcome of one search run.
///
/// An unreachable end is not an error: `found` is [false], `path` is empty
/// and `trace` shows the flooded component. `elapsed` is the wall time of
/// the search loop, reported for display only; every other field is a
/// deterministic function of the grid and the algorithm.
#[derive(Clone, Debug)]
pub struct PathResult {
    pub found: bool,
    /// Start-to-end, 4-adjacent consecutive cells; empty when `found` is
    /// [false].
    pub path: Vec<Point>,
    /// Number of finalized (expanded) cells, excluding the start.
    pub visited_count: usize,
    pub trace: Vec<TraceEvent>,
    pub elapsed: Duration,
}

pub(crate) fn manhattan(a: &Point, b: &Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

fn validate(grid: &SearchGrid) -> Result<(), ConfigError> {
    let start = grid.start();
    let end = grid.end();
    if !grid.in_bounds(start) {
        return Err(ConfigError::StartOutOfBounds(start));
    }
    if !grid.in_bounds(end) {
        return Err(ConfigError::EndOutOfBounds(end));
    }
    if grid.is_wall(start) {
        return Err(ConfigError::StartOnWall(start));
    }
    if grid.is_wall(end) {
        return Err(ConfigError::EndOnWall(end));
    }
    Ok(())
}

/// Runs the chosen algorithm over the grid and packages the result.
///
/// The grid is borrowed read-only for the whole run; walls are frozen for
/// its duration. Re-running with an unchanged grid and algorithm yields an
/// identical trace and path. `start == end` is a valid request and yields
/// the trivial single-cell path with nothing visited.
pub fn run(grid: &SearchGrid, algorithm: Algorithm) -> Result<PathResult, ConfigError> {
    validate(grid)?;
    let start = grid.start();
    let end = grid.end();
    info!("running {:?} from {} to {}", algorithm, start, end);

    let frontier: Frontier<i32> = match algorithm {
        Algorithm::Bfs => Frontier::fifo(),
        Algorithm::Dijkstra | Algorithm::AStar => Frontier::min_heap(),
    };
    let heuristic = move |p: &Point| match algorithm {
        Algorithm::AStar => manhattan(p, &end),
        Algorithm::Bfs | Algorithm::Dijkstra => 0,
    };
    let successors = |p: &Point| {
        grid.neighbors(*p)
            .filter(|n| grid.is_passable(*n))
            .map(|n| (n, 1))
            .collect::<Vec<_>>()
    };

    let clock = Instant::now();
    let outcome = search(start, end, frontier, successors, heuristic);
    let elapsed = clock.elapsed();

    let found = outcome.goal_index.is_some();
    let path = if found {
        path::reconstruct(&outcome)
    } else {
        Vec::new()
    };
    let visited_count = outcome
        .trace
        .iter()
        .filter(|e| e.kind == EventKind::Finalized)
        .count();
    debug!(
        "{:?} finished: found={} path_len={} visited={} elapsed={:?}",
        algorithm,
        found,
        path.len(),
        visited_count,
        elapsed
    );
    Ok(PathResult {
        found,
        path,
        visited_count,
        trace: outcome.trace,
        elapsed,
    })
}
