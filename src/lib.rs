//! # grid_pathtrace
//!
//! A grid-based pathfinding engine with replayable exploration traces.
//! Implements
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) on a uniform-cost
//! 4-grid behind a single expansion loop, so all three share the same
//! termination and tie-break rules and produce deterministic event logs.
//! Maintains
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! so callers can query reachability without searching.
//!
//! The engine performs no rendering and keeps no timers: [run] returns an
//! ordered [TraceEvent] log and the final path, and a front-end replays the
//! log at whatever pace it likes.
//!
//! ```
//! use grid_pathtrace::{run, Algorithm, SearchGrid};
//! use grid_util::point::Point;
//!
//! let mut grid = SearchGrid::new(5);
//! grid.set_wall(Point::new(2, 1), true).unwrap();
//! let result = run(&grid, Algorithm::AStar).unwrap();
//! assert!(result.found);
//! assert_eq!(result.path.len(), 9);
//! ```

mod frontier;
pub mod grid;
mod path;
pub mod runner;
mod search;
pub mod trace;

pub use grid::{GridError, SearchGrid};
pub use runner::{run, ConfigError, PathResult};
pub use search::Algorithm;
pub use trace::{EventKind, TraceEvent};
