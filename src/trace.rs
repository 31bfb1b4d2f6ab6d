use grid_util::point::Point;

/// What happened to a cell during a search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The cell entered the frontier for the first time.
    Discovered,
    /// The cell was popped from the frontier and its neighbours were expanded.
    Finalized,
}

/// One entry of the exploration log.
///
/// The trace is append-only and totally ordered; replaying it in order (at
/// whatever pace the caller chooses) reproduces the exploration exactly. The
/// start cell never appears in the trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    pub coord: Point,
    pub kind: EventKind,
}

impl TraceEvent {
    pub(crate) fn discovered(coord: Point) -> TraceEvent {
        TraceEvent {
            coord,
            kind: EventKind::Discovered,
        }
    }
    pub(crate) fn finalized(coord: Point) -> TraceEvent {
        TraceEvent {
            coord,
            kind: EventKind::Finalized,
        }
    }
}
