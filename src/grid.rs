//! The obstacle grid searches run over: wall storage, start/end markers and
//! neighbour queries. The grid is pure topology and state; it knows nothing
//! about searching or rendering.

use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;
use thiserror::Error;

/// Rejected grid mutation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the grid.
    #[error("coordinate {0} is out of bounds")]
    OutOfBounds(Point),
    /// Attempt to turn the start or end cell into a wall.
    #[error("cannot place a wall on the endpoint at {0}")]
    WallOnEndpoint(Point),
    /// Attempt to move an endpoint onto the cell the other endpoint occupies.
    #[error("start and end cannot share the cell {0}")]
    EndpointCollision(Point),
    /// Attempt to move an endpoint onto a wall.
    #[error("cannot place an endpoint on the wall at {0}")]
    EndpointOnWall(Point),
}

/// An N x N obstacle grid with one start and one end cell.
///
/// Walls live in a [BoolGrid] ([true] = blocked). The grid also maintains
/// connected components of passable cells in a [UnionFind], so callers can
/// answer "is there any path at all?" without running a search; blocking a
/// cell marks the components dirty and [update](Self::update) regenerates
/// them on demand.
///
/// All mutators enforce the endpoint invariants (start and end are distinct
/// cells and never walls), so every reachable grid value is a valid search
/// request. The one exception is a freshly built grid of size 1, where start
/// and end legitimately share the only cell.
#[derive(Clone, Debug)]
pub struct SearchGrid {
    cells: BoolGrid,
    start: Point,
    end: Point,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl SearchGrid {
    /// Creates an all-passable square grid with the start in the top-left
    /// corner and the end in the bottom-right corner.
    pub fn new(size: usize) -> SearchGrid {
        SearchGrid {
            cells: BoolGrid::new(size, size, false),
            start: Point::new(0, 0),
            end: Point::new(size as i32 - 1, size as i32 - 1),
            components: UnionFind::new(size * size),
            // Not linked up yet; the first update() generates them.
            components_dirty: true,
        }
    }

    pub fn size(&self) -> usize {
        self.cells.width()
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && self.cells.index_in_bounds(p.x as usize, p.y as usize)
    }

    /// Whether `p` is an in-bounds wall cell.
    pub fn is_wall(&self, p: Point) -> bool {
        self.in_bounds(p) && self.cells.get_point(p)
    }

    /// [false] for out-of-bounds as well as wall cells.
    pub fn is_passable(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.cells.get_point(p)
    }

    /// The in-bounds 4-neighbourhood of `p` in the fixed order north, east,
    /// south, west. Passability is not filtered here; callers filter
    /// explicitly.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        [
            Point::new(p.x, p.y - 1),
            Point::new(p.x + 1, p.y),
            Point::new(p.x, p.y + 1),
            Point::new(p.x - 1, p.y),
        ]
        .into_iter()
        .filter(|n| self.in_bounds(*n))
    }

    /// Places or clears a wall. Joins newly connected components on clearing
    /// and flags the components as dirty if they are (potentially) broken
    /// apart by a new wall.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), GridError> {
        if !self.in_bounds(p) {
            return Err(GridError::OutOfBounds(p));
        }
        if wall && (p == self.start || p == self.end) {
            return Err(GridError::WallOnEndpoint(p));
        }
        let was_wall = self.cells.get_point(p);
        if wall && !was_wall {
            self.components_dirty = true;
        } else if !wall {
            let passable: Vec<Point> = self
                .neighbors(p)
                .filter(|n| self.is_passable(*n))
                .collect();
            let p_ix = self.ix(p);
            for n in passable {
                let n_ix = self.ix(n);
                self.components.union(p_ix, n_ix);
            }
        }
        self.cells.set(p.x as usize, p.y as usize, wall);
        Ok(())
    }

    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        if !self.in_bounds(p) {
            return Err(GridError::OutOfBounds(p));
        }
        if p == self.end {
            return Err(GridError::EndpointCollision(p));
        }
        if self.cells.get_point(p) {
            return Err(GridError::EndpointOnWall(p));
        }
        self.start = p;
        Ok(())
    }

    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        if !self.in_bounds(p) {
            return Err(GridError::OutOfBounds(p));
        }
        if p == self.start {
            return Err(GridError::EndpointCollision(p));
        }
        if self.cells.get_point(p) {
            return Err(GridError::EndpointOnWall(p));
        }
        self.end = p;
        Ok(())
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, p: &Point) -> usize {
        self.components.find(self.ix(*p))
    }

    /// Checks if `a` and `b` are on the same component, i.e. whether any path
    /// between them exists. Call [update](Self::update) first if walls were
    /// placed since the components were generated.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        !self.unreachable(a, b)
    }

    /// Checks if `a` and `b` are not on the same component.
    pub fn unreachable(&self, a: &Point, b: &Point) -> bool {
        if self.in_bounds(*a) && self.in_bounds(*b) {
            !self.components.equiv(self.ix(*a), self.ix(*b))
        } else {
            true
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("generating connected components");
        let w = self.cells.width();
        let h = self.cells.height();
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                if !self.cells.get(x, y) {
                    let parent_ix = self.cells.get_ix(x, y);
                    let point = Point::new(x as i32, y as i32);
                    // Unioning east and south neighbours covers every edge.
                    let neighbours = [
                        Point::new(point.x + 1, point.y),
                        Point::new(point.x, point.y + 1),
                    ]
                    .into_iter()
                    .filter(|p| self.is_passable(*p))
                    .map(|p| self.cells.get_ix(p.x as usize, p.y as usize))
                    .collect::<Vec<usize>>();
                    for ix in neighbours {
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }

    fn ix(&self, p: Point) -> usize {
        self.cells.get_ix(p.x as usize, p.y as usize)
    }
}

impl fmt::Display for SearchGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.cells.height() as i32 {
            for x in 0..self.cells.width() as i32 {
                let p = Point::new(x, y);
                let glyph = if p == self.start {
                    'S'
                } else if p == self.end {
                    'E'
                } else if self.cells.get_point(p) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_in_bounds_and_ordered() {
        let grid = SearchGrid::new(3);
        let corner: Vec<Point> = grid.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        let center: Vec<Point> = grid.neighbors(Point::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(0, 1)
            ]
        );
    }

    #[test]
    fn neighbors_do_not_filter_walls() {
        let mut grid = SearchGrid::new(3);
        grid.set_wall(Point::new(1, 0), true).unwrap();
        let corner: Vec<Point> = grid.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert!(!grid.is_passable(Point::new(1, 0)));
    }

    #[test]
    fn mutators_reject_invalid_requests() {
        let mut grid = SearchGrid::new(4);
        let start = grid.start();
        let end = grid.end();
        assert_eq!(
            grid.set_wall(start, true),
            Err(GridError::WallOnEndpoint(start))
        );
        assert_eq!(grid.set_wall(end, true), Err(GridError::WallOnEndpoint(end)));
        assert_eq!(
            grid.set_start(end),
            Err(GridError::EndpointCollision(end))
        );
        let outside = Point::new(4, 0);
        assert_eq!(grid.set_end(outside), Err(GridError::OutOfBounds(outside)));
        grid.set_wall(Point::new(1, 1), true).unwrap();
        assert_eq!(
            grid.set_start(Point::new(1, 1)),
            Err(GridError::EndpointOnWall(Point::new(1, 1)))
        );
        // The invariants survived all the rejected mutations.
        assert_eq!(grid.start(), start);
        assert_eq!(grid.end(), end);
    }

    #[test]
    fn component_generation_separates_walled_regions() {
        // S#.
        // .#.
        // .#E
        let mut grid = SearchGrid::new(3);
        for y in 0..3 {
            grid.set_wall(Point::new(1, y), true).unwrap();
        }
        grid.generate_components();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 2)));
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 2)));
    }

    #[test]
    fn clearing_a_wall_rejoins_components() {
        let mut grid = SearchGrid::new(3);
        for y in 0..3 {
            grid.set_wall(Point::new(1, y), true).unwrap();
        }
        grid.update();
        assert!(grid.unreachable(&Point::new(0, 1), &Point::new(2, 1)));
        grid.set_wall(Point::new(1, 1), false).unwrap();
        grid.update();
        assert!(grid.reachable(&Point::new(0, 1), &Point::new(2, 1)));
    }

    #[test]
    fn display_marks_endpoints_and_walls() {
        let mut grid = SearchGrid::new(3);
        grid.set_wall(Point::new(1, 1), true).unwrap();
        assert_eq!(format!("{}", grid), "S..\n.#.\n..E\n");
    }
}
