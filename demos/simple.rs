use grid_pathtrace::{run, Algorithm, SearchGrid};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighborhood

fn main() {
    let mut grid = SearchGrid::new(3);
    grid.set_wall(Point::new(1, 1), true).unwrap();
    println!("{}", grid);
    let result = run(&grid, Algorithm::AStar).unwrap();
    println!(
        "Found a {}-step path, visiting {} cells in {:?}:",
        result.path.len() - 1,
        result.visited_count,
        result.elapsed
    );
    for p in result.path {
        println!("{:?}", p);
    }
}
