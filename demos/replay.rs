use grid_pathtrace::{run, Algorithm, EventKind, SearchGrid};
use grid_util::point::Point;

// Runs BFS on a 6x6 grid with a gapped wall and prints the exploration log
// in order. A visual front-end would consume the same log one event at a
// time with a per-step delay; the engine itself has no notion of pacing.

fn main() {
    let mut grid = SearchGrid::new(6);
    for y in 0..5 {
        grid.set_wall(Point::new(3, y), true).unwrap();
    }
    println!("{}", grid);
    let result = run(&grid, Algorithm::Bfs).unwrap();
    for event in &result.trace {
        let label = match event.kind {
            EventKind::Discovered => "discovered",
            EventKind::Finalized => "finalized ",
        };
        println!("{} {}", label, event.coord);
    }
    println!(
        "found={} visited={} path_len={}",
        result.found,
        result.visited_count,
        result.path.len()
    );
}
