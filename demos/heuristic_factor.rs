use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use grid_util::Rect;
use tile_pathfinding::{PathSearch, TileGrid};

// The heuristic_factor can be set to scale the heuristic, causing nodes that are closer to the goal (ignoring obstacles)
// to be evaluated quicker than in normal operation. This is called Weighted A* and it can speed up the algorithm in certain scenarios.

fn main() {
    const N: i32 = 30;
    let mut tile_grid = TileGrid::new(N as usize, N as usize, true);
    tile_grid.set_rect(Rect::new(1, 1, N - 2, N - 2), false);
    tile_grid.set_rect(Rect::new(8, 8, 8, 8), true);
    tile_grid.set_rect(Rect::new(0, 3, 6, 6), true);
    tile_grid.set_rect(Rect::new(10, 0, 6, 6), true);
    tile_grid.generate_components();
    println!("{}", tile_grid);
    let start = Point::new(1, 1);
    let end = Point::new(N - 3, N - 3);
    let mut search = PathSearch::new(tile_grid);
    for factor in [1.0, 1.3, 2.0] {
        search.heuristic_factor = factor;
        let waypoints = search.search(&(), start, end, (N * N) as usize).unwrap();
        println!("Factor {}: {} waypoints", factor, waypoints.len());
    }
}
