use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use tile_pathfinding::{PathSearch, TileGrid};

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Movers step between the 4 axis-aligned neighbours.

fn main() {
    let mut tile_grid = TileGrid::new(3, 3, false);
    tile_grid.set(1, 1, true);
    tile_grid.generate_components();
    println!("{}", tile_grid);
    let mut search = PathSearch::new(tile_grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let tiles = search.search_tiles(&(), start, end, 100).unwrap();
    println!("Tiles:");
    for p in tiles {
        println!("{:?}", p);
    }
    let waypoints = search.search(&(), start, end, 100).unwrap();
    println!("Waypoints:");
    for w in waypoints {
        println!("{}", w);
    }
}
