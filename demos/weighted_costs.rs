use grid_util::grid::ValueGrid;
use grid_util::point::Point;
use tile_pathfinding::{PathSearch, TileGrid};

// A swamp in the middle of a 9x5 map makes the straight route expensive:
//  _________
// |         |
// |   ~~~   |
// |S  ~~~  E|
// |   ~~~   |
// |         |
//  _________
// Each swamp tile costs 4 to enter, so the path goes around it.

fn main() {
    let mut tile_grid = TileGrid::new(9, 5, false);
    for x in 3..6 {
        for y in 1..4 {
            tile_grid.set_cost(Point::new(x, y), 4.0);
        }
    }
    let mut search = PathSearch::new(tile_grid);
    let start = Point::new(0, 2);
    let end = Point::new(8, 2);
    let tiles = search.search_tiles(&(), start, end, 100).unwrap();
    let cost = search.node(end).unwrap().g;
    println!("Path of {} tiles with cost {}:", tiles.len(), cost);
    for p in tiles {
        println!("{:?}", p);
    }
}
