//! # tile_pathfinding
//!
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) pathfinding over tile maps, meant to
//! be called from a game or simulation loop. The map is supplied through the
//! [TraversalSurface] trait, which decides per mover which tiles can be entered and what each
//! step costs. Searches move between the four axis-aligned neighbours, use the straight line
//! distance as heuristic and return a smoothed list of waypoints a mover can follow directly.
//!
//! [TileGrid] is a ready-made surface over a blocked/free grid that precomputes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory)) to avoid
//! flood-filling behaviour if no path exists.
//!
//! The [geometry] module holds the [Vec2] used for waypoints and integer axis-aligned bounding
//! boxes for collision tests.
pub mod closed_set;
pub mod geometry;
pub mod node;
pub mod open_set;
pub mod search;
pub mod surface;
pub mod tile_grid;

use grid_util::Point;
use itertools::Itertools;

pub use geometry::{Aabb2, Aabb3, Vec2};
pub use node::{GridNode, NodeIndex};
pub use search::{PathSearch, ResetPolicy, Termination};
pub use surface::{TilePosition, TraversalSurface};
pub use tile_grid::TileGrid;

/// The four axis-aligned moves. Diagonal moves are never generated.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DEFAULT_HEURISTIC_FACTOR: f32 = 1.0;
pub const DEFAULT_TILE_COST: f32 = 1.0;

/// World position of the centre of a tile.
pub fn tile_center(tile: Point) -> Vec2 {
    Vec2::from(tile) + Vec2::new(0.5, 0.5)
}

/// Turns a tile path into waypoints by placing one point halfway between the centres of every
/// pair of consecutive tiles. The result has one point fewer than the input.
pub fn smooth_tile_path(tiles: &[Point]) -> Vec<Vec2> {
    tiles
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| tile_center(a).midpoint(tile_center(b)))
        .collect()
}
