use core::fmt;
use grid_util::{BoolGrid, Point, SimpleValueGrid, ValueGrid};
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::surface::TraversalSurface;
use crate::{DEFAULT_TILE_COST, NEIGHBOUR_OFFSETS};

/// [TileGrid] is a [TraversalSurface] backed by a [BoolGrid] of blocked ([true]) and free
/// ([false]) tiles, with a cost for entering each tile. Every mover sees the same map.
///
/// Connected components are kept in a [UnionFind] so searches towards an unreachable tile can
/// be rejected without exploring the whole component. Freeing tiles keeps the components up
/// to date; blocking a tile may split a component, which marks them dirty until
/// [update](Self::update) or [generate_components](Self::generate_components) is called. While
/// dirty, every pair of tiles is treated as possibly reachable.
#[derive(Clone, Debug)]
pub struct TileGrid {
    pub grid: BoolGrid,
    pub costs: SimpleValueGrid<f32>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl TileGrid {
    fn free_neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.is_free(*p))
    }

    pub fn is_free(&self, point: Point) -> bool {
        self.grid.point_in_bounds(point) && !self.grid.get_point(point)
    }

    /// Cost of entering the tile at `point`.
    pub fn cost(&self, point: Point) -> f32 {
        self.costs.get_point(point)
    }

    pub fn set_cost(&mut self, point: Point, cost: f32) {
        debug_assert!(cost >= 0.0, "tile costs must not be negative");
        self.costs.set_point(point, cost);
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.grid.get_ix_point(point))
    }

    /// Checks if start and goal are on the same component. A blocked start counts as connected
    /// to the components of its free neighbours, since a search can always step off it.
    pub fn connected(&self, start: &Point, goal: &Point) -> bool {
        if !self.grid.point_in_bounds(*start) || !self.grid.point_in_bounds(*goal) {
            return false;
        }
        if self.components_dirty {
            return true;
        }
        let goal_ix = self.grid.get_ix_point(goal);
        if self.is_free(*start) {
            self.components
                .equiv(self.grid.get_ix_point(start), goal_ix)
        } else {
            self.free_neighbours(*start)
                .any(|p| self.components.equiv(self.grid.get_ix_point(&p), goal_ix))
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        let w = self.grid.width;
        let h = self.grid.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w as i32 {
            for y in 0..h as i32 {
                let point = Point::new(x, y);
                if !self.is_free(point) {
                    continue;
                }
                let parent_ix = self.grid.get_ix_point(&point);
                // Right and down are enough to visit every edge once.
                for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                    if self.is_free(p) {
                        let ix = self.grid.get_ix_point(&p);
                        self.components.union(parent_ix, ix);
                    }
                }
            }
        }
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.grid.height as i32 {
            let row = (0..self.grid.width as i32)
                .map(|x| if self.grid.get(x, y) { '#' } else { '.' })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl ValueGrid<bool> for TileGrid {
    fn new(width: usize, height: usize, default_value: bool) -> Self {
        let mut base_grid = TileGrid {
            grid: BoolGrid::new(width, height, default_value),
            costs: SimpleValueGrid::new(width, height, DEFAULT_TILE_COST),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        base_grid.generate_components();
        base_grid
    }
    fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a position on the grid. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let was_blocked = self.grid.get(x, y);
        self.grid.set(x, y, blocked);
        let p = Point::new(x, y);
        if blocked {
            if !was_blocked {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.grid.get_ix_point(&p);
            let neighbours: SmallVec<[usize; 4]> = self
                .free_neighbours(p)
                .map(|n| self.grid.get_ix_point(&n))
                .collect();
            for n_ix in neighbours {
                self.components.union(p_ix, n_ix);
            }
        }
    }
    fn width(&self) -> usize {
        self.grid.width()
    }
    fn height(&self) -> usize {
        self.grid.height()
    }
}

impl TraversalSurface for TileGrid {
    type Mover = ();

    fn width(&self) -> usize {
        self.grid.width
    }
    fn height(&self) -> usize {
        self.grid.height
    }
    fn is_traversable(&self, _mover: &(), tile: Point) -> bool {
        self.is_free(tile)
    }
    fn movement_cost(&self, _mover: &(), _from: Point, to: Point) -> f32 {
        self.cost(to)
    }
    fn reachable(&self, _mover: &(), from: Point, to: Point) -> bool {
        self.connected(&from, &to)
    }
}
