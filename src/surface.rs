use grid_util::Point;

/// A tile map the search runs over. Traversability and movement cost are evaluated for a
/// specific mover, so different kinds of entity may see different paths on the same map.
///
/// [PathSearch](crate::PathSearch) only queries tiles inside `[0, width) × [0, height)` and only
/// asks for the cost between 4-adjacent tiles.
pub trait TraversalSurface {
    /// Entity for which traversability and costs are evaluated.
    type Mover: ?Sized;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn is_traversable(&self, mover: &Self::Mover, tile: Point) -> bool;
    /// Cost of stepping from `from` to the adjacent tile `to`. Must not be negative.
    fn movement_cost(&self, mover: &Self::Mover, from: Point, to: Point) -> f32;

    /// Cheap connectivity hint checked before searching. Returning [false] makes the search
    /// give up immediately, so it must only do so when no path can exist.
    fn reachable(&self, _mover: &Self::Mover, _from: Point, _to: Point) -> bool {
        true
    }
}

impl<T: TraversalSurface + ?Sized> TraversalSurface for &T {
    type Mover = T::Mover;

    fn width(&self) -> usize {
        (**self).width()
    }
    fn height(&self) -> usize {
        (**self).height()
    }
    fn is_traversable(&self, mover: &Self::Mover, tile: Point) -> bool {
        (**self).is_traversable(mover, tile)
    }
    fn movement_cost(&self, mover: &Self::Mover, from: Point, to: Point) -> f32 {
        (**self).movement_cost(mover, from, to)
    }
    fn reachable(&self, mover: &Self::Mover, from: Point, to: Point) -> bool {
        (**self).reachable(mover, from, to)
    }
}

/// Anything that occupies a tile, used to derive search endpoints from entities.
pub trait TilePosition {
    fn tile(&self) -> Point;
}

impl TilePosition for Point {
    fn tile(&self) -> Point {
        *self
    }
}
