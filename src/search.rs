use grid_util::Point;
use log::debug;

use crate::closed_set::ClosedSet;
use crate::geometry::Vec2;
use crate::node::{GridNode, NodeIndex};
use crate::open_set::OpenSet;
use crate::surface::{TilePosition, TraversalSurface};
use crate::{smooth_tile_path, tile_center, DEFAULT_HEURISTIC_FACTOR, NEIGHBOUR_OFFSETS};

/// How node state left over from a previous search is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResetPolicy {
    /// Every node is reset before each search.
    #[default]
    Full,
    /// Only the source node and the target's parent link are reset. Stale costs on other nodes
    /// are overwritten the first time the search reaches them, since a node in neither the open
    /// nor the closed set always takes the newly computed cost.
    Lazy,
}

/// Why the last search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The target was given a parent; a path was returned.
    Found,
    /// Source and target are the same tile.
    Degenerate,
    /// Source or target lies outside the surface.
    OutOfBounds,
    /// The mover cannot enter the target tile.
    TargetBlocked,
    /// The surface reported that the target cannot be reached.
    Unreachable,
    /// The open set ran empty before the target was found.
    Exhausted,
    /// The depth budget ran out before the target was found.
    DepthLimited,
}

/// A* search over a [TraversalSurface]. Owns one [GridNode] per tile, allocated up front and
/// reused by every search.
///
/// Moves are restricted to the four axis-aligned neighbours and the heuristic is the straight
/// line distance to the target, scaled by [heuristic_factor](Self::heuristic_factor).
#[derive(Clone, Debug)]
pub struct PathSearch<S: TraversalSurface> {
    surface: S,
    width: usize,
    height: usize,
    nodes: Vec<GridNode>,
    open: OpenSet,
    closed: ClosedSet,
    last_termination: Option<Termination>,
    /// Scales the heuristic; values above 1 trade optimality for speed (weighted A*).
    pub heuristic_factor: f32,
    pub reset_policy: ResetPolicy,
}

impl<S: TraversalSurface> PathSearch<S> {
    pub fn new(surface: S) -> PathSearch<S> {
        let width = surface.width();
        let height = surface.height();
        let nodes = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| GridNode::new(Point::new(x, y))))
            .collect();
        PathSearch {
            surface,
            width,
            height,
            nodes,
            open: OpenSet::new(),
            closed: ClosedSet::new(),
            last_termination: None,
            heuristic_factor: DEFAULT_HEURISTIC_FACTOR,
            reset_policy: ResetPolicy::default(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, e.g. to block tiles between searches. The dimensions
    /// are fixed when the search is created and must not change.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The search record for a tile, as left by the most recent search.
    pub fn node(&self, point: Point) -> Option<&GridNode> {
        self.index_of(point).map(|ix| &self.nodes[ix])
    }

    pub fn nodes(&self) -> &[GridNode] {
        &self.nodes
    }

    /// How the most recent search ended, or [None] before the first search.
    pub fn last_termination(&self) -> Option<Termination> {
        self.last_termination
    }

    fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn index_of(&self, p: Point) -> Option<NodeIndex> {
        if self.in_bounds(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    fn heuristic(&self, from: Point, to: Point) -> f32 {
        let dx = (to.x - from.x) as f32;
        let dy = (to.y - from.y) as f32;
        (dx * dx + dy * dy).sqrt() * self.heuristic_factor
    }

    /// Searches for a path from `source` to `target` for `mover` and returns the smoothed
    /// waypoints ordered from source to target. Each waypoint is the midpoint between the centres
    /// of two consecutive tiles on the path, so a path over `n` tiles gives `n - 1` waypoints.
    /// When source and target coincide the result is the single centre of that tile.
    ///
    /// The search gives up once any discovered node lies `max_search_distance` steps from the
    /// source. Returns [None] when no path is found; see
    /// [last_termination](Self::last_termination) for the reason.
    pub fn search(
        &mut self,
        mover: &S::Mover,
        source: Point,
        target: Point,
        max_search_distance: usize,
    ) -> Option<Vec<Vec2>> {
        let tiles = self.search_tiles(mover, source, target, max_search_distance)?;
        if tiles.len() == 1 {
            return Some(vec![tile_center(tiles[0])]);
        }
        Some(smooth_tile_path(&tiles))
    }

    /// Like [search](Self::search) with the endpoints taken from the tiles two entities occupy.
    pub fn search_between<A, B>(
        &mut self,
        mover: &S::Mover,
        source: &A,
        target: &B,
        max_search_distance: usize,
    ) -> Option<Vec<Vec2>>
    where
        A: TilePosition + ?Sized,
        B: TilePosition + ?Sized,
    {
        self.search(mover, source.tile(), target.tile(), max_search_distance)
    }

    /// The unsmoothed tile path from `source` to `target`, both included.
    pub fn search_tiles(
        &mut self,
        mover: &S::Mover,
        source: Point,
        target: Point,
        max_search_distance: usize,
    ) -> Option<Vec<Point>> {
        let termination = self.run(mover, source, target, max_search_distance);
        self.last_termination = Some(termination);
        debug!(
            "Search from {} to {} ended with {:?} after expanding {} nodes",
            source,
            target,
            termination,
            self.closed.len()
        );
        match termination {
            Termination::Found => match (self.index_of(source), self.index_of(target)) {
                (Some(source_ix), Some(target_ix)) => Some(self.reconstruct(source_ix, target_ix)),
                _ => None,
            },
            Termination::Degenerate => Some(vec![source]),
            _ => None,
        }
    }

    fn run(
        &mut self,
        mover: &S::Mover,
        source: Point,
        target: Point,
        max_search_distance: usize,
    ) -> Termination {
        self.closed.clear();
        self.open.clear();
        let (Some(source_ix), Some(target_ix)) = (self.index_of(source), self.index_of(target))
        else {
            return Termination::OutOfBounds;
        };
        if !self.surface.is_traversable(mover, target) {
            return Termination::TargetBlocked;
        }
        if source_ix == target_ix {
            return Termination::Degenerate;
        }
        if !self.surface.reachable(mover, source, target) {
            return Termination::Unreachable;
        }

        match self.reset_policy {
            ResetPolicy::Full => self.nodes.iter_mut().for_each(GridNode::reset),
            ResetPolicy::Lazy => self.nodes[source_ix].reset(),
        }
        self.open.add(source_ix, &self.nodes[source_ix]);
        self.nodes[target_ix].parent = None;

        let mut max_depth = 0;
        while max_depth < max_search_distance {
            let Some(current_ix) = self.open.first() else {
                break;
            };
            if current_ix == target_ix {
                break;
            }
            self.open.remove(current_ix);
            self.closed.insert(current_ix);

            let current = self.nodes[current_ix];
            for (dx, dy) in NEIGHBOUR_OFFSETS {
                let next = Point::new(current.point.x + dx, current.point.y + dy);
                let Some(next_ix) = self.index_of(next) else {
                    continue;
                };
                if !self.surface.is_traversable(mover, next) {
                    continue;
                }
                let g = current.g + self.surface.movement_cost(mover, current.point, next);

                // A cheaper route means the neighbour has to be considered again.
                if g < self.nodes[next_ix].g {
                    self.open.remove(next_ix);
                    self.closed.remove(next_ix);
                }

                if !self.open.contains(next_ix) && !self.closed.contains(next_ix) {
                    let h = self.heuristic(next, target);
                    let neighbour = &mut self.nodes[next_ix];
                    neighbour.g = g;
                    neighbour.h = h;
                    max_depth = max_depth.max(neighbour.set_parent(current_ix, &current));
                    self.open.add(next_ix, neighbour);
                }
            }
        }

        if self.nodes[target_ix].parent.is_some() {
            Termination::Found
        } else if self.open.is_empty() {
            Termination::Exhausted
        } else {
            Termination::DepthLimited
        }
    }

    /// Walks parent links back from the target and returns the tiles in source to target order.
    fn reconstruct(&self, source_ix: NodeIndex, target_ix: NodeIndex) -> Vec<Point> {
        let mut path: Vec<Point> = std::iter::successors(Some(target_ix), |&ix| {
            if ix == source_ix {
                None
            } else {
                self.nodes[ix].parent
            }
        })
        .take(self.nodes.len())
        .map(|ix| self.nodes[ix].point)
        .collect();
        path.reverse();
        path
    }
}
