use grid_util::Point;
use std::cmp::Ordering;

/// Index of a [GridNode] in the node arena owned by [PathSearch](crate::PathSearch).
pub type NodeIndex = usize;

/// Search record for a single tile. One node exists per tile for the lifetime of a
/// [PathSearch](crate::PathSearch); the parent link is an index back into the same arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridNode {
    pub point: Point,
    /// Cheapest known cost from the source.
    pub g: f32,
    /// Estimated remaining cost to the target.
    pub h: f32,
    /// Number of ancestors on the current best path.
    pub depth: usize,
    pub parent: Option<NodeIndex>,
}

impl GridNode {
    pub fn new(point: Point) -> GridNode {
        GridNode {
            point,
            g: 0.0,
            h: 0.0,
            depth: 0,
            parent: None,
        }
    }

    /// Estimated total cost `g + h` of a path through this node.
    pub fn total_cost(&self) -> f32 {
        self.g + self.h
    }

    /// Links this node to `parent` (found at `parent_index`) and returns the new depth.
    pub fn set_parent(&mut self, parent_index: NodeIndex, parent: &GridNode) -> usize {
        debug_assert!(
            parent.point != self.point,
            "node {} cannot be its own parent",
            self.point
        );
        self.depth = parent.depth + 1;
        self.parent = Some(parent_index);
        self.depth
    }

    /// Orders by total cost only; equal totals are [Ordering::Equal].
    pub fn cmp_total_cost(&self, other: &GridNode) -> Ordering {
        self.total_cost().total_cmp(&other.total_cost())
    }

    pub fn reset(&mut self) {
        *self = GridNode::new(self.point);
    }
}
