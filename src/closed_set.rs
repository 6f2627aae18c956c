use fxhash::FxHashSet;

use crate::node::NodeIndex;

/// Nodes that have been fully expanded during the current search.
#[derive(Clone, Debug, Default)]
pub struct ClosedSet {
    nodes: FxHashSet<NodeIndex>,
}

impl ClosedSet {
    pub fn new() -> ClosedSet {
        ClosedSet::default()
    }
    pub fn insert(&mut self, index: NodeIndex) -> bool {
        self.nodes.insert(index)
    }
    pub fn remove(&mut self, index: NodeIndex) -> bool {
        self.nodes.remove(&index)
    }
    pub fn contains(&self, index: NodeIndex) -> bool {
        self.nodes.contains(&index)
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
