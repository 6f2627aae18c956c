use fxhash::FxHashMap;
use std::cmp::Ordering;

use crate::node::{GridNode, NodeIndex};

/// Heap entry holding a snapshot of the node taken when it was added.
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    index: NodeIndex,
    node: GridNode,
    sequence: u64,
}

impl OpenEntry {
    fn cmp_priority(&self, other: &OpenEntry) -> Ordering {
        // Lowest total cost first, then the node closest to the target, then
        // whichever was added first.
        match self.node.cmp_total_cost(&other.node) {
            Ordering::Equal => self
                .node
                .h
                .total_cmp(&other.node.h)
                .then_with(|| self.sequence.cmp(&other.sequence)),
            s => s,
        }
    }

    fn precedes(&self, other: &OpenEntry) -> bool {
        self.cmp_priority(other) == Ordering::Less
    }
}

/// Candidate nodes ordered by total estimated cost. A binary min-heap with a position index
/// so nodes can be found and removed by identity.
///
/// Entries are ordered by the node values at the time of [add](Self::add); a node whose costs
/// change must be removed and added again.
#[derive(Clone, Debug, Default)]
pub struct OpenSet {
    heap: Vec<OpenEntry>,
    positions: FxHashMap<NodeIndex, usize>,
    next_sequence: u64,
}

impl OpenSet {
    pub fn new() -> OpenSet {
        OpenSet::default()
    }

    /// The node with the lowest total cost.
    pub fn first(&self) -> Option<NodeIndex> {
        self.heap.first().map(|e| e.index)
    }

    /// Adds the node at `index`. A node that is already present is re-keyed.
    pub fn add(&mut self, index: NodeIndex, node: &GridNode) {
        self.remove(index);
        let entry = OpenEntry {
            index,
            node: *node,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        let pos = self.heap.len();
        self.heap.push(entry);
        self.positions.insert(index, pos);
        self.sift_up(pos);
    }

    /// Removes the node at `index`; does nothing if it is not present.
    pub fn remove(&mut self, index: NodeIndex) -> bool {
        let Some(pos) = self.positions.remove(&index) else {
            return false;
        };
        let last = self.heap.len() - 1;
        if pos != last {
            self.heap.swap(pos, last);
            self.positions.insert(self.heap[pos].index, pos);
        }
        self.heap.pop();
        if pos < self.heap.len() {
            let pos = self.sift_up(pos);
            self.sift_down(pos);
        }
        true
    }

    pub fn contains(&self, index: NodeIndex) -> bool {
        self.positions.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.positions.clear();
        self.next_sequence = 0;
    }

    fn swap_entries(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions.insert(self.heap[a].index, a);
        self.positions.insert(self.heap[b].index, b);
    }

    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.heap[pos].precedes(&self.heap[parent]) {
                break;
            }
            self.swap_entries(pos, parent);
            pos = parent;
        }
        pos
    }

    fn sift_down(&mut self, mut pos: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;
            if left < n && self.heap[left].precedes(&self.heap[smallest]) {
                smallest = left;
            }
            if right < n && self.heap[right].precedes(&self.heap[smallest]) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap_entries(pos, smallest);
            pos = smallest;
        }
    }
}
