use crate::geom::{Size, Vector};
use nautilus_tree::{NodeId, Side};

/// Per-node layout slots written by [`Arranger::calculate`](crate::Arranger::calculate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    pub parent: Option<NodeId>,
    /// Resolved side; `Center` only for the root.
    pub side: Side,
    pub visible: bool,
    /// Recorded node size. Zero for hidden nodes, which the offset pass never visits.
    pub size: Size,
    /// Height of the node's laid-out subtree. The width is only filled in for the root, by
    /// bounding-box computation.
    pub with_descendants_size: Size,
    /// Position of this node's incoming point relative to its parent's incoming point.
    pub offset_to_parent: Vector,
}

impl NodeLayout {
    pub(crate) fn new(parent: Option<NodeId>, side: Side) -> Self {
        Self {
            parent,
            side,
            visible: true,
            size: Size::zero(),
            with_descendants_size: Size::zero(),
            offset_to_parent: Vector::zero(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Layout slots indexed by [`NodeId`]; slots of nodes outside the last pass stay empty.
#[derive(Debug, Clone, Default)]
pub(crate) struct LayoutTable {
    slots: Vec<Option<NodeLayout>>,
}

impl LayoutTable {
    pub(crate) fn reset(&mut self, capacity: usize) {
        self.slots.clear();
        self.slots.resize(capacity, None);
    }

    pub(crate) fn insert(&mut self, node: NodeId, layout: NodeLayout) {
        let ix = node.index();
        if ix >= self.slots.len() {
            self.slots.resize(ix + 1, None);
        }
        self.slots[ix] = Some(layout);
    }

    pub(crate) fn get(&self, node: NodeId) -> Option<&NodeLayout> {
        self.slots.get(node.index()).and_then(Option::as_ref)
    }

    pub(crate) fn get_mut(&mut self, node: NodeId) -> Option<&mut NodeLayout> {
        self.slots.get_mut(node.index()).and_then(Option::as_mut)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
