//! Two-sided mind map arrangement.
//!
//! A layout pass (`calculate`) runs three phases over the tree:
//! 1. side assignment: first-level nodes carry a side preference that is propagated to their
//!    whole subtree; the root is `Center`;
//! 2. visibility: descendants of folded nodes are hidden;
//! 3. offsets: every visible node gets its position relative to its parent's incoming point,
//!    stacked bottom-up per sibling list and then re-centered on the parent.
//!
//! Point queries resolve offsets into root-centered coordinates and memoize the result until
//! the next pass. Recursion depth follows tree depth; mind maps are assumed to be shallow.

mod bounds;
mod offsets;
mod points;

use crate::cache::{CacheStats, MemoCache};
use crate::geom::{Point, Size};
use crate::options::ArrangerOptions;
use crate::state::{LayoutTable, NodeLayout};
use crate::{Error, Result};
use nautilus_tree::{NodeId, Side, Tree};
use std::cell::RefCell;

type PointCache = MemoCache<NodeId, NodeId, Point>;

#[derive(Debug)]
pub struct Arranger {
    options: ArrangerOptions,
    sizes: Vec<Option<Size>>,
    table: LayoutTable,
    calculated: bool,
    points: RefCell<PointCache>,
}

impl Default for Arranger {
    fn default() -> Self {
        Self::new(ArrangerOptions::default())
    }
}

impl Arranger {
    pub fn new(options: ArrangerOptions) -> Self {
        Self {
            options,
            sizes: Vec::new(),
            table: LayoutTable::default(),
            calculated: false,
            points: RefCell::new(MemoCache::new(|node: &NodeId| *node)),
        }
    }

    pub fn options(&self) -> &ArrangerOptions {
        &self.options
    }

    /// Records the measured size of `node`. Sizes survive layout passes.
    pub fn record_node_size(&mut self, node: NodeId, size: Size) {
        let ix = node.index();
        if ix >= self.sizes.len() {
            self.sizes.resize(ix + 1, None);
        }
        self.sizes[ix] = Some(size);
    }

    pub fn recorded_size(&self, node: NodeId) -> Option<Size> {
        self.sizes.get(node.index()).copied().flatten()
    }

    /// Forgets every recorded size, e.g. before re-measuring with a different font.
    pub fn clear_sizes(&mut self) {
        self.sizes.clear();
    }

    /// Runs a full layout pass, overwriting all per-node layout state.
    ///
    /// Every visible node must have a recorded size. On error the arranger is left in the
    /// "not calculated" state and point queries fail with [`Error::PrematureQuery`].
    pub fn calculate<T>(&mut self, tree: &Tree<T>) -> Result<()> {
        self.calculated = false;
        self.points.get_mut().clear();
        tracing::trace!("point cache cleared");

        let root = tree.require_root()?;
        self.table.reset(tree.capacity_hint());

        self.assign_sides(tree, root)?;
        self.mark_visibility(tree, root, false);
        self.calculate_offsets(tree, root)?;
        self.calculated = true;

        tracing::debug!(
            nodes = self.table.len(),
            root_height = self.root_height(root),
            "mind map layout pass complete"
        );
        Ok(())
    }

    pub fn is_calculated(&self) -> bool {
        self.calculated
    }

    pub fn is_node_visible(&self, node: NodeId) -> Result<bool> {
        Ok(self.layout_state(node)?.visible)
    }

    /// Layout slots of `node` from the last pass.
    pub fn layout_state(&self, node: NodeId) -> Result<&NodeLayout> {
        if !self.calculated {
            return Err(Error::PrematureQuery);
        }
        self.table.get(node).ok_or(Error::UnknownNode { node })
    }

    /// Cumulative point-cache counters; they are not reset by `calculate`.
    pub fn cache_stats(&self) -> CacheStats {
        self.points.borrow().stats()
    }

    fn assign_sides<T>(&mut self, tree: &Tree<T>, root: NodeId) -> Result<()> {
        self.table.insert(root, NodeLayout::new(None, Side::Center));
        for &child in tree.children(root) {
            let side = tree.side(child);
            if side.is_center() {
                return Err(Error::InvalidSideAssignment {
                    id: tree.id(child).unwrap_or_default().to_string(),
                });
            }
            self.propagate_side(tree, child, root, side);
        }
        Ok(())
    }

    fn propagate_side<T>(&mut self, tree: &Tree<T>, node: NodeId, parent: NodeId, side: Side) {
        self.table.insert(node, NodeLayout::new(Some(parent), side));
        for &child in tree.children(node) {
            self.propagate_side(tree, child, node, side);
        }
    }

    fn mark_visibility<T>(&mut self, tree: &Tree<T>, node: NodeId, hidden: bool) {
        if hidden {
            if let Some(slot) = self.table.get_mut(node) {
                slot.visible = false;
            }
        }
        let hide_children = hidden || tree.is_folded(node);
        for &child in tree.children(node) {
            self.mark_visibility(tree, child, hide_children);
        }
    }

    fn root_height(&self, root: NodeId) -> f64 {
        self.table
            .get(root)
            .map(|l| l.with_descendants_size.height)
            .unwrap_or_default()
    }

    fn size_for<T>(&self, tree: &Tree<T>, node: NodeId) -> Result<Size> {
        self.recorded_size(node).ok_or_else(|| Error::MissingNodeSize {
            id: tree.id(node).unwrap_or_default().to_string(),
        })
    }
}
