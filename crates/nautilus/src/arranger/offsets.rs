use super::Arranger;
use crate::geom::vector;
use crate::options::ArrangerOptions;
use crate::state::NodeLayout;
use crate::{Error, Result};
use nautilus_tree::{NodeId, Side, Tree};

impl Arranger {
    pub(super) fn calculate_offsets<T>(&mut self, tree: &Tree<T>, root: NodeId) -> Result<()> {
        let root_size = self.size_for(tree, root)?;
        self.slot_mut(root)?.size = root_size;

        let (mut side_a, side_b): (Vec<NodeId>, Vec<NodeId>) = tree
            .children(root)
            .iter()
            .copied()
            .partition(|&child| self.table.get(child).is_some_and(|l| l.side == Side::A));
        // Side A stacks in reverse insertion order; side B as-is.
        side_a.reverse();

        let height_a = self.arrange_siblings(tree, root, &side_a, true)?;
        let height_b = self.arrange_siblings(tree, root, &side_b, true)?;

        self.slot_mut(root)?.with_descendants_size.height =
            root_size.height.max(height_a).max(height_b);
        Ok(())
    }

    /// Lays out one sibling list below `parent` and returns its total height.
    ///
    /// Siblings are stacked upwards from `y = 0` and then shifted by half the total height so
    /// the list is centered on the parent's incoming point. Hidden siblings take no space.
    fn arrange_siblings<T>(
        &mut self,
        tree: &Tree<T>,
        parent: NodeId,
        siblings: &[NodeId],
        first_level: bool,
    ) -> Result<f64> {
        let parent_layout = *self.slot(parent)?;
        let parent_width = parent_layout.size.width;
        let parent_side = parent_layout.side.sign();
        let has_cousins = tree.children(parent).len() > 1;

        let ArrangerOptions {
            parent_child_space,
            sibling_space,
            cousin_space,
            expander_size,
        } = self.options;

        let mut offset_y = 0.0;
        let mut total_height = 0.0;
        let mut placed: Vec<NodeId> = Vec::with_capacity(siblings.len());

        for &node in siblings {
            let layout = *self.slot(node)?;
            if !layout.visible {
                continue;
            }
            let size = self.size_for(tree, node)?;
            self.slot_mut(node)?.size = size;

            let children = tree.children(node);
            let children_height = self.arrange_siblings(tree, node, children, false)?;
            let cousin = if !children.is_empty() && has_cousins {
                cousin_space
            } else {
                0.0
            };
            let height = children_height.max(size.height) + cousin;

            let side = layout.side.sign();
            let expander_space = if first_level { 0.0 } else { expander_size * side };
            let x = parent_child_space * side
                + parent_width * (parent_side + side) / 2.0
                + expander_space
                + expander_size * side;

            let slot = self.slot_mut(node)?;
            slot.offset_to_parent = vector(x, offset_y - height / 2.0);
            slot.with_descendants_size.height = height;

            offset_y -= height + sibling_space;
            total_height += height;
            placed.push(node);
        }

        if placed.len() > 1 {
            total_height += sibling_space * (placed.len() - 1) as f64;
        }
        for &node in &placed {
            self.slot_mut(node)?.offset_to_parent.y += total_height / 2.0;
        }
        Ok(total_height)
    }

    pub(super) fn slot(&self, node: NodeId) -> Result<&NodeLayout> {
        self.table.get(node).ok_or(Error::UnknownNode { node })
    }

    pub(super) fn slot_mut(&mut self, node: NodeId) -> Result<&mut NodeLayout> {
        self.table.get_mut(node).ok_or(Error::UnknownNode { node })
    }
}
