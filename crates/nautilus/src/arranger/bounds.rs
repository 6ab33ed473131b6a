use super::Arranger;
use crate::Result;
use crate::geom::{Rect, Size, point, size};
use nautilus_tree::Tree;

impl Arranger {
    /// Box containing every visible node, in root-centered coordinates.
    ///
    /// Horizontally it spans the root box and every visible node's outgoing point; vertically
    /// it is the root's subtree height, centered on the root. The resulting width is stored on
    /// the root's `with_descendants_size`.
    pub fn bounding_box<T>(&mut self, tree: &Tree<T>) -> Result<Rect> {
        let root = tree.require_root()?;
        let root_layout = *self.layout_state(root)?;

        let root_max_x = root_layout.size.width / 2.0;
        let mut min_x = -root_max_x;
        let mut max_x = root_max_x;
        for node in tree.preorder() {
            if !self.layout_state(node)?.visible {
                continue;
            }
            let x = self.outgoing_point(node)?.x;
            min_x = min_x.min(x);
            max_x = max_x.max(x);
        }

        let width = max_x - min_x;
        let height = root_layout.with_descendants_size.height;
        self.slot_mut(root)?.with_descendants_size.width = width;

        Ok(Rect::new(point(min_x, -height / 2.0), size(width, height)))
    }

    pub fn bounding_box_size<T>(&mut self, tree: &Tree<T>) -> Result<Size> {
        Ok(self.bounding_box(tree)?.size)
    }
}
