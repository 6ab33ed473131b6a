use super::Arranger;
use crate::Result;
use crate::geom::{Point, Rect, vector};
use nautilus_tree::NodeId;

impl Arranger {
    /// Root-centered point where the connector from the parent enters `node`.
    ///
    /// Resolved points are memoized until the next `calculate`; a lookup walks up only until it
    /// meets an ancestor that is already cached.
    pub fn incoming_point(&self, node: NodeId) -> Result<Point> {
        self.layout_state(node)?;

        let mut cache = self.points.borrow_mut();
        let mut chain: Vec<NodeId> = Vec::new();
        let mut cur = node;
        let mut resolved = loop {
            if let Some(p) = cache.get(&cur) {
                break p;
            }
            chain.push(cur);
            match self.slot(cur)?.parent {
                Some(parent) => cur = parent,
                None => break Point::origin(),
            }
        };

        for &n in chain.iter().rev() {
            resolved += self.slot(n)?.offset_to_parent;
            cache.insert(&n, resolved);
        }
        Ok(resolved)
    }

    /// Root-centered point where connectors leave `node` towards its children.
    pub fn outgoing_point(&self, node: NodeId) -> Result<Point> {
        let layout = *self.layout_state(node)?;
        if layout.is_root() {
            return Ok(Point::origin());
        }
        let side = layout.side.sign();
        let dx = (layout.size.width + self.options.expander_size) * side;
        Ok(self.incoming_point(node)? + vector(dx, 0.0))
    }

    /// Top-left corner of the node box in root-centered coordinates.
    pub fn node_point(&self, node: NodeId) -> Result<Point> {
        let layout = *self.layout_state(node)?;
        let side = layout.side.sign();
        let w = layout.size.width;
        let h = layout.size.height;
        Ok(self.incoming_point(node)? + vector(w * (side - 1.0) / 2.0, -h / 2.0))
    }

    pub fn node_rect(&self, node: NodeId) -> Result<Rect> {
        let size = self.layout_state(node)?.size;
        Ok(Rect::new(self.node_point(node)?, size))
    }
}
