//! Serializable view of a finished layout, for renderers and golden tests.

use crate::Result;
use crate::arranger::Arranger;
use crate::geom::Point;
use nautilus_tree::{Side, Tree};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Point> for SnapshotPoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: String,
    pub side: Side,
    pub visible: bool,
    /// Top-left corner of the node box.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub incoming: SnapshotPoint,
    pub outgoing: SnapshotPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
    /// Pre-order, children in stacking order.
    pub nodes: Vec<NodeSnapshot>,
}

impl Arranger {
    pub fn snapshot<T>(&mut self, tree: &Tree<T>) -> Result<LayoutSnapshot> {
        let bounds = self.bounding_box(tree)?;

        let order = tree.preorder();
        let mut nodes = Vec::with_capacity(order.len());
        for node in order {
            let layout = *self.layout_state(node)?;
            let anchor = self.node_point(node)?;
            nodes.push(NodeSnapshot {
                id: tree.id(node).unwrap_or_default().to_string(),
                side: layout.side,
                visible: layout.visible,
                x: anchor.x,
                y: anchor.y,
                width: layout.size.width,
                height: layout.size.height,
                incoming: self.incoming_point(node)?.into(),
                outgoing: self.outgoing_point(node)?.into(),
            });
        }

        Ok(LayoutSnapshot {
            min_x: bounds.origin.x,
            min_y: bounds.origin.y,
            width: bounds.size.width,
            height: bounds.size.height,
            nodes,
        })
    }
}
