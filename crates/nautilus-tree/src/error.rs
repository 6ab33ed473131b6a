use crate::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node id already exists in the tree: {id}")]
    DuplicateId { id: String },
    #[error("unknown or removed node handle: {node}")]
    UnknownNode { node: NodeId },
    #[error("tree already has a root: {id}")]
    RootAlreadySet { id: String },
    #[error("tree has no root")]
    NoRoot,
    #[error("the root node cannot be moved")]
    RootIsImmovable,
    #[error("moving {node} under {new_parent} would create a cycle")]
    WouldCreateCycle { node: NodeId, new_parent: NodeId },
    #[error("child index {index} is out of bounds (parent has {len} children)")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, TreeError>;
