use nautilus_tree::{NodeId, TreeError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error("first-level node `{id}` has no side preference (expected side A or B)")]
    InvalidSideAssignment { id: String },
    #[error("layout was queried before `calculate` ran")]
    PrematureQuery,
    #[error("no size recorded for node `{id}`")]
    MissingNodeSize { id: String },
    #[error("node {node} is not part of the last layout pass")]
    UnknownNode { node: NodeId },
    #[error("invalid arranger options: {message}")]
    InvalidOptions { message: String },
    #[error("arranger options JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
