#![forbid(unsafe_code)]

//! Ordered tree container used by `nautilus`.
//!
//! Nodes live in an arena and are addressed by [`NodeId`] handles. Every node also carries a
//! unique string id so callers can look nodes up by name, the same way the graph containers in
//! this workspace family key their nodes.

mod error;
mod side;
mod tree;

pub use error::{Result, TreeError};
pub use side::Side;
pub use tree::{NodeId, NodeRef, Tree};
