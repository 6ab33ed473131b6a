#![forbid(unsafe_code)]

//! Two-sided mind map layout.
//!
//! Given a [`Tree`](tree::Tree) whose node sizes have been measured elsewhere, [`Arranger`]
//! assigns every node a side of the root, hides folded subtrees, and computes per-node offsets
//! so that siblings never overlap and every sibling list is vertically centered on its parent.
//! Absolute connector points and the diagram bounding box are derived from those offsets.
//!
//! ```
//! use nautilus::geom::size;
//! use nautilus::tree::{Side, Tree};
//! use nautilus::{Arranger, ArrangerOptions};
//!
//! let mut tree: Tree = Tree::new();
//! let root = tree.set_root("root", ()).unwrap();
//! let idea = tree.add_child(root, "idea", ()).unwrap();
//! tree.set_side(idea, Side::A).unwrap();
//!
//! let mut arranger = Arranger::new(ArrangerOptions::default());
//! arranger.record_node_size(root, size(112.0, 38.0));
//! arranger.record_node_size(idea, size(48.0, 38.0));
//! arranger.calculate(&tree).unwrap();
//!
//! assert_eq!(arranger.incoming_point(idea).unwrap().x, 99.0);
//! ```

pub use nautilus_tree as tree;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod arranger;
pub mod cache;
pub mod error;
pub mod geom;
pub mod options;
pub mod snapshot;
pub mod state;

pub use arranger::Arranger;
pub use cache::{CacheStats, MemoCache};
pub use error::{Error, Result};
pub use options::ArrangerOptions;
pub use snapshot::{LayoutSnapshot, NodeSnapshot, SnapshotPoint};
pub use state::NodeLayout;
