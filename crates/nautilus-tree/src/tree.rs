use crate::error::{Result, TreeError};
use crate::side::Side;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a node in a [`Tree`].
///
/// Handles are never recycled: once a node is removed its handle stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeEntry<T> {
    id: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    folded: bool,
    side: Side,
    payload: T,
}

#[derive(Debug, Clone)]
pub struct Tree<T = ()> {
    nodes: Vec<Option<NodeEntry<T>>>,
    node_index: FxHashMap<String, NodeId>,
    root: Option<NodeId>,
    live: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: FxHashMap::default(),
            root: None,
            live: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Upper bound (exclusive) of every handle index handed out so far.
    pub fn capacity_hint(&self) -> usize {
        self.nodes.len()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn require_root(&self) -> Result<NodeId> {
        self.root.ok_or(TreeError::NoRoot)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.entry(node).is_some()
    }

    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.node_index.get(id).copied()
    }

    pub fn node(&self, node: NodeId) -> Option<NodeRef<'_, T>> {
        self.entry(node).map(|entry| NodeRef {
            handle: node,
            entry,
        })
    }

    pub fn id(&self, node: NodeId) -> Option<&str> {
        self.entry(node).map(|e| e.id.as_str())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.entry(node).and_then(|e| e.parent)
    }

    /// Ordered children of `node`; empty for unknown handles.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.entry(node)
            .map(|e| e.children.as_slice())
            .unwrap_or_default()
    }

    pub fn is_folded(&self, node: NodeId) -> bool {
        self.entry(node).is_some_and(|e| e.folded)
    }

    /// Side preference stored on the node (not the resolved layout side).
    pub fn side(&self, node: NodeId) -> Side {
        self.entry(node).map(|e| e.side).unwrap_or_default()
    }

    pub fn payload(&self, node: NodeId) -> Option<&T> {
        self.entry(node).map(|e| &e.payload)
    }

    pub fn payload_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.entry_mut(node).map(|e| &mut e.payload)
    }

    pub fn set_root(&mut self, id: impl Into<String>, payload: T) -> Result<NodeId> {
        if let Some(root) = self.root {
            return Err(TreeError::RootAlreadySet {
                id: self.id(root).unwrap_or_default().to_string(),
            });
        }
        let handle = self.push_entry(id.into(), None, payload)?;
        self.root = Some(handle);
        Ok(handle)
    }

    pub fn add_child(&mut self, parent: NodeId, id: impl Into<String>, payload: T) -> Result<NodeId> {
        let len = self.children(parent).len();
        self.insert_child(parent, len, id, payload)
    }

    /// Inserts a new node at `index` among `parent`'s children.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        id: impl Into<String>,
        payload: T,
    ) -> Result<NodeId> {
        let len = self.checked_entry(parent)?.children.len();
        if index > len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }
        let handle = self.push_entry(id.into(), Some(parent), payload)?;
        self.checked_entry_mut(parent)?.children.insert(index, handle);
        Ok(handle)
    }

    /// Removes `node` and its whole subtree, returning how many nodes were removed.
    ///
    /// Removing the root empties the tree.
    pub fn remove_subtree(&mut self, node: NodeId) -> Result<usize> {
        let parent = self.checked_entry(node)?.parent;
        if let Some(parent) = parent {
            self.checked_entry_mut(parent)?.children.retain(|c| *c != node);
        } else {
            self.root = None;
        }

        let mut removed = 0;
        let mut stack = vec![node];
        while let Some(cur) = stack.pop() {
            let Some(entry) = self.nodes.get_mut(cur.0).and_then(Option::take) else {
                continue;
            };
            self.node_index.remove(&entry.id);
            stack.extend(entry.children);
            removed += 1;
        }
        self.live -= removed;
        Ok(removed)
    }

    /// Re-parents `node` under `new_parent` at `index`.
    ///
    /// `index` is interpreted after `node` has been detached from its current parent.
    pub fn move_node(&mut self, node: NodeId, new_parent: NodeId, index: usize) -> Result<()> {
        let Some(old_parent) = self.checked_entry(node)?.parent else {
            return Err(TreeError::RootIsImmovable);
        };
        self.checked_entry(new_parent)?;
        if self.is_ancestor_or_self(node, new_parent) {
            return Err(TreeError::WouldCreateCycle { node, new_parent });
        }

        let mut len = self.children(new_parent).len();
        if old_parent == new_parent {
            len -= 1;
        }
        if index > len {
            return Err(TreeError::IndexOutOfBounds { index, len });
        }

        self.checked_entry_mut(old_parent)?
            .children
            .retain(|c| *c != node);
        self.checked_entry_mut(new_parent)?
            .children
            .insert(index, node);
        self.checked_entry_mut(node)?.parent = Some(new_parent);
        Ok(())
    }

    pub fn set_folded(&mut self, node: NodeId, folded: bool) -> Result<()> {
        self.checked_entry_mut(node)?.folded = folded;
        Ok(())
    }

    /// Flips the fold flag and returns the new value.
    pub fn toggle_folded(&mut self, node: NodeId) -> Result<bool> {
        let entry = self.checked_entry_mut(node)?;
        entry.folded = !entry.folded;
        Ok(entry.folded)
    }

    pub fn set_side(&mut self, node: NodeId, side: Side) -> Result<()> {
        self.checked_entry_mut(node)?.side = side;
        Ok(())
    }

    /// Number of edges between `node` and the root.
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        let mut cur = self.entry(node)?;
        let mut depth = 0;
        while let Some(parent) = cur.parent {
            cur = self.entry(parent)?;
            depth += 1;
        }
        Some(depth)
    }

    /// Pre-order walk from the root, children in stacking order.
    pub fn preorder(&self) -> Vec<NodeId> {
        match self.root {
            Some(root) => self.preorder_from(root),
            None => Vec::new(),
        }
    }

    pub fn preorder_from(&self, start: NodeId) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.live);
        if !self.contains(start) {
            return out;
        }
        let mut stack = vec![start];
        while let Some(cur) = stack.pop() {
            out.push(cur);
            stack.extend(self.children(cur).iter().rev().copied());
        }
        out
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(n) = cur {
            if n == ancestor {
                return true;
            }
            cur = self.parent(n);
        }
        false
    }

    fn push_entry(&mut self, id: String, parent: Option<NodeId>, payload: T) -> Result<NodeId> {
        if self.node_index.contains_key(&id) {
            return Err(TreeError::DuplicateId { id });
        }
        let handle = NodeId(self.nodes.len());
        self.node_index.insert(id.clone(), handle);
        self.nodes.push(Some(NodeEntry {
            id,
            parent,
            children: Vec::new(),
            folded: false,
            side: Side::Center,
            payload,
        }));
        self.live += 1;
        Ok(handle)
    }

    fn entry(&self, node: NodeId) -> Option<&NodeEntry<T>> {
        self.nodes.get(node.0).and_then(Option::as_ref)
    }

    fn entry_mut(&mut self, node: NodeId) -> Option<&mut NodeEntry<T>> {
        self.nodes.get_mut(node.0).and_then(Option::as_mut)
    }

    fn checked_entry(&self, node: NodeId) -> Result<&NodeEntry<T>> {
        self.entry(node).ok_or(TreeError::UnknownNode { node })
    }

    fn checked_entry_mut(&mut self, node: NodeId) -> Result<&mut NodeEntry<T>> {
        self.entry_mut(node).ok_or(TreeError::UnknownNode { node })
    }
}

/// Read-only view of a single node.
#[derive(Debug)]
pub struct NodeRef<'a, T> {
    handle: NodeId,
    entry: &'a NodeEntry<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub fn handle(&self) -> NodeId {
        self.handle
    }

    pub fn id(&self) -> &'a str {
        &self.entry.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.entry.parent
    }

    pub fn children(&self) -> &'a [NodeId] {
        &self.entry.children
    }

    pub fn is_root(&self) -> bool {
        self.entry.parent.is_none()
    }

    pub fn is_folded(&self) -> bool {
        self.entry.folded
    }

    pub fn side(&self) -> Side {
        self.entry.side
    }

    pub fn payload(&self) -> &'a T {
        &self.entry.payload
    }
}
