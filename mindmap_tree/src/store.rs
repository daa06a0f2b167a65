// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core store implementation: structure, mutations, visibility queries.

use alloc::{string::String, vec, vec::Vec};
use kurbo::Point;

use crate::config::StoreConfig;
use crate::error::NotFound;
use crate::types::{Edge, Node, NodeFlags, NodeId};

/// The node collection of a mind map.
///
/// The store always holds exactly one root, created by the constructor. Children are
/// appended by [`TreeStore::add_node`] and never removed. All mutation goes through
/// the four operations [`add_node`](TreeStore::add_node),
/// [`update_position`](TreeStore::update_position),
/// [`toggle_collapse`](TreeStore::toggle_collapse), and
/// [`rename_node`](TreeStore::rename_node); each either applies fully or returns
/// [`NotFound`] and leaves the store untouched.
///
/// ## Example
///
/// ```rust
/// use mindmap_tree::TreeStore;
///
/// let mut store = TreeStore::new();
/// let root = store.root();
/// let child = store.add_node(root).unwrap();
///
/// store.toggle_collapse(root).unwrap();
/// assert!(!store.is_visible(child));
///
/// // Adding under a collapsed node expands it again.
/// let second = store.add_node(root).unwrap();
/// assert!(store.is_visible(child));
/// assert!(store.is_visible(second));
/// ```
pub struct TreeStore {
    /// Arena in insertion order; a node's parent always precedes it.
    nodes: Vec<Node>,
    config: StoreConfig,
}

impl core::fmt::Debug for TreeStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let collapsed = self.nodes.iter().filter(|n| n.is_collapsed()).count();
        let visible = self.visible_nodes().count();
        f.debug_struct("TreeStore")
            .field("nodes_total", &total)
            .field("nodes_collapsed", &collapsed)
            .field("nodes_visible", &visible)
            .finish_non_exhaustive()
    }
}

impl Default for TreeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore {
    /// Create a store holding a single root with the default [`StoreConfig`].
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create a store holding a single root built from `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        let root = Node::new(
            NodeId::new(0),
            None,
            config.root_label.clone(),
            config.root_position,
        );
        Self {
            nodes: vec![root],
            config,
        }
    }

    /// The configuration this store was created with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// Number of nodes, root included. Never zero.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is never removed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `id` refers to a node of this store.
    pub fn contains(&self, id: NodeId) -> bool {
        id.idx() < self.nodes.len()
    }

    /// Look up a node.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.idx())
    }

    /// Read-only snapshot of every node in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Create a child of `parent` and return its id.
    ///
    /// The child gets the configured placeholder label, is expanded, and is placed at the
    /// parent's position plus [`StoreConfig::child_offset`]. If `parent` is collapsed it is
    /// expanded first so the new child is immediately visible.
    ///
    /// Returns [`NotFound`] without creating anything if `parent` is unknown.
    ///
    /// Ids are 32-bit, so a store holds at most `u32::MAX + 1` nodes. Once that many exist no
    /// further id can be issued, and `add_node` also returns [`NotFound`] for `parent`
    /// without creating anything.
    pub fn add_node(&mut self, parent: NodeId) -> Result<NodeId, NotFound> {
        let Some(id) = next_id(self.nodes.len()) else {
            log::error!("add_node: node capacity exhausted, cannot add under {parent}");
            return Err(NotFound::new(parent));
        };

        let Some(parent_node) = self.nodes.get_mut(parent.idx()) else {
            log::warn!("add_node: unknown parent {parent}");
            return Err(NotFound::new(parent));
        };

        let expanded = parent_node.flags.contains(NodeFlags::COLLAPSED);
        parent_node.flags.remove(NodeFlags::COLLAPSED);
        parent_node.children.push(id);
        let inherited = parent_node.flags & NodeFlags::ANCESTOR_COLLAPSED;
        let position = parent_node.position + self.config.child_offset;

        let mut node = Node::new(id, Some(parent), self.config.child_label.clone(), position);
        node.flags |= inherited;
        self.nodes.push(node);

        if expanded {
            log::debug!("auto-expanded {parent} to show new child");
            self.propagate_collapse(parent);
        }
        log::debug!("added {id} under {parent} at ({}, {})", position.x, position.y);
        Ok(id)
    }

    /// Move a node to an absolute canvas position. No bounds are applied.
    pub fn update_position(&mut self, id: NodeId, position: Point) -> Result<(), NotFound> {
        let node = self.node_mut(id)?;
        node.position = position;
        log::trace!("moved {id} to ({}, {})", position.x, position.y);
        Ok(())
    }

    /// Flip a node's collapsed flag and return the new value.
    pub fn toggle_collapse(&mut self, id: NodeId) -> Result<bool, NotFound> {
        let node = self.node_mut(id)?;
        node.flags.toggle(NodeFlags::COLLAPSED);
        let collapsed = node.is_collapsed();
        self.propagate_collapse(id);
        log::debug!("{id} collapsed = {collapsed}");
        Ok(collapsed)
    }

    /// Replace a node's label verbatim; empty labels are allowed.
    pub fn rename_node(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), NotFound> {
        let node = self.node_mut(id)?;
        node.label = label.into();
        log::debug!("renamed {id} to {:?}", node.label);
        Ok(())
    }

    /// Returns true if no ancestor of `id` is collapsed.
    ///
    /// The root is always visible. Unknown ids are not visible.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| !n.flags.contains(NodeFlags::ANCESTOR_COLLAPSED))
    }

    /// Iterate nodes eligible for rendering, in insertion order.
    pub fn visible_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes
            .iter()
            .filter(|n| !n.flags.contains(NodeFlags::ANCESTOR_COLLAPSED))
    }

    /// Iterate connectors between visible nodes and their visible parents.
    ///
    /// An edge is never produced for a child whose parent is hidden or missing.
    pub fn visible_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.visible_nodes().filter_map(move |child| {
            let parent = child.parent?;
            self.is_visible(parent).then_some(Edge {
                parent,
                child: child.id,
            })
        })
    }

    /// Returns the parent of a node, or `None` for the root or unknown ids.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get the children of a node, or an empty slice if the id is unknown.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or(&[])
    }

    /// Iterate the ancestors of `id`, nearest first, ending at the root.
    ///
    /// The walk stops early at a parent id the store does not contain.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            store: self,
            next: self.parent_of(id),
        }
    }

    /// Number of ancestors of `id` (zero for the root), or `None` if unknown.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        self.contains(id).then(|| self.ancestors(id).count())
    }

    /// Get the next node in depth-first (pre-order) traversal order.
    ///
    /// Returns `None` past the last node or if `current` is unknown.
    pub fn next_depth_first(&self, current: NodeId) -> Option<NodeId> {
        if let Some(&first_child) = self.children_of(current).first() {
            return Some(first_child);
        }

        let mut node = current;
        while let Some(parent) = self.parent_of(node) {
            if let Some(next_sibling) = self.next_sibling(node) {
                return Some(next_sibling);
            }
            node = parent;
        }
        None
    }

    // --- internals ---

    fn next_sibling(&self, node: NodeId) -> Option<NodeId> {
        let siblings = self.children_of(self.parent_of(node)?);
        let pos = siblings.iter().position(|&id| id == node)?;
        siblings.get(pos + 1).copied()
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, NotFound> {
        self.nodes.get_mut(id.idx()).ok_or_else(|| {
            log::warn!("unknown node {id}");
            NotFound::new(id)
        })
    }

    /// Recompute `ANCESTOR_COLLAPSED` for the descendants of `id`.
    ///
    /// A subtree whose derived bit did not change is skipped, since everything below it is
    /// derived from the same value.
    fn propagate_collapse(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current.idx()];
            let hide = node
                .flags
                .intersects(NodeFlags::COLLAPSED | NodeFlags::ANCESTOR_COLLAPSED);
            let children = node.children.clone();
            for child in children {
                let flags = &mut self.nodes[child.idx()].flags;
                if flags.contains(NodeFlags::ANCESTOR_COLLAPSED) != hide {
                    flags.set(NodeFlags::ANCESTOR_COLLAPSED, hide);
                    stack.push(child);
                }
            }
        }
    }
}

/// The id for the node stored at arena index `len`, if it fits in 32 bits.
fn next_id(len: usize) -> Option<NodeId> {
    u32::try_from(len).ok().map(NodeId::new)
}

/// Iterator over the ancestors of a node, returned by [`TreeStore::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    store: &'a TreeStore,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.next?;
        let Some(node) = self.store.get(id) else {
            self.next = None;
            return None;
        };
        self.next = node.parent;
        Some(id)
    }
}
