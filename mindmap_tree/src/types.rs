// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the mind-map tree: node identifiers, state flags, nodes, and edges.

use alloc::string::String;
use core::fmt;
use kurbo::Point;
use smallvec::SmallVec;

/// Identifier for a node in a [`TreeStore`](crate::TreeStore).
///
/// Identifiers are handed out in insertion order and never reused, so an id stays
/// unique for the whole lifetime of the store that issued it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags::bitflags! {
    /// Collapse state of a node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// The user collapsed this node; its descendants are hidden.
        const COLLAPSED          = 0b0000_0001;
        /// Some ancestor of this node is collapsed, so the node itself is hidden.
        ///
        /// Derived from the ancestors' `COLLAPSED` bits and maintained by the store.
        const ANCESTOR_COLLAPSED = 0b0000_0010;
    }
}

/// A single labeled, positioned element of the mind map.
///
/// Nodes are only mutated through [`TreeStore`](crate::TreeStore) operations; this
/// type exposes read-only accessors.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: SmallVec<[NodeId; 4]>,
    pub(crate) label: String,
    pub(crate) flags: NodeFlags,
    pub(crate) position: Point,
}

impl Node {
    pub(crate) fn new(id: NodeId, parent: Option<NodeId>, label: String, position: Point) -> Self {
        Self {
            id,
            parent,
            children: SmallVec::new(),
            label,
            flags: NodeFlags::empty(),
            position,
        }
    }

    /// The node's identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The owning node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in creation order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// User-editable text. May be empty.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the node's descendants are hidden.
    pub fn is_collapsed(&self) -> bool {
        self.flags.contains(NodeFlags::COLLAPSED)
    }

    /// Raw state flags, including the derived [`NodeFlags::ANCESTOR_COLLAPSED`] bit.
    pub fn flags(&self) -> NodeFlags {
        self.flags
    }

    /// Canvas-space position of the node's top-left corner.
    pub fn position(&self) -> Point {
        self.position
    }

    /// True for the unique node without a parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// A parent → child connector between two visible nodes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Edge {
    /// The owning node.
    pub parent: NodeId,
    /// The owned node.
    pub child: NodeId,
}
