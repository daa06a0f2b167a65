// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mindmap Tree: the node-tree state model of a mind-map editor.
//!
//! A mind map is a single tree of labeled nodes placed freely on a canvas. This crate owns
//! that tree and nothing else:
//!
//! - Holds the nodes in a flat arena with parent links, rooted at one node created with the store.
//! - Applies the editor's mutations (add child, move, rename, collapse/expand) as atomic transitions.
//! - Answers the derived visibility queries a renderer needs: which nodes and which
//!   parent → child connectors are eligible for drawing under the current collapse state.
//!
//! ## Not a layout engine
//!
//! Positions are always explicit coordinates set by the user (or the fixed child offset applied
//! by [`TreeStore::add_node`]). Nothing here arranges nodes; moving a parent does not move its
//! children.
//!
//! ## Visibility
//!
//! A node is visible when none of its ancestors is collapsed. The root is always visible, and a
//! collapsed node still shows itself, only its descendants disappear. The store keeps a derived
//! [`NodeFlags::ANCESTOR_COLLAPSED`] bit per node, refreshed for the affected subtree whenever a
//! collapse flag changes, so [`TreeStore::is_visible`] is a flag read rather than an ancestor walk.
//!
//! ## API overview
//!
//! - [`TreeStore`]: the node collection and its operations.
//! - [`Node`]: read-only view of one node (label, position, collapse state, parent, children).
//! - [`NodeId`]: opaque identifier, unique for the store's lifetime.
//! - [`Edge`]: a visible parent → child connector.
//! - [`StoreConfig`]: root label/position and new-child defaults.
//! - [`NotFound`]: the only error, returned when an operation names an unknown node.
//!
//! Key operations:
//! - [`TreeStore::add_node`] → [`NodeId`] (auto-expands a collapsed parent)
//! - [`TreeStore::update_position`] / [`TreeStore::toggle_collapse`] / [`TreeStore::rename_node`]
//! - [`TreeStore::visible_nodes`] and [`TreeStore::visible_edges`]
//! - [`TreeStore::ancestors`], [`TreeStore::children_of`], and [`TreeStore::next_depth_first`] for traversal.
//!
//! ## Logging
//!
//! Mutations are reported through the [`log`] facade: `debug` for structural changes, `trace`
//! for position updates, and `warn` when an operation is rejected. Installing a logger is up to
//! the application.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod store;
mod types;

pub use config::StoreConfig;
pub use error::NotFound;
pub use store::{Ancestors, TreeStore};
pub use types::{Edge, Node, NodeFlags, NodeId};
