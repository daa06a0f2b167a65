// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mindmap Scene: turns a [`TreeStore`](mindmap_tree::TreeStore) into drawable geometry.
//!
//! The scene is a plain snapshot: the boxes of all visible nodes and the connector lines between
//! visible parents and children, in canvas coordinates. A renderer maps these to whatever
//! primitives its drawing surface offers; the scene itself draws nothing.
//!
//! Every node box has the same size ([`SceneStyle::node_size`], 150×50 by default) with its
//! top-left corner at the node's position. Connectors join box centers, so with the default
//! style an edge anchors at `position + (75, 25)` on both ends.
//!
//! ```rust
//! use kurbo::Point;
//! use mindmap_scene::{Scene, SceneStyle};
//! use mindmap_tree::TreeStore;
//!
//! let mut store = TreeStore::new();
//! let child = store.add_node(store.root()).unwrap();
//!
//! let scene = Scene::build(&store, &SceneStyle::default());
//! assert_eq!(scene.boxes.len(), 2);
//! assert_eq!(scene.connectors[0].line.p1, Point::new(425.0, 125.0));
//! assert_eq!(scene.hit_test(Point::new(400.0, 140.0)), Some(child));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scene;
mod style;

pub use scene::{Connector, NodeBox, Scene};
pub use style::SceneStyle;
