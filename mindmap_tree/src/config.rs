// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store configuration.

use alloc::string::String;
use kurbo::{Point, Vec2};

/// Initial contents and defaults applied by a [`TreeStore`](crate::TreeStore).
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    /// Label of the root node created with the store.
    pub root_label: String,
    /// Position of the root node created with the store.
    pub root_position: Point,
    /// Placeholder label given to every new child.
    pub child_label: String,
    /// Offset of a new child from its parent's position, so siblings do not overlap their parent.
    pub child_offset: Vec2,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root_label: String::from("Root"),
            root_position: Point::new(300.0, 50.0),
            child_label: String::from("New Node"),
            child_offset: Vec2::new(50.0, 50.0),
        }
    }
}
