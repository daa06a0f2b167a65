// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Geometry convention shared between node positions and the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStyle {
    /// Size of every node box. A node's position is the box's top-left corner.
    pub node_size: Size,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            node_size: Size::new(150.0, 50.0),
        }
    }
}

impl SceneStyle {
    /// The box drawn for a node at `position`.
    pub fn node_rect(&self, position: Point) -> Rect {
        Rect::from_origin_size(position, self.node_size)
    }

    /// Where connectors attach to a node at `position`: the center of its box.
    pub fn anchor(&self, position: Point) -> Point {
        position + self.node_size.to_vec2() * 0.5
    }
}
