// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render snapshot built from a tree store.

use alloc::{string::String, vec::Vec};
use kurbo::{Line, Point, Rect};
use mindmap_tree::{Node, NodeId, TreeStore};

use crate::style::SceneStyle;

/// A node box to draw.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeBox {
    /// The node this box represents.
    pub node: NodeId,
    /// Canvas-space box.
    pub rect: Rect,
    /// Text to show inside the box.
    pub label: String,
    /// Root boxes are usually styled differently.
    pub is_root: bool,
    /// Drives the expand/collapse affordance.
    pub collapsed: bool,
}

/// A parent → child line to draw behind the boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    /// The owning node.
    pub parent: NodeId,
    /// The owned node.
    pub child: NodeId,
    /// Segment between the two box anchors.
    pub line: Line,
}

/// Everything a renderer needs for one frame: visible boxes and the connectors between them.
///
/// Boxes are in store insertion order, so later boxes paint over earlier ones; connectors
/// are meant to be drawn underneath all boxes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Visible node boxes, back to front.
    pub boxes: Vec<NodeBox>,
    /// Visible connectors.
    pub connectors: Vec<Connector>,
}

impl Scene {
    /// Snapshot the visible part of `store`.
    pub fn build(store: &TreeStore, style: &SceneStyle) -> Self {
        let boxes = store
            .visible_nodes()
            .map(|node| NodeBox {
                node: node.id(),
                rect: style.node_rect(node.position()),
                label: String::from(node.label()),
                is_root: node.is_root(),
                collapsed: node.is_collapsed(),
            })
            .collect();

        let anchor = |id: NodeId| store.get(id).map(|n: &Node| style.anchor(n.position()));
        let connectors = store
            .visible_edges()
            .filter_map(|edge| {
                Some(Connector {
                    parent: edge.parent,
                    child: edge.child,
                    line: Line::new(anchor(edge.parent)?, anchor(edge.child)?),
                })
            })
            .collect();

        Self { boxes, connectors }
    }

    /// Return the topmost node whose box contains `point`.
    ///
    /// Boxes painted later win, matching what the user sees on screen.
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        self.boxes
            .iter()
            .rev()
            .find(|b| b.rect.contains(point))
            .map(|b| b.node)
    }

    /// Look up the box drawn for `node`, if it is visible.
    pub fn node_box(&self, node: NodeId) -> Option<&NodeBox> {
        self.boxes.iter().find(|b| b.node == node)
    }

    /// Returns the union of all boxes, e.g. to fit the view or size a printout.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.boxes.iter().map(|b| b.rect);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn connectors_meet_box_centers() {
        let mut store = TreeStore::new();
        let root = store.root();
        let child = store.add_node(root).unwrap();
        let scene = Scene::build(&store, &SceneStyle::default());

        assert_eq!(
            scene.connectors,
            vec![Connector {
                parent: root,
                child,
                line: Line::new((375.0, 75.0), (425.0, 125.0)),
            }]
        );
        assert_eq!(
            scene.node_box(child).map(|b| b.rect),
            Some(Rect::new(350.0, 100.0, 500.0, 150.0))
        );
    }

    #[test]
    fn collapsed_subtree_is_not_drawn() {
        let mut store = TreeStore::new();
        let root = store.root();
        let a = store.add_node(root).unwrap();
        let b = store.add_node(a).unwrap();
        store.toggle_collapse(a).unwrap();

        let scene = Scene::build(&store, &SceneStyle::default());
        let drawn: Vec<NodeId> = scene.boxes.iter().map(|b| b.node).collect();
        assert_eq!(drawn, vec![root, a]);
        assert_eq!(scene.connectors.len(), 1);
        assert!(scene.node_box(b).is_none());
        assert!(scene.node_box(a).unwrap().collapsed);
        assert!(scene.node_box(root).unwrap().is_root);
    }

    #[test]
    fn hit_test_prefers_later_box() {
        let mut store = TreeStore::new();
        let root = store.root();
        let child = store.add_node(root).unwrap();
        let scene = Scene::build(&store, &SceneStyle::default());

        // Root box spans (300, 50)..(450, 100); child spans (350, 100)..(500, 150).
        assert_eq!(scene.hit_test(Point::new(310.0, 60.0)), Some(root));
        assert_eq!(scene.hit_test(Point::new(400.0, 120.0)), Some(child));
        assert_eq!(scene.hit_test(Point::new(0.0, 0.0)), None);

        // Overlap: move the child onto the root; the later box is on top.
        store.update_position(child, Point::new(300.0, 50.0)).unwrap();
        let scene = Scene::build(&store, &SceneStyle::default());
        assert_eq!(scene.hit_test(Point::new(310.0, 60.0)), Some(child));
    }

    #[test]
    fn bounds_cover_all_boxes() {
        let mut store = TreeStore::new();
        let child = store.add_node(store.root()).unwrap();
        store.update_position(child, Point::new(-100.0, 400.0)).unwrap();
        let scene = Scene::build(&store, &SceneStyle::default());
        assert_eq!(scene.bounds(), Some(Rect::new(-100.0, 50.0, 450.0, 450.0)));
        assert_eq!(Scene::default().bounds(), None);
    }

    #[test]
    fn custom_node_size_moves_anchor() {
        let store = TreeStore::new();
        let style = SceneStyle {
            node_size: kurbo::Size::new(100.0, 40.0),
        };
        let scene = Scene::build(&store, &style);
        assert_eq!(style.anchor(Point::new(300.0, 50.0)), Point::new(350.0, 70.0));
        assert_eq!(scene.boxes[0].rect, Rect::new(300.0, 50.0, 400.0, 90.0));
    }
}
