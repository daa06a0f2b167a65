// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted editing session: the event sequence a canvas host would feed the store.
//!
//! This example shows how to combine:
//! - `mindmap_tree` for the node tree and its visibility queries,
//! - `mindmap_interaction` for drag and label-editing state between events,
//! - `mindmap_scene` for the boxes and connectors handed to a renderer.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p mindmap_demos --example editing_session`

use kurbo::Point;
use mindmap_interaction::drag::{DragResult, DragState};
use mindmap_interaction::edit::{EditKey, LabelEditor};
use mindmap_scene::{Scene, SceneStyle};
use mindmap_tree::{NotFound, TreeStore};

fn print_scene(title: &str, store: &TreeStore, style: &SceneStyle) {
    let scene = Scene::build(store, style);
    println!("== {title}");
    for b in &scene.boxes {
        let marker = if b.collapsed { "+" } else { "-" };
        println!(
            "  [{marker}] {:<12} at ({:>6.1}, {:>6.1})",
            b.label, b.rect.x0, b.rect.y0
        );
    }
    for c in &scene.connectors {
        println!(
            "  {} -> {}: ({:.1}, {:.1}) to ({:.1}, {:.1})",
            c.parent, c.child, c.line.p0.x, c.line.p0.y, c.line.p1.x, c.line.p1.y
        );
    }
}

fn main() -> Result<(), NotFound> {
    env_logger::init();

    let mut store = TreeStore::new();
    let style = SceneStyle::default();
    let mut drag = DragState::with_threshold(Some(3.0));
    let mut editor = LabelEditor::new();
    let root = store.root();

    // "+" on the root twice, then on the first child.
    let ideas = store.add_node(root)?;
    let tasks = store.add_node(root)?;
    let detail = store.add_node(ideas)?;

    // Double-click the first child and type a new label.
    editor.begin(ideas, &store)?;
    for text in ["I", "Id", "Ideas"] {
        if let Some(result) = editor.input(text, &mut store) {
            result?;
        }
    }
    editor.on_key(EditKey::Enter, &mut store).transpose()?;

    // Drag the second child to the right, hit-testing the press like a canvas would. Both
    // children start at the same offset from the root, and the later box is on top.
    let scene = Scene::build(&store, &style);
    let press = Point::new(360.0, 110.0);
    if let Some(target) = scene.hit_test(press) {
        drag.on_down(None, target, press, &store)?;
        for dx in [1.0, 2.0, 40.0, 120.0] {
            if let Some(result) = drag.on_move(None, Point::new(press.x + dx, press.y), &mut store) {
                result?;
            }
        }
        if let DragResult::Moved(node) = drag.on_up(None) {
            log::info!("dropped {node}");
        }
    }
    store.rename_node(tasks, "Tasks")?;
    store.rename_node(detail, "Detail")?;
    print_scene("expanded", &store, &style);

    // Collapse the first child: its detail disappears along with the connector.
    store.toggle_collapse(ideas)?;
    print_scene("collapsed", &store, &style);

    // Adding under the collapsed node expands it again.
    store.add_node(ideas)?;
    print_scene("after add", &store, &style);

    Ok(())
}
