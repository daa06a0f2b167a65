// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural properties of `TreeStore` over arbitrary operation sequences.

use kurbo::Point;
use mindmap_tree::{Node, NodeId, TreeStore};
use proptest::prelude::*;

/// One editor action. Targets are picked modulo the current node count, plus a few
/// out-of-range picks to exercise rejection.
#[derive(Clone, Debug)]
enum Op {
    Add(usize),
    Move(usize, f64, f64),
    Toggle(usize),
    Rename(usize, String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..64_usize).prop_map(Op::Add),
        (0..64_usize, -1e4..1e4_f64, -1e4..1e4_f64).prop_map(|(i, x, y)| Op::Move(i, x, y)),
        (0..64_usize).prop_map(Op::Toggle),
        (0..64_usize, "[a-z ]{0,8}").prop_map(|(i, s)| Op::Rename(i, s)),
    ]
}

/// Resolve a pick to an id. Picks past the node count map to ids the store never issued.
fn pick(store: &TreeStore, i: usize) -> NodeId {
    let ids: Vec<NodeId> = store.nodes().map(Node::id).collect();
    if i < 56 {
        ids[i % ids.len()]
    } else {
        unknown_id(store)
    }
}

fn unknown_id(store: &TreeStore) -> NodeId {
    // Grow a scratch store past the real one and take an id from beyond its end.
    let mut scratch = TreeStore::new();
    let mut last = scratch.root();
    while scratch.len() <= store.len() {
        last = scratch.add_node(scratch.root()).unwrap();
    }
    last
}

fn apply(store: &mut TreeStore, op: &Op) {
    match op {
        Op::Add(i) => {
            let parent = pick(store, *i);
            let _ = store.add_node(parent);
        }
        Op::Move(i, x, y) => {
            let id = pick(store, *i);
            let _ = store.update_position(id, Point::new(*x, *y));
        }
        Op::Toggle(i) => {
            let id = pick(store, *i);
            let _ = store.toggle_collapse(id);
        }
        Op::Rename(i, label) => {
            let id = pick(store, *i);
            let _ = store.rename_node(id, label.clone());
        }
    }
}

fn build(ops: &[Op]) -> TreeStore {
    let mut store = TreeStore::new();
    for op in ops {
        apply(&mut store, op);
    }
    store
}

fn snapshot(store: &TreeStore) -> Vec<Node> {
    store.nodes().cloned().collect()
}

proptest! {
    #[test]
    fn exactly_one_root(ops in prop::collection::vec(op(), 0..64)) {
        let store = build(&ops);
        let roots: Vec<NodeId> = store.nodes().filter(|n| n.is_root()).map(Node::id).collect();
        prop_assert_eq!(roots, vec![store.root()]);
    }

    #[test]
    fn parent_chains_reach_root(ops in prop::collection::vec(op(), 0..64)) {
        let store = build(&ops);
        for node in store.nodes() {
            let chain: Vec<NodeId> = store.ancestors(node.id()).collect();
            prop_assert!(chain.len() < store.len());
            if !node.is_root() {
                prop_assert_eq!(chain.last().copied(), Some(store.root()));
            }
            for id in chain {
                prop_assert!(store.contains(id), "dangling parent {}", id);
            }
        }
    }

    #[test]
    fn visibility_matches_ancestor_walk(ops in prop::collection::vec(op(), 0..64)) {
        let store = build(&ops);
        prop_assert!(store.is_visible(store.root()));
        for node in store.nodes() {
            let by_walk = store
                .ancestors(node.id())
                .all(|a| !store.get(a).unwrap().is_collapsed());
            prop_assert_eq!(store.is_visible(node.id()), by_walk);
        }
    }

    #[test]
    fn edges_only_join_visible_nodes(ops in prop::collection::vec(op(), 0..64)) {
        let store = build(&ops);
        let visible: Vec<NodeId> = store.visible_nodes().map(Node::id).collect();
        for edge in store.visible_edges() {
            prop_assert!(visible.contains(&edge.parent));
            prop_assert!(visible.contains(&edge.child));
            prop_assert_eq!(store.parent_of(edge.child), Some(edge.parent));
        }
        // Every visible non-root node has exactly one connector to its parent.
        prop_assert_eq!(store.visible_edges().count(), visible.len() - 1);
    }

    #[test]
    fn move_changes_only_target(
        ops in prop::collection::vec(op(), 0..32),
        i in 0..56_usize,
        x in -1e4..1e4_f64,
        y in -1e4..1e4_f64,
    ) {
        let mut store = build(&ops);
        let id = pick(&store, i);
        let before = snapshot(&store);
        store.update_position(id, Point::new(x, y)).unwrap();
        for (old, new) in before.iter().zip(store.nodes()) {
            if new.id() == id {
                prop_assert_eq!(new.position(), Point::new(x, y));
                prop_assert_eq!(new.label(), old.label());
                prop_assert_eq!(new.flags(), old.flags());
                prop_assert_eq!(new.parent(), old.parent());
            } else {
                prop_assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn double_toggle_is_identity(ops in prop::collection::vec(op(), 0..32), i in 0..56_usize) {
        let mut store = build(&ops);
        let id = pick(&store, i);
        let before = snapshot(&store);
        store.toggle_collapse(id).unwrap();
        store.toggle_collapse(id).unwrap();
        prop_assert_eq!(before, snapshot(&store));
    }

    #[test]
    fn unknown_ids_leave_store_untouched(ops in prop::collection::vec(op(), 0..32)) {
        let mut store = build(&ops);
        let before = snapshot(&store);
        let bogus = unknown_id(&store);
        prop_assert!(store.add_node(bogus).is_err());
        prop_assert!(store.update_position(bogus, Point::ORIGIN).is_err());
        prop_assert!(store.toggle_collapse(bogus).is_err());
        prop_assert!(store.rename_node(bogus, "x").is_err());
        prop_assert_eq!(before, snapshot(&store));
    }
}
