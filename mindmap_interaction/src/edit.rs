// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-place label editing.
//!
//! A [`LabelEditor`] tracks at most one editing session. Opening a session (typically on
//! double-click) remembers the label as it was; every keystroke is written straight to the
//! store so the canvas always shows the live text. Ending the session keeps whatever was
//! typed, while canceling writes the remembered label back.
//!
//! ```
//! use mindmap_interaction::edit::LabelEditor;
//! use mindmap_tree::TreeStore;
//!
//! let mut store = TreeStore::new();
//! let root = store.root();
//! let mut editor = LabelEditor::new();
//!
//! editor.begin(root, &store).unwrap();
//! editor.input("Roadmap", &mut store);
//! assert_eq!(store.get(root).unwrap().label(), "Roadmap");
//!
//! assert_eq!(editor.commit(), Some(root));
//! assert!(editor.editing().is_none());
//! ```

use alloc::string::String;
use mindmap_tree::{NodeId, NotFound, TreeStore};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Session {
    node: NodeId,
    original: String,
}

/// Keys with a fixed meaning while a label is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    /// Finish editing and keep the typed text.
    Enter,
    /// Abandon editing and restore the previous label.
    Escape,
}

/// Single-session label editor.
#[derive(Clone, Debug, Default)]
pub struct LabelEditor {
    session: Option<Session>,
}

impl LabelEditor {
    /// Create an idle editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `node`.
    ///
    /// A session already open on another node is committed first, as if its input lost
    /// focus. Beginning again on the node already being edited keeps the open session, so
    /// canceling still restores the label from before editing started.
    pub fn begin(&mut self, node: NodeId, store: &TreeStore) -> Result<(), NotFound> {
        if self.editing() == Some(node) {
            return Ok(());
        }
        let original = String::from(store.get(node).ok_or(NotFound::new(node))?.label());
        if let Some(previous) = self.commit() {
            log::debug!("editing moved from {previous} to {node}");
        }
        self.session = Some(Session { node, original });
        Ok(())
    }

    /// Write the current text of the input to the store.
    ///
    /// Returns `None` when no session is open.
    pub fn input(
        &mut self,
        text: impl Into<String>,
        store: &mut TreeStore,
    ) -> Option<Result<(), NotFound>> {
        let node = self.session.as_ref()?.node;
        Some(store.rename_node(node, text))
    }

    /// Close the session keeping the typed label. Returns the node that was being edited.
    pub fn commit(&mut self) -> Option<NodeId> {
        self.session.take().map(|s| s.node)
    }

    /// Close the session and restore the label the node had when editing began.
    pub fn cancel(&mut self, store: &mut TreeStore) -> Option<Result<NodeId, NotFound>> {
        let Session { node, original } = self.session.take()?;
        Some(store.rename_node(node, original).map(|()| node))
    }

    /// Apply an editing key. Returns the node whose session ended, if any.
    pub fn on_key(
        &mut self,
        key: EditKey,
        store: &mut TreeStore,
    ) -> Option<Result<NodeId, NotFound>> {
        match key {
            EditKey::Enter => self.commit().map(Ok),
            EditKey::Escape => self.cancel(store),
        }
    }

    /// The node currently being edited.
    pub fn editing(&self) -> Option<NodeId> {
        self.session.as_ref().map(|s| s.node)
    }

    /// The label the edited node had when the session began.
    pub fn original_label(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.original.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(store: &TreeStore, id: NodeId) -> &str {
        store.get(id).unwrap().label()
    }

    #[test]
    fn every_input_renames() {
        let mut store = TreeStore::new();
        let root = store.root();
        let mut editor = LabelEditor::new();

        editor.begin(root, &store).unwrap();
        for text in ["R", "Ro", "Roa"] {
            editor.input(text, &mut store).unwrap().unwrap();
            assert_eq!(label(&store, root), text);
        }
        assert_eq!(editor.original_label(), Some("Root"));
    }

    #[test]
    fn escape_restores_original() {
        let mut store = TreeStore::new();
        let child = store.add_node(store.root()).unwrap();
        let mut editor = LabelEditor::new();

        editor.begin(child, &store).unwrap();
        editor.input("", &mut store);
        assert_eq!(label(&store, child), "");
        assert_eq!(editor.on_key(EditKey::Escape, &mut store), Some(Ok(child)));
        assert_eq!(label(&store, child), "New Node");
        assert_eq!(editor.editing(), None);
    }

    #[test]
    fn enter_keeps_text() {
        let mut store = TreeStore::new();
        let root = store.root();
        let mut editor = LabelEditor::new();

        editor.begin(root, &store).unwrap();
        editor.input("Plan", &mut store);
        assert_eq!(editor.on_key(EditKey::Enter, &mut store), Some(Ok(root)));
        assert_eq!(label(&store, root), "Plan");
    }

    #[test]
    fn idle_editor_ignores_input() {
        let mut store = TreeStore::new();
        let mut editor = LabelEditor::new();
        assert_eq!(editor.input("x", &mut store), None);
        assert_eq!(editor.on_key(EditKey::Escape, &mut store), None);
        assert_eq!(label(&store, store.root()), "Root");
    }

    #[test]
    fn begin_on_other_node_commits_previous() {
        let mut store = TreeStore::new();
        let root = store.root();
        let child = store.add_node(root).unwrap();
        let mut editor = LabelEditor::new();

        editor.begin(root, &store).unwrap();
        editor.input("Topic", &mut store);
        editor.begin(child, &store).unwrap();
        assert_eq!(editor.editing(), Some(child));

        // Canceling the second session must not touch the first node.
        editor.cancel(&mut store);
        assert_eq!(label(&store, root), "Topic");
        assert_eq!(label(&store, child), "New Node");
    }

    #[test]
    fn begin_on_same_node_keeps_original() {
        let mut store = TreeStore::new();
        let root = store.root();
        let mut editor = LabelEditor::new();

        editor.begin(root, &store).unwrap();
        editor.input("typed", &mut store);
        // A second double-click inside the open input.
        editor.begin(root, &store).unwrap();
        assert_eq!(editor.original_label(), Some("Root"));

        assert_eq!(editor.on_key(EditKey::Escape, &mut store), Some(Ok(root)));
        assert_eq!(label(&store, root), "Root");
    }

    #[test]
    fn begin_on_unknown_node_keeps_session() {
        let mut big = TreeStore::new();
        let foreign = big.add_node(big.root()).unwrap();
        let store = TreeStore::new();
        let mut editor = LabelEditor::new();

        editor.begin(store.root(), &store).unwrap();
        assert!(editor.begin(foreign, &store).is_err());
        assert_eq!(editor.editing(), Some(store.root()));
    }
}
