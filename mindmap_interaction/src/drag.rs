// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-drag translation for node boxes.
//!
//! A drag starts when the pointer goes down on a node box, and each subsequent move writes
//! an absolute position to the store: the node's position at press time plus the pointer's
//! total displacement since the press. Every move is an independent, fully applied
//! [`TreeStore::update_position`]; there is no long-lived transaction to commit or roll back
//! unless the gesture is explicitly [canceled](DragState::cancel).
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use mindmap_interaction::drag::{DragResult, DragState};
//! use mindmap_tree::TreeStore;
//!
//! let mut store = TreeStore::new();
//! let root = store.root();
//! let mut drag = DragState::new();
//!
//! // Root starts at (300, 50). Grab it and move the pointer by (+20, +5).
//! drag.on_down(None, root, Point::new(310.0, 60.0), &store).unwrap();
//! let moved = drag.on_move(None, Point::new(330.0, 65.0), &mut store);
//! assert_eq!(moved, Some(Ok(Point::new(320.0, 55.0))));
//!
//! assert_eq!(drag.on_up(None), DragResult::Moved(root));
//! ```
//!
//! ## Move threshold
//!
//! With [`DragState::with_threshold`], the node does not move until the pointer has travelled
//! further than the threshold from where it went down. Presses released before that report
//! [`DragResult::Released`], which a host can treat as a plain click on the box.
//!
//! ## Multi-pointer support
//!
//! Each pointer is tracked independently. Two pointers dragging the same node simply
//! overwrite each other's writes; the most recent move wins.

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;
use kurbo::Point;
use mindmap_tree::{NodeId, NotFound, TreeStore};

/// Pointer identifier for tracking multiple concurrent drags.
pub type PointerId = NonZeroU64;

/// Pointer used when the host does not distinguish pointers.
const PRIMARY_POINTER: PointerId = NonZeroU64::MIN;

/// State for an active press on a node box.
#[derive(Clone, Debug, PartialEq)]
pub struct Press {
    /// Node being dragged.
    pub node: NodeId,
    /// Pointer position at press time.
    pub down_position: Point,
    /// Node position at press time.
    pub start_position: Point,
    /// Node position when the gesture began. Differs from `start_position` only after the
    /// same node was pressed again without a release in between.
    pub origin: Point,
    /// True once the node has been moved by this press.
    pub dragging: bool,
}

/// Outcome of releasing a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragResult {
    /// The node was moved during the gesture.
    Moved(NodeId),
    /// The pointer was released without moving the node.
    Released(NodeId),
    /// No press was active for the pointer.
    Idle,
}

/// Drag-gesture state machine translating pointer events into node positions.
#[derive(Clone, Debug, Default)]
pub struct DragState {
    /// Active presses per pointer
    presses: BTreeMap<PointerId, Press>,
    /// Pointer travel required before a press starts moving its node
    pub move_threshold: Option<f64>,
}

impl DragState {
    /// Create a drag state that moves nodes on the first pointer move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a drag state that ignores pointer travel up to `move_threshold`.
    pub fn with_threshold(move_threshold: Option<f64>) -> Self {
        Self {
            presses: BTreeMap::new(),
            move_threshold,
        }
    }

    /// Record a pointer down on `node`.
    ///
    /// Replaces any press already active for the same pointer. When that press was on the
    /// same node (a release got lost), the gesture continues from the node's current position
    /// but [`cancel`](Self::cancel) still returns it to where the first press found it. A press
    /// on a different node drops the earlier one. Fails if the store does not contain `node`.
    pub fn on_down(
        &mut self,
        pointer_id: Option<PointerId>,
        node: NodeId,
        position: Point,
        store: &TreeStore,
    ) -> Result<(), NotFound> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        let start_position = store.get(node).ok_or(NotFound::new(node))?.position();
        let origin = self
            .presses
            .get(&pointer_id)
            .filter(|p| p.node == node)
            .map_or(start_position, |p| p.origin);
        self.presses.insert(
            pointer_id,
            Press {
                node,
                down_position: position,
                start_position,
                origin,
                dragging: false,
            },
        );
        log::trace!("drag press on {node} by pointer {pointer_id}");
        Ok(())
    }

    /// Process a pointer move and write the dragged node's new position.
    ///
    /// Returns `None` when the pointer has no active press or has not yet exceeded the move
    /// threshold. Otherwise returns the position written, or the store's error.
    pub fn on_move(
        &mut self,
        pointer_id: Option<PointerId>,
        position: Point,
        store: &mut TreeStore,
    ) -> Option<Result<Point, NotFound>> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        let press = self.presses.get_mut(&pointer_id)?;

        if !press.dragging
            && let Some(threshold) = self.move_threshold
            && press.down_position.distance(position) <= threshold
        {
            return None;
        }
        press.dragging = true;

        let target = press.start_position + (position - press.down_position);
        Some(store.update_position(press.node, target).map(|()| target))
    }

    /// Process a pointer release, ending the gesture.
    pub fn on_up(&mut self, pointer_id: Option<PointerId>) -> DragResult {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        match self.presses.remove(&pointer_id) {
            Some(press) if press.dragging => DragResult::Moved(press.node),
            Some(press) => DragResult::Released(press.node),
            None => DragResult::Idle,
        }
    }

    /// Abort the gesture for a pointer and put its node back where the gesture began.
    ///
    /// Returns `Ok(true)` if a press was canceled, `Ok(false)` if none was active.
    pub fn cancel(
        &mut self,
        pointer_id: Option<PointerId>,
        store: &mut TreeStore,
    ) -> Result<bool, NotFound> {
        let pointer_id = pointer_id.unwrap_or(PRIMARY_POINTER);
        let Some(press) = self.presses.remove(&pointer_id) else {
            return Ok(false);
        };
        if press.dragging || press.origin != press.start_position {
            store.update_position(press.node, press.origin)?;
        }
        Ok(true)
    }

    /// Check if a pointer has an active press.
    pub fn is_pressed(&self, pointer_id: Option<PointerId>) -> bool {
        self.presses
            .contains_key(&pointer_id.unwrap_or(PRIMARY_POINTER))
    }

    /// Check if a pointer is currently moving its node.
    pub fn is_dragging(&self, pointer_id: Option<PointerId>) -> bool {
        self.presses
            .get(&pointer_id.unwrap_or(PRIMARY_POINTER))
            .is_some_and(|p| p.dragging)
    }

    /// Check if any pointer has an active press on `node`.
    pub fn has_active_press(&self, node: NodeId) -> bool {
        self.presses.values().any(|p| p.node == node)
    }

    /// Get the active press for a specific pointer ID.
    pub fn get_press(&self, pointer_id: PointerId) -> Option<&Press> {
        self.presses.get(&pointer_id)
    }

    /// Clear all active presses without touching the store.
    pub fn clear(&mut self) {
        self.presses.clear();
    }
}
