// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mindmap Interaction: input adapters between UI events and a [`TreeStore`](mindmap_tree::TreeStore).
//!
//! These helpers hold the little bit of transient state an editor needs between events and
//! translate it into store operations. They contain no tree logic; every change they make goes
//! through the store's public operations, which are passed in explicitly.
//!
//! - [`drag`]: pointer-drag translation into absolute [`update_position`] writes, with optional
//!   move threshold, cancel-to-restore, and independent tracking per pointer.
//! - [`edit`]: in-place label editing with live renames, Enter to keep and Escape to restore.
//!
//! [`update_position`]: mindmap_tree::TreeStore::update_position
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drag;
pub mod edit;
