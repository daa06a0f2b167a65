// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::NodeId;

/// An operation referenced a node id the store does not contain.
///
/// The store is left untouched when this is returned.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NotFound {
    id: NodeId,
}

impl NotFound {
    /// Report `id` as unknown. Adapters use this when they reject an id before reaching the store.
    pub const fn new(id: NodeId) -> Self {
        Self { id }
    }

    /// The id that could not be resolved.
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {} not found", self.id)
    }
}

impl core::error::Error for NotFound {}
