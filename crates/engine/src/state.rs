// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A recorded cluster snapshot that can stand in for the live inventory

use crate::view::{ClusterView, ViewError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use throttle_core::{JobId, NodeSnapshot};

/// Queue and inventory captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterState {
    /// Jobs with an instance queued but not yet running
    #[serde(default)]
    pub pending: BTreeSet<JobId>,
    /// The node hosting the dispatcher itself
    #[serde(default)]
    pub local: Option<NodeSnapshot>,
    #[serde(default)]
    pub nodes: Vec<NodeSnapshot>,
}

impl ClusterState {
    /// Find a node by id, including the local node.
    pub fn node(&self, id: &str) -> Option<&NodeSnapshot> {
        self.local
            .iter()
            .chain(self.nodes.iter())
            .find(|node| node.id == id)
    }
}

impl ClusterView for ClusterState {
    fn is_pending(&self, job: &JobId) -> Result<bool, ViewError> {
        Ok(self.pending.contains(job))
    }

    fn local_node(&self) -> Result<Option<NodeSnapshot>, ViewError> {
        Ok(self.local.clone())
    }

    fn nodes(&self) -> Result<Vec<NodeSnapshot>, ViewError> {
        Ok(self.nodes.clone())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
