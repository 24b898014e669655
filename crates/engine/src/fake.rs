// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake cluster view for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::state::ClusterState;
use crate::view::{ClusterView, ViewError};
use parking_lot::Mutex;
use std::sync::Arc;
use throttle_core::{JobId, NodeSnapshot};

/// Recorded cluster query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterCall {
    IsPending { job: JobId },
    LocalNode,
    Nodes,
}

struct FakeClusterState {
    cluster: ClusterState,
    calls: Vec<ClusterCall>,
    queue_down: bool,
    inventory_down: bool,
}

/// Fake cluster view for testing
#[derive(Clone)]
pub struct FakeCluster {
    inner: Arc<Mutex<FakeClusterState>>,
}

impl Default for FakeCluster {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeClusterState {
                cluster: ClusterState::default(),
                calls: Vec::new(),
                queue_down: false,
                inventory_down: false,
            })),
        }
    }
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ClusterCall> {
        self.inner.lock().calls.clone()
    }

    /// Copy of the current cluster contents
    pub fn state(&self) -> ClusterState {
        self.inner.lock().cluster.clone()
    }

    pub fn set_local(&self, node: NodeSnapshot) {
        self.inner.lock().cluster.local = Some(node);
    }

    /// Add a node, replacing any node with the same id
    pub fn add_node(&self, node: NodeSnapshot) {
        let mut inner = self.inner.lock();
        inner.cluster.nodes.retain(|n| n.id != node.id);
        inner.cluster.nodes.push(node);
    }

    pub fn remove_node(&self, id: &str) {
        self.inner.lock().cluster.nodes.retain(|n| n.id != id);
    }

    pub fn set_pending(&self, job: &str) {
        self.inner.lock().cluster.pending.insert(JobId::new(job));
    }

    pub fn clear_pending(&self, job: &str) {
        self.inner.lock().cluster.pending.remove(job);
    }

    /// Make pending-state queries fail
    pub fn set_queue_down(&self, down: bool) {
        self.inner.lock().queue_down = down;
    }

    /// Make node inventory queries fail
    pub fn set_inventory_down(&self, down: bool) {
        self.inner.lock().inventory_down = down;
    }
}

impl ClusterView for FakeCluster {
    fn is_pending(&self, job: &JobId) -> Result<bool, ViewError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ClusterCall::IsPending { job: job.clone() });
        if inner.queue_down {
            return Err(ViewError::Unavailable("queue".to_string()));
        }
        inner.cluster.is_pending(job)
    }

    fn local_node(&self) -> Result<Option<NodeSnapshot>, ViewError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ClusterCall::LocalNode);
        if inner.inventory_down {
            return Err(ViewError::Unavailable("inventory".to_string()));
        }
        inner.cluster.local_node()
    }

    fn nodes(&self) -> Result<Vec<NodeSnapshot>, ViewError> {
        let mut inner = self.inner.lock();
        inner.calls.push(ClusterCall::Nodes);
        if inner.inventory_down {
            return Err(ViewError::QueryFailed("node listing".to_string()));
        }
        inner.cluster.nodes()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
