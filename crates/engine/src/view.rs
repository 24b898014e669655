// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only collaborators the engine consults on every decision

use std::sync::Arc;
use thiserror::Error;
use throttle_core::{Category, JobId, JobRef, NodeSnapshot, ThrottleConfig};

/// Errors from cluster queries
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("{0} unavailable")]
    Unavailable(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
}

/// Live view of the work queue and node inventory.
///
/// Implementations are read concurrently with the host's dispatch loop; each
/// call returns whatever is current.
pub trait ClusterView: Send + Sync {
    /// Whether `job` has an instance that is queued but not yet running.
    fn is_pending(&self, job: &JobId) -> Result<bool, ViewError>;

    /// The node the engine itself runs on, if it has executors.
    fn local_node(&self) -> Result<Option<NodeSnapshot>, ViewError>;

    /// Every other known node. Must not include the local node.
    fn nodes(&self) -> Result<Vec<NodeSnapshot>, ViewError>;
}

/// Live throttle configuration storage.
pub trait ThrottleSource: Send + Sync {
    /// Configuration attached directly to `job`.
    fn throttle_config(&self, job: &JobId) -> Option<ThrottleConfig>;

    /// Category definition by name.
    fn category(&self, name: &str) -> Option<Category>;

    /// Jobs that share the quota of category `name`.
    fn category_members(&self, name: &str) -> Vec<JobRef>;
}

/// Everything the dispatcher needs to reach a decision.
pub trait SystemView: ClusterView + ThrottleSource {}

impl<T: ClusterView + ThrottleSource + ?Sized> SystemView for T {}

/// A [`SystemView`] assembled from a separate cluster view and config source.
#[derive(Debug, Clone)]
pub struct SplitView<C, S> {
    cluster: C,
    source: S,
}

impl<C, S> SplitView<C, S> {
    pub fn new(cluster: C, source: S) -> Self {
        Self { cluster, source }
    }

    pub fn cluster(&self) -> &C {
        &self.cluster
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<C: ClusterView, S: Send + Sync> ClusterView for SplitView<C, S> {
    fn is_pending(&self, job: &JobId) -> Result<bool, ViewError> {
        self.cluster.is_pending(job)
    }

    fn local_node(&self) -> Result<Option<NodeSnapshot>, ViewError> {
        self.cluster.local_node()
    }

    fn nodes(&self) -> Result<Vec<NodeSnapshot>, ViewError> {
        self.cluster.nodes()
    }
}

impl<C: Send + Sync, S: ThrottleSource> ThrottleSource for SplitView<C, S> {
    fn throttle_config(&self, job: &JobId) -> Option<ThrottleConfig> {
        self.source.throttle_config(job)
    }

    fn category(&self, name: &str) -> Option<Category> {
        self.source.category(name)
    }

    fn category_members(&self, name: &str) -> Vec<JobRef> {
        self.source.category_members(name)
    }
}

macro_rules! forward_views {
    ($($ptr:ty),*) => {$(
        impl<T: ClusterView + ?Sized> ClusterView for $ptr {
            fn is_pending(&self, job: &JobId) -> Result<bool, ViewError> {
                (**self).is_pending(job)
            }

            fn local_node(&self) -> Result<Option<NodeSnapshot>, ViewError> {
                (**self).local_node()
            }

            fn nodes(&self) -> Result<Vec<NodeSnapshot>, ViewError> {
                (**self).nodes()
            }
        }

        impl<T: ThrottleSource + ?Sized> ThrottleSource for $ptr {
            fn throttle_config(&self, job: &JobId) -> Option<ThrottleConfig> {
                (**self).throttle_config(job)
            }

            fn category(&self, name: &str) -> Option<Category> {
                (**self).category(name)
            }

            fn category_members(&self, name: &str) -> Vec<JobRef> {
                (**self).category_members(name)
            }
        }
    )*};
}

forward_views!(&T, Arc<T>);

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
