// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{ExecutorSnapshot, JobInstance, JobRef, NodeSnapshot, QueueItem};

// ── Node factory functions ──────────────────────────────────────────────────

/// A node with one regular executor per entry in `jobs`, all unparameterized.
pub fn node_running(id: &str, jobs: &[&str]) -> NodeSnapshot {
    jobs.iter()
        .fold(NodeSnapshot::new(id), |node, job| {
            node.running(JobInstance::new(*job))
        })
}

/// A node running `job` once per value of `param`.
pub fn node_running_with(id: &str, job: &str, param: &str, values: &[&str]) -> NodeSnapshot {
    values.iter().fold(NodeSnapshot::new(id), |node, value| {
        node.running(JobInstance::new(job).with_param(param, *value))
    })
}

/// A node running one expanded instance of `parent` per entry in `children`.
pub fn node_running_expanded(id: &str, parent: &str, children: &[&str]) -> NodeSnapshot {
    children.iter().fold(NodeSnapshot::new(id), |node, child| {
        node.running(JobInstance::expanded(*child, parent))
    })
}

/// A node with `idle` free executors and nothing running.
pub fn idle_node(id: &str, idle: usize) -> NodeSnapshot {
    NodeSnapshot::new(id).with_idle(idle)
}

pub fn unrecognized(job: &str) -> ExecutorSnapshot {
    ExecutorSnapshot::Unrecognized {
        job: job.into(),
        kind: "task".to_string(),
    }
}

// ── Queue item factory functions ────────────────────────────────────────────

pub fn queued(job: &str) -> QueueItem {
    QueueItem::new(JobRef::ordinary(job))
}

pub fn queued_expanded(job: &str, parent: &str) -> QueueItem {
    QueueItem::new(JobRef::expanded(job, parent))
}

pub fn queued_template(job: &str) -> QueueItem {
    QueueItem::new(JobRef::template(job))
}
