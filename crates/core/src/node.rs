// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only views of nodes and their executors at decision time.

use crate::job::{JobId, Params};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

crate::define_id! {
    /// Identity of a compute node.
    pub struct NodeId;
}

/// A job instance currently occupying an executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInstance {
    pub job: JobId,
    /// Template this instance was expanded from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<JobId>,
    #[serde(default)]
    pub params: Params,
}

impl JobInstance {
    pub fn new(job: impl Into<JobId>) -> Self {
        Self {
            job: job.into(),
            parent: None,
            params: Params::new(),
        }
    }

    /// An instance expanded from the template `parent`.
    pub fn expanded(job: impl Into<JobId>, parent: impl Into<JobId>) -> Self {
        Self {
            parent: Some(parent.into()),
            ..Self::new(job)
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }
}

/// What an executor is doing right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ExecutorSnapshot {
    Idle,
    Running(JobInstance),
    /// The executor runs something for `job` that is not a build, so its
    /// parameters cannot be read.
    Unrecognized { job: JobId, kind: String },
}

impl ExecutorSnapshot {
    pub fn running(instance: JobInstance) -> Self {
        ExecutorSnapshot::Running(instance)
    }

    /// The job this executor is busy with, if any.
    pub fn job(&self) -> Option<&JobId> {
        match self {
            ExecutorSnapshot::Idle => None,
            ExecutorSnapshot::Running(instance) => Some(&instance.job),
            ExecutorSnapshot::Unrecognized { job, .. } => Some(job),
        }
    }
}

/// A node as seen by the engine for a single decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub labels: BTreeSet<String>,
    /// Regular executor slots
    #[serde(default)]
    pub executors: Vec<ExecutorSnapshot>,
    /// Extra-capacity executors that don't occupy a regular slot
    #[serde(default)]
    pub one_off_executors: Vec<ExecutorSnapshot>,
}

impl NodeSnapshot {
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            display_name: String::new(),
            labels: BTreeSet::new(),
            executors: Vec::new(),
            one_off_executors: Vec::new(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    pub fn with_executor(mut self, executor: ExecutorSnapshot) -> Self {
        self.executors.push(executor);
        self
    }

    pub fn with_one_off(mut self, executor: ExecutorSnapshot) -> Self {
        self.one_off_executors.push(executor);
        self
    }

    /// Add a regular executor running `instance`.
    pub fn running(self, instance: JobInstance) -> Self {
        self.with_executor(ExecutorSnapshot::Running(instance))
    }

    /// Add `count` idle regular executors.
    pub fn with_idle(mut self, count: usize) -> Self {
        self.executors
            .extend(std::iter::repeat(ExecutorSnapshot::Idle).take(count));
        self
    }

    /// Name for logs and messages, falling back to the id.
    pub fn name(&self) -> &str {
        if self.display_name.is_empty() {
            self.id.as_str()
        } else {
            &self.display_name
        }
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    /// One-off executors first, then regular executors.
    pub fn all_executors(&self) -> impl Iterator<Item = &ExecutorSnapshot> {
        self.one_off_executors.iter().chain(self.executors.iter())
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
