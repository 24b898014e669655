// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identity, kind, and queued instances.

use std::collections::HashMap;
use std::fmt;

crate::define_id! {
    /// Stable identity of a schedulable job.
    ///
    /// Every queued and running instance of a job refers back to the same id.
    pub struct JobId;
}

/// Runtime parameters attached to a queued or running instance.
pub type Params = HashMap<String, String>;

/// How a job relates to other jobs.
///
/// Resolved once per decision instead of inspecting job types throughout the
/// decision logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum JobKind {
    /// A plain job with its own configuration.
    #[default]
    Ordinary,
    /// An instance expanded from a template; configuration comes from `parent`.
    Expanded { parent: JobId },
    /// A template job that expands into child instances.
    Template,
}

impl JobKind {
    pub fn is_expanded(&self) -> bool {
        matches!(self, JobKind::Expanded { .. })
    }

    pub fn is_template(&self) -> bool {
        matches!(self, JobKind::Template)
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::Ordinary => write!(f, "ordinary"),
            JobKind::Expanded { parent } => write!(f, "expanded from {}", parent),
            JobKind::Template => write!(f, "template"),
        }
    }
}

/// A job together with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRef {
    pub id: JobId,
    pub kind: JobKind,
}

impl JobRef {
    pub fn ordinary(id: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            kind: JobKind::Ordinary,
        }
    }

    pub fn expanded(id: impl Into<JobId>, parent: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            kind: JobKind::Expanded {
                parent: parent.into(),
            },
        }
    }

    pub fn template(id: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            kind: JobKind::Template,
        }
    }

    /// The job whose throttle configuration applies to this one.
    ///
    /// Expanded instances never carry their own configuration.
    pub fn config_owner(&self) -> &JobId {
        match &self.kind {
            JobKind::Expanded { parent } => parent,
            JobKind::Ordinary | JobKind::Template => &self.id,
        }
    }
}

/// A queued instance of a job awaiting an admission decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    pub job: JobRef,
    pub params: Params,
}

impl QueueItem {
    pub fn new(job: JobRef) -> Self {
        Self {
            job,
            params: Params::new(),
        }
    }

    /// Attach a parameter value to this queued instance.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &JobId {
        &self.job.id
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
