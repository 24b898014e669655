// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of an admission check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a dispatch was vetoed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Blockage {
    /// A job sharing the quota is queued but not yet counted as running.
    BuildPending,
    MaxCapacityOnNode { count: u32 },
    MaxCapacityTotal { count: u32 },
}

impl Blockage {
    /// Number of running instances that triggered the block, if counted.
    pub fn count(&self) -> Option<u32> {
        match self {
            Blockage::BuildPending => None,
            Blockage::MaxCapacityOnNode { count } | Blockage::MaxCapacityTotal { count } => {
                Some(*count)
            }
        }
    }
}

impl fmt::Display for Blockage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Blockage::BuildPending => write!(f, "a build is already pending"),
            Blockage::MaxCapacityOnNode { count } => {
                write!(f, "max capacity on node reached ({} running)", count)
            }
            Blockage::MaxCapacityTotal { count } => {
                write!(f, "max total capacity reached ({} running)", count)
            }
        }
    }
}

/// Result of asking whether a job may run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Admission {
    Allow,
    Blocked(Blockage),
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allow)
    }

    pub fn blockage(&self) -> Option<&Blockage> {
        match self {
            Admission::Allow => None,
            Admission::Blocked(blockage) => Some(blockage),
        }
    }
}

impl From<Option<Blockage>> for Admission {
    fn from(blockage: Option<Blockage>) -> Self {
        blockage.map_or(Admission::Allow, Admission::Blocked)
    }
}

impl fmt::Display for Admission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Admission::Allow => write!(f, "allowed"),
            Admission::Blocked(blockage) => write!(f, "blocked: {}", blockage),
        }
    }
}

#[cfg(test)]
#[path = "admission_tests.rs"]
mod tests;
