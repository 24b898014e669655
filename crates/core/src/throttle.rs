// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-job throttle configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which quota a job is counted against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThrottleScope {
    /// Limits apply to instances of this job alone.
    #[default]
    #[serde(rename = "job")]
    PerJob,
    /// Limits come from the categories the job belongs to.
    #[serde(rename = "category")]
    PerCategory,
}

impl fmt::Display for ThrottleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThrottleScope::PerJob => write!(f, "job"),
            ThrottleScope::PerCategory => write!(f, "category"),
        }
    }
}

/// Throttle settings resolved for a single job.
///
/// Limits of `0` mean unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrottleConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub scope: ThrottleScope,
    /// Max concurrent instances on one node (per-job scope)
    #[serde(default)]
    pub max_per_node: u32,
    /// Max concurrent instances across all nodes (per-job scope)
    #[serde(default)]
    pub max_total: u32,
    /// Categories consulted in declaration order (category scope)
    #[serde(default)]
    pub categories: Vec<String>,
    /// Parameter names that separate independently counted variants
    #[serde(default)]
    pub match_params: Vec<String>,
    /// Throttle instances expanded from this job as a template
    #[serde(default)]
    pub throttle_expanded_instances: bool,
    /// Throttle the template job itself
    #[serde(default = "default_true")]
    pub throttle_template_instances: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scope: ThrottleScope::PerJob,
            max_per_node: 0,
            max_total: 0,
            categories: Vec::new(),
            match_params: Vec::new(),
            throttle_expanded_instances: false,
            throttle_template_instances: true,
        }
    }
}

impl ThrottleConfig {
    /// Per-job limits.
    pub fn per_job(max_per_node: u32, max_total: u32) -> Self {
        Self {
            max_per_node,
            max_total,
            ..Self::default()
        }
    }

    /// Category membership; limits come from the named categories.
    pub fn per_category<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scope: ThrottleScope::PerCategory,
            categories: categories.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_match_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.match_params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Category names worth looking up; empty names are dropped.
    ///
    /// Whitespace-only names are kept and simply fail to resolve.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
#[path = "throttle_tests.rs"]
mod tests;
