// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Throttle settings: category definitions and per-job configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use throttle_core::{Category, JobRef, ThrottleConfig};

/// Kind of a configured job.
///
/// Expanded instances are never configured directly; they follow their
/// template's entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfiguredKind {
    #[default]
    Ordinary,
    Template,
}

/// Throttle configuration attached to one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDef {
    /// Job name (injected from map key)
    #[serde(skip)]
    pub name: String,
    #[serde(default)]
    pub kind: ConfiguredKind,
    #[serde(flatten)]
    pub throttle: ThrottleConfig,
}

impl JobDef {
    pub fn job_ref(&self) -> JobRef {
        match self.kind {
            ConfiguredKind::Ordinary => JobRef::ordinary(self.name.as_str()),
            ConfiguredKind::Template => JobRef::template(self.name.as_str()),
        }
    }

    /// Whether this job takes part in the quota of `category`.
    pub fn is_member_of(&self, category: &str) -> bool {
        self.throttle.enabled && self.throttle.categories.iter().any(|c| c == category)
    }
}

/// Parsed throttle settings.
///
/// Jobs keep declaration order so category membership is listed
/// deterministically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThrottleSettings {
    #[serde(default, alias = "category")]
    pub categories: HashMap<String, Category>,
    #[serde(default, alias = "job")]
    pub jobs: IndexMap<String, JobDef>,
}

impl ThrottleSettings {
    /// Get a category definition by name
    pub fn get_category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Get a job definition by name
    pub fn get_job(&self, name: &str) -> Option<&JobDef> {
        self.jobs.get(name)
    }

    /// Enabled jobs that reference `category`, in declaration order.
    pub fn members_of<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a JobDef> + 'a {
        self.jobs.values().filter(move |job| job.is_member_of(category))
    }

    /// Inject map keys into `name` fields.
    pub(crate) fn fix_names(&mut self) {
        for (name, category) in &mut self.categories {
            category.name = name.clone();
        }
        for (name, job) in &mut self.jobs {
            job.name = name.clone();
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
