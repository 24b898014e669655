// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Throttle sources backed by parsed settings

use crate::view::ThrottleSource;
use parking_lot::RwLock;
use std::sync::Arc;
use throttle_config::ThrottleSettings;
use throttle_core::{Category, JobId, JobRef, ThrottleConfig};

impl ThrottleSource for ThrottleSettings {
    fn throttle_config(&self, job: &JobId) -> Option<ThrottleConfig> {
        self.get_job(job.as_str()).map(|def| def.throttle.clone())
    }

    fn category(&self, name: &str) -> Option<Category> {
        self.get_category(name).cloned()
    }

    fn category_members(&self, name: &str) -> Vec<JobRef> {
        self.members_of(name).map(|def| def.job_ref()).collect()
    }
}

/// Settings that can be swapped while decisions are being made.
///
/// Every lookup reads the current settings; nothing is cached between calls.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<ThrottleSettings>>,
}

impl SharedSettings {
    pub fn new(settings: ThrottleSettings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Replace the settings wholesale (e.g. after reloading from disk).
    pub fn replace(&self, settings: ThrottleSettings) {
        let categories = settings.categories.len();
        let jobs = settings.jobs.len();
        *self.inner.write() = settings;
        tracing::info!(categories, jobs, "throttle settings replaced");
    }

    /// Edit the settings in place.
    pub fn update(&self, f: impl FnOnce(&mut ThrottleSettings)) {
        let mut settings = self.inner.write();
        f(&mut *settings);
    }
}

impl ThrottleSource for SharedSettings {
    fn throttle_config(&self, job: &JobId) -> Option<ThrottleConfig> {
        self.inner.read().throttle_config(job)
    }

    fn category(&self, name: &str) -> Option<Category> {
        self.inner.read().category(name)
    }

    fn category_members(&self, name: &str) -> Vec<JobRef> {
        self.inner.read().category_members(name)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
