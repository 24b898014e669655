// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config resolution and the applicability gate

use crate::view::ThrottleSource;
use throttle_core::{JobKind, JobRef, ThrottleConfig};

/// Resolve the throttle configuration that governs `job`.
///
/// Expanded instances follow their template's configuration.
pub fn resolve_config<S>(source: &S, job: &JobRef) -> Option<ThrottleConfig>
where
    S: ThrottleSource + ?Sized,
{
    source.throttle_config(job.config_owner())
}

/// Whether `job` should be throttled at all under `config`.
pub fn is_applicable(job: &JobRef, config: Option<&ThrottleConfig>) -> bool {
    let Some(config) = config else {
        return false;
    };
    if !config.enabled {
        return false;
    }
    match job.kind {
        JobKind::Expanded { .. } => config.throttle_expanded_instances,
        JobKind::Template => config.throttle_template_instances,
        JobKind::Ordinary => true,
    }
}

/// Resolve and gate in one step; `None` means the job is not throttled.
pub fn applicable_config<S>(source: &S, job: &JobRef) -> Option<ThrottleConfig>
where
    S: ThrottleSource + ?Sized,
{
    resolve_config(source, job).filter(|config| is_applicable(job, Some(config)))
}

/// Whether running instances expanded from `template` share its quotas.
///
/// Only templates whose configuration opts into expanded-instance throttling
/// qualify.
pub fn governs_expanded_instances<S>(source: &S, template: &JobRef) -> bool
where
    S: ThrottleSource + ?Sized,
{
    template.kind.is_template()
        && resolve_config(source, template)
            .is_some_and(|config| config.enabled && config.throttle_expanded_instances)
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
