// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation helpers for settings parsing

use crate::parser::ParseError;
use crate::settings::ThrottleSettings;
use std::collections::{HashMap, HashSet};
use throttle_core::ThrottleScope;

/// Sort and join keys from a HashMap for deterministic messages.
pub(crate) fn sorted_keys<V>(map: &HashMap<String, V>) -> String {
    let mut v: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
    v.sort();
    v.join(", ")
}

/// Label overrides need a non-blank label, unique within the category.
pub(crate) fn validate_categories(settings: &ThrottleSettings) -> Result<(), ParseError> {
    let mut names: Vec<&String> = settings.categories.keys().collect();
    names.sort();

    for name in names {
        let Some(category) = settings.categories.get(name) else {
            continue;
        };
        if name.trim().is_empty() {
            return Err(ParseError::InvalidFormat {
                location: "category".to_string(),
                message: "category name must not be empty".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for (i, entry) in category.node_label_overrides.iter().enumerate() {
            let location = format!("category.{}.node_label_overrides[{}]", name, i);
            if entry.label.trim().is_empty() {
                return Err(ParseError::InvalidFormat {
                    location,
                    message: "label must not be empty".to_string(),
                });
            }
            if !seen.insert(entry.label.as_str()) {
                return Err(ParseError::InvalidFormat {
                    location,
                    message: format!("duplicate label '{}'", entry.label),
                });
            }
        }
    }
    Ok(())
}

/// Parameter names used for matching must not be blank.
pub(crate) fn validate_jobs(settings: &ThrottleSettings) -> Result<(), ParseError> {
    for (name, job) in &settings.jobs {
        for (i, param) in job.throttle.match_params.iter().enumerate() {
            if param.trim().is_empty() {
                return Err(ParseError::InvalidFormat {
                    location: format!("job.{}.match_params[{}]", name, i),
                    message: "parameter name must not be empty".to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Log references that will be skipped at decision time.
pub(crate) fn warn_on_dangling_references(settings: &ThrottleSettings) {
    for (name, job) in &settings.jobs {
        match job.throttle.scope {
            ThrottleScope::PerCategory => {
                for category in job.throttle.category_names() {
                    if !settings.categories.contains_key(category) {
                        tracing::warn!(
                            job = %name,
                            category,
                            available = %sorted_keys(&settings.categories),
                            "job references unknown category"
                        );
                    }
                }
                if job.throttle.category_names().next().is_none() {
                    tracing::warn!(job = %name, "category scope without categories");
                }
            }
            ThrottleScope::PerJob => {
                if !job.throttle.categories.is_empty() {
                    tracing::warn!(job = %name, "categories ignored for job scope");
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
