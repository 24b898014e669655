// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-node limit overrides keyed by node label

use throttle_core::{Category, NodeSnapshot};

/// The per-node limit of `category` on `node`.
///
/// The first override (in declaration order) whose label the node carries
/// wins; overrides with a blank label never match. Without a match,
/// `default` is returned unchanged.
pub fn effective_per_node_limit(node: &NodeSnapshot, category: &Category, default: u32) -> u32 {
    let matched = category
        .node_label_overrides
        .iter()
        .filter(|o| !o.label.is_empty())
        .find(|o| node.has_label(&o.label));

    match matched {
        Some(o) => {
            tracing::debug!(
                node = node.name(),
                category = %category.name,
                label = %o.label,
                max_per_node = o.max_per_node,
                "node labels match"
            );
            o.max_per_node
        }
        None => {
            tracing::debug!(node = node.name(), category = %category.name, "node labels mismatch");
            default
        }
    }
}

#[cfg(test)]
#[path = "labels_tests.rs"]
mod tests;
