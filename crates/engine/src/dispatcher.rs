// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Admission decisions for queued jobs
//!
//! Both checks are pure reads of the injected [`SystemView`]: nothing is
//! cached or mutated, so they may be called repeatedly and speculatively.
//! Two decisions racing on the same free slot can both admit; the limits
//! are advisory, not a lock.

use crate::counter::ConcurrencyCounter;
use crate::labels::effective_per_node_limit;
use crate::policy::applicable_config;
use crate::view::SystemView;
use throttle_core::{
    Admission, Blockage, JobId, NodeSnapshot, QueueItem, ThrottleConfig, ThrottleScope,
};

/// Decides whether queued jobs may start.
pub struct Dispatcher<V> {
    view: V,
}

impl<V: SystemView> Dispatcher<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Full pre-dispatch check of `item` against `node`.
    pub fn can_dispatch(&self, item: &QueueItem, node: &NodeSnapshot) -> Admission {
        let _span =
            tracing::debug_span!("throttle.can_dispatch", job = %item.id(), node = node.name())
                .entered();
        let Some(config) = applicable_config(&self.view, &item.job) else {
            return Admission::Allow;
        };
        let blockage = self
            .check_anywhere(item, &config)
            .or_else(|| self.check_node(item, &config, node));
        finish(blockage)
    }

    /// Node-independent check; usable before queuing more parallel copies.
    pub fn can_run_anywhere(&self, item: &QueueItem) -> Admission {
        let _span = tracing::debug_span!("throttle.can_run_anywhere", job = %item.id()).entered();
        let Some(config) = applicable_config(&self.view, &item.job) else {
            return Admission::Allow;
        };
        finish(self.check_anywhere(item, &config))
    }

    fn check_anywhere(&self, item: &QueueItem, config: &ThrottleConfig) -> Option<Blockage> {
        if self.is_pending(item.id()) {
            return Some(Blockage::BuildPending);
        }
        let counter = ConcurrencyCounter::new(&self.view);
        match config.scope {
            ThrottleScope::PerJob => {
                if config.max_total == 0 {
                    return None;
                }
                let count =
                    counter.count_on_all_nodes(&item.job, &item.params, &config.match_params);
                (count >= config.max_total).then_some(Blockage::MaxCapacityTotal { count })
            }
            ThrottleScope::PerCategory => {
                for name in config.category_names() {
                    let Some(category) = self.view.category(name) else {
                        tracing::debug!(category = name, "unknown category, skipping");
                        continue;
                    };
                    if category.max_total == 0 {
                        continue;
                    }
                    let mut count = 0u32;
                    for member in self.view.category_members(name) {
                        if self.is_pending(&member.id) {
                            return Some(Blockage::BuildPending);
                        }
                        count = count.saturating_add(counter.count_member_on_all_nodes(
                            &member,
                            &item.job,
                            &item.params,
                            &config.match_params,
                        ));
                    }
                    if count >= category.max_total {
                        return Some(Blockage::MaxCapacityTotal { count });
                    }
                }
                None
            }
        }
    }

    fn check_node(
        &self,
        item: &QueueItem,
        config: &ThrottleConfig,
        node: &NodeSnapshot,
    ) -> Option<Blockage> {
        let counter = ConcurrencyCounter::new(&self.view);
        match config.scope {
            ThrottleScope::PerJob => {
                if config.max_per_node == 0 {
                    return None;
                }
                let count =
                    counter.count_on_node(node, &item.job, &item.params, &config.match_params);
                (count >= config.max_per_node).then_some(Blockage::MaxCapacityOnNode { count })
            }
            ThrottleScope::PerCategory => {
                for name in config.category_names() {
                    let Some(category) = self.view.category(name) else {
                        tracing::debug!(category = name, "unknown category, skipping");
                        continue;
                    };
                    let limit = effective_per_node_limit(node, &category, category.max_per_node);
                    if limit == 0 {
                        continue;
                    }
                    let mut count = 0u32;
                    for member in self.view.category_members(name) {
                        if self.is_pending(&member.id) {
                            return Some(Blockage::BuildPending);
                        }
                        count = count.saturating_add(counter.count_member_on_node(
                            node,
                            &member,
                            &item.job,
                            &item.params,
                            &config.match_params,
                        ));
                    }
                    if count >= limit {
                        return Some(Blockage::MaxCapacityOnNode { count });
                    }
                }
                None
            }
        }
    }

    /// Pending state, treating an unreachable queue as "not pending".
    fn is_pending(&self, job: &JobId) -> bool {
        self.view.is_pending(job).unwrap_or_else(|e| {
            tracing::warn!(job = %job, error = %e, "pending state unavailable, assuming not pending");
            false
        })
    }
}

fn finish(blockage: Option<Blockage>) -> Admission {
    match &blockage {
        Some(b) => tracing::debug!(reason = %b, "blocked"),
        None => tracing::debug!("allowed"),
    }
    Admission::from(blockage)
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
