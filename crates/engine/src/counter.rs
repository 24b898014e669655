// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Counting running instances that occupy a quota

use crate::policy::{applicable_config, governs_expanded_instances};
use crate::view::SystemView;
use throttle_core::{params_match, ExecutorSnapshot, JobId, JobKind, JobRef, NodeSnapshot, Params};

/// Counts running instances of a job against a queued instance.
///
/// Reads the inventory on every call.
pub struct ConcurrencyCounter<'a, V: ?Sized> {
    view: &'a V,
}

/// Which running jobs count toward a target.
#[derive(Clone, Copy)]
struct Occupants<'t> {
    /// Instances of exactly this job
    job: Option<&'t JobId>,
    /// Instances expanded from this template
    children_of: Option<&'t JobId>,
    /// An expanded instance of `children_of` that may run without its parent recorded
    known_child: Option<&'t JobId>,
}

impl Occupants<'_> {
    fn is_empty(&self) -> bool {
        self.job.is_none() && self.children_of.is_none()
    }

    fn include(&self, job: &JobId, parent: Option<&JobId>) -> bool {
        if self.job == Some(job) {
            return true;
        }
        match self.children_of {
            Some(template) => parent == Some(template) || self.known_child == Some(job),
            None => false,
        }
    }
}

impl<'a, V: SystemView + ?Sized> ConcurrencyCounter<'a, V> {
    pub fn new(view: &'a V) -> Self {
        Self { view }
    }

    /// Running instances of `target` on `node` that match `queued` on `keys`.
    ///
    /// A target that is not itself throttled counts as zero.
    pub fn count_on_node(
        &self,
        node: &NodeSnapshot,
        target: &JobRef,
        queued: &Params,
        keys: &[String],
    ) -> u32 {
        let occupants = self.exact(target);
        if occupants.is_empty() {
            return 0;
        }
        count_node(node, occupants, queued, keys)
    }

    /// Sum of [`count_on_node`](Self::count_on_node) over the local node and
    /// every other node.
    pub fn count_on_all_nodes(&self, target: &JobRef, queued: &Params, keys: &[String]) -> u32 {
        let occupants = self.exact(target);
        if occupants.is_empty() {
            return 0;
        }
        self.count_everywhere(occupants, queued, keys)
    }

    /// Running instances on `node` that use the quota of category member `member`.
    ///
    /// Besides the member itself this includes instances expanded from it when
    /// the member is a template that throttles its expanded instances.
    /// `candidate` is the queued job; when it is an expanded instance of
    /// `member`, its own running copies count even if they do not record a
    /// parent.
    pub fn count_member_on_node(
        &self,
        node: &NodeSnapshot,
        member: &JobRef,
        candidate: &JobRef,
        queued: &Params,
        keys: &[String],
    ) -> u32 {
        let occupants = self.member(member, candidate);
        if occupants.is_empty() {
            return 0;
        }
        count_node(node, occupants, queued, keys)
    }

    /// Sum of [`count_member_on_node`](Self::count_member_on_node) over the
    /// local node and every other node.
    pub fn count_member_on_all_nodes(
        &self,
        member: &JobRef,
        candidate: &JobRef,
        queued: &Params,
        keys: &[String],
    ) -> u32 {
        let occupants = self.member(member, candidate);
        if occupants.is_empty() {
            return 0;
        }
        self.count_everywhere(occupants, queued, keys)
    }

    fn exact<'t>(&self, target: &'t JobRef) -> Occupants<'t> {
        Occupants {
            job: applicable_config(self.view, target).map(|_| &target.id),
            children_of: None,
            known_child: None,
        }
    }

    fn member<'t>(&self, member: &'t JobRef, candidate: &'t JobRef) -> Occupants<'t> {
        let children_of = governs_expanded_instances(self.view, member).then_some(&member.id);
        let known_child = match &candidate.kind {
            JobKind::Expanded { parent } if *parent == member.id => Some(&candidate.id),
            _ => None,
        };
        Occupants {
            job: self.exact(member).job,
            children_of,
            known_child,
        }
    }

    fn count_everywhere(&self, occupants: Occupants<'_>, queued: &Params, keys: &[String]) -> u32 {
        let local = match self.view.local_node() {
            Ok(node) => node,
            Err(e) => {
                tracing::warn!(error = %e, "local node unavailable, counting it as empty");
                None
            }
        };
        let nodes = match self.view.nodes() {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!(error = %e, "node inventory unavailable, counting it as empty");
                Vec::new()
            }
        };
        local
            .iter()
            .chain(nodes.iter())
            .map(|node| count_node(node, occupants, queued, keys))
            .fold(0u32, u32::saturating_add)
    }
}

fn count_node(
    node: &NodeSnapshot,
    occupants: Occupants<'_>,
    queued: &Params,
    keys: &[String],
) -> u32 {
    tracing::debug!(
        job = occupants.job.or(occupants.children_of).map(JobId::as_str),
        node = node.name(),
        "checking for builds on node"
    );
    node.all_executors()
        .map(|executor| count_executor(node, executor, occupants, queued, keys))
        .fold(0u32, u32::saturating_add)
}

/// 1 when `executor` runs a matching instance of one of `occupants`, else 0.
fn count_executor(
    node: &NodeSnapshot,
    executor: &ExecutorSnapshot,
    occupants: Occupants<'_>,
    queued: &Params,
    keys: &[String],
) -> u32 {
    match executor {
        ExecutorSnapshot::Idle => 0,
        ExecutorSnapshot::Running(instance) => u32::from(
            occupants.include(&instance.job, instance.parent.as_ref())
                && params_match(&instance.params, queued, keys),
        ),
        ExecutorSnapshot::Unrecognized { job, kind } => {
            if !occupants.include(job, None) {
                0
            } else if keys.is_empty() {
                1
            } else {
                tracing::warn!(
                    job = %job,
                    node = node.name(),
                    kind = kind.as_str(),
                    "executor runs something that is not a build, cannot match parameters"
                );
                0
            }
        }
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
