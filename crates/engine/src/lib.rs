// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Throttle admission engine

mod counter;
mod dispatcher;
mod labels;
mod policy;
mod source;
mod state;
mod view;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use counter::ConcurrencyCounter;
pub use dispatcher::Dispatcher;
pub use labels::effective_per_node_limit;
pub use policy::{applicable_config, governs_expanded_instances, is_applicable, resolve_config};
pub use source::SharedSettings;
pub use state::ClusterState;
pub use view::{ClusterView, SplitView, SystemView, ThrottleSource, ViewError};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ClusterCall, FakeCluster};
