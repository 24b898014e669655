// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! throttle-core: data model for concurrency admission control

pub mod admission;
pub mod category;
pub mod id;
pub mod job;
pub mod node;
pub mod params;
pub mod throttle;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use admission::{Admission, Blockage};
pub use category::{Category, NodeLabelOverride};
pub use job::{JobId, JobKind, JobRef, Params, QueueItem};
pub use node::{ExecutorSnapshot, JobInstance, NodeId, NodeSnapshot};
pub use params::params_match;
pub use throttle::{ThrottleConfig, ThrottleScope};
