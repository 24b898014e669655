// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter matching between queued and running instances.

use crate::job::Params;

/// Check whether a running instance counts against a queued one.
///
/// Every key in `keys` must agree: equal values on both sides, or absent on
/// both sides. A key present on only one side is a mismatch. With no keys,
/// every instance matches.
pub fn params_match(running: &Params, queued: &Params, keys: &[String]) -> bool {
    keys.iter()
        .all(|key| match (running.get(key), queued.get(key)) {
            (None, None) => true,
            (Some(running), Some(queued)) => running == queued,
            _ => false,
        })
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
