// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use throttle_config::ThrottleSettings;

/// Load settings from a single file, or merge every settings file under a directory.
///
/// Every file must parse and validate; a broken file fails the whole load.
pub(crate) fn read_settings(path: &Path) -> Result<ThrottleSettings> {
    let settings = if path.is_dir() {
        throttle_config::load_settings_dir(path)
    } else {
        throttle_config::load_settings(path)
    };
    settings.with_context(|| format!("failed to load settings from {}", path.display()))
}
