// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Throttle settings parsing, validation, and discovery

mod find;
mod parser;
mod settings;
mod validate;

pub use find::{find_settings, load_settings, load_settings_dir, FindError};
pub use parser::{parse_settings, parse_settings_with_format, Format, ParseError};
pub use settings::{ConfiguredKind, JobDef, ThrottleSettings};
