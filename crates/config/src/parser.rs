// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings parsing (TOML, HCL, and JSON)

use crate::settings::ThrottleSettings;
use crate::validate::{validate_categories, validate_jobs, warn_on_dangling_references};
use thiserror::Error;

/// Settings file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Hcl,
    Json,
}

/// Errors that can occur during settings parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HCL parse error: {0}")]
    Hcl(#[from] hcl::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid format for {location}: {message}")]
    InvalidFormat { location: String, message: String },
}

/// Parse settings from TOML content (convenience wrapper)
pub fn parse_settings(content: &str) -> Result<ThrottleSettings, ParseError> {
    parse_settings_with_format(content, Format::Toml)
}

/// Parse settings from the given content in the specified format
pub fn parse_settings_with_format(
    content: &str,
    format: Format,
) -> Result<ThrottleSettings, ParseError> {
    // 1. Serde does the heavy lifting
    let mut settings: ThrottleSettings = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Hcl => hcl::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };

    // 2. Name fixup: inject map keys into .name fields
    settings.fix_names();

    // 3. Structural validation
    validate_categories(&settings)?;
    validate_jobs(&settings)?;

    // 4. Category references may be edited live, so only warn
    warn_on_dangling_references(&settings);

    Ok(settings)
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
