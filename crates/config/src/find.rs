// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings file loading and discovery

use crate::parser::{Format, ParseError};
use crate::{parse_settings_with_format, ThrottleSettings};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from loading settings files
#[derive(Debug, Error)]
pub enum FindError {
    #[error("'{0}' defined in multiple settings files")]
    Duplicate(String),
    #[error("unsupported settings file '{}'; expected .toml, .hcl, or .json", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Load a single settings file, choosing the format by extension.
pub fn load_settings(path: &Path) -> Result<ThrottleSettings, FindError> {
    let format =
        format_for_path(path).ok_or_else(|| FindError::UnsupportedFormat(path.to_path_buf()))?;
    load_file(path, format)
}

/// Scan `dir` recursively and merge every settings file found.
///
/// Unreadable or invalid files are skipped with a warning, so one broken file
/// does not take down discovery. A category or job defined in more than one
/// file is an error.
pub fn find_settings(dir: &Path) -> Result<ThrottleSettings, FindError> {
    if !dir.exists() {
        return Ok(ThrottleSettings::default());
    }
    merge_dir(dir, false)
}

/// Scan `dir` recursively and merge every settings file, failing on the
/// first file that cannot be read or does not validate.
pub fn load_settings_dir(dir: &Path) -> Result<ThrottleSettings, FindError> {
    merge_dir(dir, true)
}

fn merge_dir(dir: &Path, strict: bool) -> Result<ThrottleSettings, FindError> {
    let mut merged = ThrottleSettings::default();
    let mut files = collect_settings_files(dir)?;
    files.sort_by(|a, b| a.0.cmp(&b.0));
    for (path, format) in files {
        let settings = match load_file(&path, format) {
            Ok(s) => s,
            Err(e) if !strict => {
                tracing::warn!(path = %path.display(), error = %e, "skipping invalid settings");
                continue;
            }
            Err(e) => return Err(e),
        };
        for (name, category) in settings.categories {
            if merged.categories.contains_key(&name) {
                return Err(FindError::Duplicate(format!("category.{}", name)));
            }
            merged.categories.insert(name, category);
        }
        for (name, job) in settings.jobs {
            if merged.jobs.contains_key(&name) {
                return Err(FindError::Duplicate(format!("job.{}", name)));
            }
            merged.jobs.insert(name, job);
        }
    }
    Ok(merged)
}

fn load_file(path: &Path, format: Format) -> Result<ThrottleSettings, FindError> {
    let content = std::fs::read_to_string(path).map_err(|source| FindError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings_with_format(&content, format).map_err(|source| FindError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Recursively collect all settings files (`.hcl`, `.toml`, `.json`) under `dir`.
fn collect_settings_files(dir: &Path) -> Result<Vec<(PathBuf, Format)>, std::io::Error> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in std::fs::read_dir(&current)?.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if let Some(format) = format_for_path(&path) {
                files.push((path, format));
            }
        }
    }
    Ok(files)
}

fn format_for_path(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Some(Format::Toml),
        Some("hcl") => Some(Format::Hcl),
        Some("json") => Some(Format::Json),
        _ => None,
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
