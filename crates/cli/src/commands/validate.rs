// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `throttle validate` - parse and validate settings

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use throttle_config::ThrottleSettings;

use super::read_settings;
use crate::output::{count_noun, print_json, OutputFormat};

#[derive(Args)]
pub struct ValidateArgs {
    /// Settings file (.toml, .hcl, .json) or a directory of them
    pub path: PathBuf,
}

#[derive(Debug, Serialize, PartialEq)]
struct Summary {
    path: String,
    categories: Vec<String>,
    jobs: Vec<String>,
}

impl Summary {
    fn new(path: String, settings: &ThrottleSettings) -> Self {
        let mut categories: Vec<String> = settings.categories.keys().cloned().collect();
        categories.sort();
        Self {
            path,
            categories,
            jobs: settings.jobs.keys().cloned().collect(),
        }
    }

    fn to_text(&self) -> String {
        format!(
            "{}: {}, {}",
            self.path,
            count_noun(self.categories.len(), "category", "categories"),
            count_noun(self.jobs.len(), "job", "jobs"),
        )
    }
}

pub fn handle(args: ValidateArgs, format: OutputFormat) -> Result<()> {
    let settings = read_settings(&args.path)?;
    let summary = Summary::new(args.path.display().to_string(), &settings);
    match format {
        OutputFormat::Text => println!("{}", summary.to_text()),
        OutputFormat::Json => print_json(&summary)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
