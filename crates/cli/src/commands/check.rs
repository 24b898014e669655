// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `throttle check` - decide whether a job may start

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use throttle_core::{Admission, JobRef, QueueItem};
use throttle_engine::{ClusterState, Dispatcher, SplitView};

use super::read_settings;
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

/// Exit code for a blocked job.
pub const BLOCKED_EXIT_CODE: i32 = 3;

#[derive(Args)]
pub struct CheckArgs {
    /// Settings file (.toml, .hcl, .json) or a directory of them
    #[arg(long, value_name = "PATH")]
    pub settings: PathBuf,

    /// Cluster snapshot (JSON)
    #[arg(long, value_name = "FILE")]
    pub state: PathBuf,

    /// Job to check
    #[arg(long)]
    pub job: String,

    /// Check the job as an expanded instance of this parent
    #[arg(long, value_name = "PARENT", conflicts_with = "template")]
    pub expanded_from: Option<String>,

    /// Check the job as a template instance
    #[arg(long)]
    pub template: bool,

    /// Parameters of the queued instance (key=value)
    #[arg(short = 'p', long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Node to check against; without it only cluster-wide limits apply
    #[arg(long)]
    pub node: Option<String>,
}

pub(crate) fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    if key.trim().is_empty() {
        return Err(format!("invalid key=value: empty key in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

#[derive(Serialize)]
struct CheckReport<'a> {
    job: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    node: Option<&'a str>,
    #[serde(flatten)]
    admission: &'a Admission,
}

pub fn handle(args: CheckArgs, format: OutputFormat) -> Result<()> {
    let settings = read_settings(&args.settings)?;
    let state = read_state(&args.state)?;
    tracing::debug!(
        pending = state.pending.len(),
        nodes = state.nodes.len(),
        local = state.local.is_some(),
        "loaded cluster state"
    );
    let item = queue_item(&args);

    let node = match &args.node {
        Some(id) => Some(
            state
                .node(id)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("unknown node: {}", id))?,
        ),
        None => None,
    };

    let dispatcher = Dispatcher::new(SplitView::new(state, settings));
    let admission = match &node {
        Some(node) => dispatcher.can_dispatch(&item, node),
        None => dispatcher.can_run_anywhere(&item),
    };

    let report = CheckReport {
        job: &args.job,
        node: args.node.as_deref(),
        admission: &admission,
    };
    match format {
        OutputFormat::Text => println!("{}", format_report(&report)),
        OutputFormat::Json => print_json(&report)?,
    }

    if admission.is_allowed() {
        Ok(())
    } else {
        Err(ExitError::new(BLOCKED_EXIT_CODE, String::new()).into())
    }
}

fn read_state(path: &Path) -> Result<ClusterState> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read cluster state {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid cluster state {}", path.display()))
}

fn queue_item(args: &CheckArgs) -> QueueItem {
    let job = match (&args.expanded_from, args.template) {
        (Some(parent), _) => JobRef::expanded(args.job.as_str(), parent.as_str()),
        (None, true) => JobRef::template(args.job.as_str()),
        (None, false) => JobRef::ordinary(args.job.as_str()),
    };
    args.params
        .iter()
        .fold(QueueItem::new(job), |item, (key, value)| {
            item.with_param(key, value)
        })
}

fn format_report(report: &CheckReport<'_>) -> String {
    match report.node {
        Some(node) => format!("{} on {}: {}", report.job, node, report.admission),
        None => format!("{}: {}", report.job, report.admission),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
