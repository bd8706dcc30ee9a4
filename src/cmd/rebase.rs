// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rebase command handler.
//!
//! ```text
//! rules::load(--conf)          ConfigError: abort, git untouched
//!        |
//!        +-- no --doit --> executor::dry_run, no backend is built
//!        v
//! ShellBackend::locate(tools.git)
//!        |
//!        v
//! Executor::execute ---> ExecutionReport ---> summary, exit status
//! ```

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::error::Result;
use crate::executor::{self, ExecutionReport, Executor};
use crate::git::backend::ShellBackend;
use crate::logging::LogReason;
use crate::rules;

/// Loads the rule file and executes it.
///
/// Without `doit` the rules are only parsed and logged.
///
/// # Errors
///
/// Returns an error if the rule file cannot be loaded, if git cannot be found
/// or its stderr capture file cannot be created for a confirmed run, or if any git invocation of the run failed. In the last
/// case every rule has still been attempted and the starting branch restored.
pub fn run_rebase_command(conf: &Path, settings: &Settings, doit: bool) -> Result<()> {
    for line in settings.format_options() {
        debug!(reason = LogReason::Config.as_str(), "{line}");
    }

    let rules = rules::load(conf)?;

    if !doit {
        return summarize(&executor::dry_run(&rules));
    }

    let program = ShellBackend::locate(settings.tools.git.as_deref())?;
    let mut backend = ShellBackend::new(program)?;
    if let Some(repo) = &settings.repo.path {
        backend = backend.with_repo(repo);
    }
    debug!(git = %backend.program().display(), repo = ?settings.repo.path, "backend ready");

    let report = Executor::new(backend).confirmed(true).execute(&rules);
    summarize(&report)
}

/// Logs the outcome of a run and turns failed invocations into an error.
fn summarize(report: &ExecutionReport) -> Result<()> {
    if report.is_dry_run() {
        return Ok(());
    }

    let failed = report.failures().count();
    if failed == 0 {
        info!(
            invocations = report.invocations(),
            original = report.original().unwrap_or_default(),
            "all rules applied"
        );
        return Ok(());
    }

    for warning in report.failures() {
        warn!("failed: {warning}");
    }
    anyhow::bail!(
        "{failed} of {} git invocations failed",
        report.invocations()
    )
}
