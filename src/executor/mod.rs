// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sequential execution of a rule set.
//!
//! ```text
//! execute(&RuleSet)
//!    |
//!    +-- not confirmed --> info prompt, no commands, success
//!    |
//!    v
//! 1. original = branch from `status -sb`
//!               or commit from `show --pretty=oneline HEAD`
//!               or "" (warn)
//! 2. for rule in rules:
//!        checkout rule.from   (failure: warn, continue)
//!        rebase   rule.onto   (failure: warn, continue)
//! 3. checkout original        (always)
//!    |
//!    v
//! ExecutionReport { original, invocations, warnings }
//! ```
//!
//! One failed rule never stops the ones after it, and the restore step runs
//! no matter what happened before.

use tracing::{debug, info, warn};

use crate::error::{CommandWarning, GitError};
use crate::git::backend::{Invocation, VersionControl};
use crate::git::head::{branch_from_status, commit_from_show};
use crate::logging::LogReason;
use crate::rules::RuleSet;

/// Outcome of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    dry_run: bool,
    original: Option<String>,
    invocations: usize,
    warnings: Vec<CommandWarning>,
}

impl ExecutionReport {
    fn dry_run() -> Self {
        Self {
            dry_run: true,
            ..Self::default()
        }
    }

    /// True when nothing was executed because confirmation was missing.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Branch or commit that was checked out when the run started.
    #[must_use]
    pub fn original(&self) -> Option<&str> {
        self.original.as_deref()
    }

    /// Number of external commands run, queries included.
    #[must_use]
    pub const fn invocations(&self) -> usize {
        self.invocations
    }

    /// Every warning, in the order the commands ran.
    #[must_use]
    pub fn warnings(&self) -> &[CommandWarning] {
        &self.warnings
    }

    /// Warnings from commands that failed to run or exited non-zero.
    pub fn failures(&self) -> impl Iterator<Item = &CommandWarning> {
        self.warnings.iter().filter(|w| w.is_failure())
    }

    /// True if no command failed.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.failures().next().is_none()
    }

    fn record(&mut self, invocation: &Invocation) {
        self.invocations += 1;
        if let Some(warning) = invocation.warning() {
            self.warnings.push(warning);
        }
    }
}

/// Runs rule sets against a version-control backend.
#[derive(Debug)]
pub struct Executor<V> {
    vcs: V,
    confirmed: bool,
}

impl<V: VersionControl> Executor<V> {
    /// Creates an executor in dry-run mode.
    pub const fn new(vcs: V) -> Self {
        Self {
            vcs,
            confirmed: false,
        }
    }

    /// Allows the executor to run commands (`--doit`).
    #[must_use]
    pub const fn confirmed(mut self, confirmed: bool) -> Self {
        self.confirmed = confirmed;
        self
    }

    /// Gives the backend back.
    pub fn into_inner(self) -> V {
        self.vcs
    }

    /// Executes `rules` in order and restores the starting branch.
    ///
    /// Never fails: problems are logged and collected in the report.
    pub fn execute(&mut self, rules: &RuleSet) -> ExecutionReport {
        if !self.confirmed {
            return dry_run(rules);
        }

        let mut report = ExecutionReport::default();

        let original = self.current_head(&mut report);
        report.original.clone_from(&original);

        let total = rules.len();
        for (index, rule) in rules.iter().enumerate() {
            info!(
                step = index + 1,
                total,
                from = rule.from(),
                onto = rule.onto(),
                "rebasing"
            );

            let checkout = self.vcs.checkout(rule.from());
            trace_invocation(&checkout);
            report.record(&checkout);

            let rebase = self.vcs.rebase(rule.onto());
            trace_invocation(&rebase);
            report.record(&rebase);
        }

        let target = original.unwrap_or_default();
        info!(original = %target, "restoring");
        let restore = self.vcs.checkout(&target);
        trace_invocation(&restore);
        report.record(&restore);

        report
    }

    /// Finds the branch, or failing that the commit, HEAD points at.
    fn current_head(&mut self, report: &mut ExecutionReport) -> Option<String> {
        let status = self.vcs.status();
        trace_query(&status);
        report.record(&status);

        if let Some(branch) = status.success_stdout().and_then(branch_from_status) {
            debug!(branch = %branch, "starting branch");
            return Some(branch);
        }

        debug!("no branch in status output, falling back to HEAD commit");
        let show = self.vcs.show_head();
        trace_query(&show);
        report.record(&show);

        if let Some(commit) = show.success_stdout().and_then(commit_from_show) {
            debug!(commit = %commit, "starting commit");
            return Some(commit);
        }

        warn!(error = %GitError::HeadUnknown, "restore step will not find its way back");
        None
    }
}

/// Logs the plan for `rules` without touching any backend.
pub fn dry_run(rules: &RuleSet) -> ExecutionReport {
    info!(
        rules = rules.len(),
        "dry run, nothing executed: pass --doit to rebase"
    );
    for rule in rules {
        debug!(%rule, "planned");
    }
    ExecutionReport::dry_run()
}

/// Logs the output of a checkout or rebase.
fn trace_invocation(invocation: &Invocation) {
    if let Some(output) = invocation.output() {
        let stdout = output.stdout().trim();
        if !stdout.is_empty() {
            info!(reason = LogReason::StdOut.as_str(), cmd = invocation.command(), "{stdout}");
        }
    }
    if let Some(warning) = invocation.warning() {
        warn!(reason = LogReason::StdErr.as_str(), "{warning}");
    }
}

/// Logs the output of a status or show query; only failures are warnings.
fn trace_query(invocation: &Invocation) {
    if let Some(output) = invocation.output() {
        debug!(
            reason = LogReason::StdOut.as_str(),
            cmd = invocation.command(),
            "{}",
            output.stdout().lines().next().unwrap_or_default()
        );
    }
    match invocation.warning() {
        Some(warning) if warning.is_failure() => {
            warn!(reason = LogReason::StdErr.as_str(), "{warning}");
        }
        Some(warning) => debug!(reason = LogReason::StdErr.as_str(), "{warning}"),
        None => {}
    }
}

#[cfg(test)]
mod tests;
