// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeSet;

use super::{Executor, dry_run};
use crate::core::process::builder::ProcessOutput;
use crate::error::ProcessError;
use crate::git::backend::{Invocation, VersionControl};
use crate::rules::{RuleSet, parse};

const HASH: &str = "e83c5163316f89bfbde7d9ab23ca2e25604af290";

/// Backend that records every call and answers from a script.
#[derive(Debug)]
struct RecordingBackend {
    calls: Vec<String>,
    status: Result<ProcessOutput, ()>,
    show: Result<ProcessOutput, ()>,
    failing: BTreeSet<String>,
}

impl RecordingBackend {
    fn on_branch(branch: &str) -> Self {
        Self {
            calls: Vec::new(),
            status: Ok(ProcessOutput::new(
                0,
                format!("## {branch}...origin/{branch}\n"),
                String::new(),
            )),
            show: Ok(ProcessOutput::new(0, format!("{HASH} subject\n"), String::new())),
            failing: BTreeSet::new(),
        }
    }

    fn detached() -> Self {
        Self {
            status: Ok(ProcessOutput::new(0, "## HEAD (no branch)\n".to_string(), String::new())),
            ..Self::on_branch("unused")
        }
    }

    fn failing(mut self, command: &str) -> Self {
        self.failing.insert(command.to_string());
        self
    }

    fn answer(&mut self, command: String, scripted: Option<Result<ProcessOutput, ()>>) -> Invocation {
        self.calls.push(command.clone());
        let outcome = match scripted {
            Some(Ok(output)) => Ok(output),
            Some(Err(())) => Err(ProcessError::SpawnFailed {
                command: command.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "git not found"),
            }),
            None if self.failing.contains(&command) => Ok(ProcessOutput::new(
                1,
                String::new(),
                format!("error: {command} failed"),
            )),
            None => Ok(ProcessOutput::new(0, String::new(), String::new())),
        };
        Invocation::new(format!("git {command}"), outcome)
    }
}

impl VersionControl for RecordingBackend {
    fn status(&mut self) -> Invocation {
        let scripted = self.status.clone();
        self.answer("status -sb".to_string(), Some(scripted))
    }

    fn show_head(&mut self) -> Invocation {
        let scripted = self.show.clone();
        self.answer("show --pretty=oneline HEAD".to_string(), Some(scripted))
    }

    fn checkout(&mut self, reference: &str) -> Invocation {
        self.answer(format!("checkout {reference}"), None)
    }

    fn rebase(&mut self, onto: &str) -> Invocation {
        self.answer(format!("rebase {onto}"), None)
    }
}

fn stack() -> RuleSet {
    parse("branch-D -> branch-A\nbranch-E -> ^\nbranch-F -> ^\n").unwrap()
}

fn mutating(calls: &[String]) -> Vec<&str> {
    calls
        .iter()
        .map(String::as_str)
        .filter(|c| c.starts_with("checkout ") || c.starts_with("rebase "))
        .collect()
}

#[test]
fn test_dry_run_invokes_nothing() {
    let mut executor = Executor::new(RecordingBackend::on_branch("main"));
    let report = executor.execute(&stack());

    assert!(report.is_dry_run());
    assert!(report.succeeded());
    assert_eq!(report.invocations(), 0);
    assert!(executor.into_inner().calls.is_empty());
}

#[test]
fn test_explicit_false_confirmation_is_dry_run() {
    let mut executor = Executor::new(RecordingBackend::on_branch("main")).confirmed(false);
    let report = executor.execute(&stack());
    assert!(report.is_dry_run());
    assert!(executor.into_inner().calls.is_empty());
}

#[test]
fn test_standalone_dry_run_needs_no_backend() {
    let report = dry_run(&stack());
    assert!(report.is_dry_run());
    assert!(report.succeeded());
    assert_eq!(report.invocations(), 0);
    assert_eq!(report.original(), None);
}

#[test]
fn test_chain_produces_exact_call_sequence() {
    let mut executor = Executor::new(RecordingBackend::on_branch("main")).confirmed(true);
    let report = executor.execute(&stack());
    let calls = executor.into_inner().calls;

    assert_eq!(
        calls,
        [
            "status -sb",
            "checkout branch-D",
            "rebase branch-A",
            "checkout branch-E",
            "rebase branch-D",
            "checkout branch-F",
            "rebase branch-E",
            "checkout main",
        ]
    );
    assert!(!report.is_dry_run());
    assert!(report.succeeded());
    assert_eq!(report.original(), Some("main"));
    assert_eq!(report.invocations(), 8);
    assert!(report.warnings().is_empty());
}

#[test]
fn test_failures_do_not_stop_the_sequence() {
    let backend = RecordingBackend::on_branch("main")
        .failing("checkout branch-D")
        .failing("rebase branch-D");
    let mut executor = Executor::new(backend).confirmed(true);
    let report = executor.execute(&stack());
    let calls = executor.into_inner().calls;

    assert_eq!(
        mutating(&calls),
        [
            "checkout branch-D",
            "rebase branch-A",
            "checkout branch-E",
            "rebase branch-D",
            "checkout branch-F",
            "rebase branch-E",
            "checkout main",
        ]
    );
    assert!(!report.succeeded());
    let failed: Vec<_> = report.failures().map(|w| w.command.as_str()).collect();
    assert_eq!(failed, ["git checkout branch-D", "git rebase branch-D"]);
}

#[test]
fn test_restore_runs_even_when_everything_fails() {
    let backend = RecordingBackend::on_branch("main")
        .failing("checkout branch-D")
        .failing("rebase branch-A")
        .failing("checkout branch-E")
        .failing("rebase branch-D")
        .failing("checkout branch-F")
        .failing("rebase branch-E");
    let mut executor = Executor::new(backend).confirmed(true);
    let report = executor.execute(&stack());
    let calls = executor.into_inner().calls;

    assert_eq!(calls.last().map(String::as_str), Some("checkout main"));
    assert_eq!(report.failures().count(), 6);
}

#[test]
fn test_detached_head_falls_back_to_commit_hash() {
    let mut executor = Executor::new(RecordingBackend::detached()).confirmed(true);
    let rules = parse("feature -> main\n").unwrap();
    let report = executor.execute(&rules);
    let calls = executor.into_inner().calls;

    assert_eq!(
        calls,
        [
            "status -sb".to_string(),
            "show --pretty=oneline HEAD".to_string(),
            "checkout feature".to_string(),
            "rebase main".to_string(),
            format!("checkout {HASH}"),
        ]
    );
    assert_eq!(report.original(), Some(HASH));
    assert_eq!(report.original().map(str::len), Some(40));
}

#[test]
fn test_failed_status_falls_back_to_commit_hash() {
    let backend = RecordingBackend {
        status: Err(()),
        ..RecordingBackend::on_branch("unused")
    };
    let mut executor = Executor::new(backend).confirmed(true);
    let report = executor.execute(&RuleSet::default());
    let calls = executor.into_inner().calls;

    assert_eq!(
        calls,
        [
            "status -sb".to_string(),
            "show --pretty=oneline HEAD".to_string(),
            format!("checkout {HASH}"),
        ]
    );
    assert_eq!(report.original(), Some(HASH));
    assert_eq!(report.failures().count(), 1);
}

#[test]
fn test_unknown_head_still_restores_with_empty_identifier() {
    let backend = RecordingBackend {
        status: Ok(ProcessOutput::new(0, "## HEAD (no branch)\n".to_string(), String::new())),
        show: Ok(ProcessOutput::new(128, String::new(), "fatal: bad revision".to_string())),
        ..RecordingBackend::on_branch("unused")
    }
    .failing("checkout ");
    let mut executor = Executor::new(backend).confirmed(true);
    let report = executor.execute(&parse("feature -> main\n").unwrap());
    let calls = executor.into_inner().calls;

    assert_eq!(
        mutating(&calls),
        ["checkout feature", "rebase main", "checkout "]
    );
    assert_eq!(report.original(), None);
    let failed: Vec<_> = report.failures().map(|w| w.command.as_str()).collect();
    assert_eq!(failed, ["git show --pretty=oneline HEAD", "git checkout "]);
}

#[test]
fn test_empty_rule_set_only_restores() {
    let mut executor = Executor::new(RecordingBackend::on_branch("develop")).confirmed(true);
    let report = executor.execute(&RuleSet::default());
    let calls = executor.into_inner().calls;

    assert_eq!(calls, ["status -sb", "checkout develop"]);
    assert!(report.succeeded());
}

#[test]
fn test_execute_does_not_modify_rules() {
    let rules = stack();
    let before = rules.clone();
    let mut executor = Executor::new(RecordingBackend::on_branch("main")).confirmed(true);
    let _ = executor.execute(&rules);
    assert_eq!(rules, before);
}
