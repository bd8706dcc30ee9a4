// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the command-line surface.
//!
//! Parses argument lists directly and runs the built binary end to end.

use clap::Parser;
use rebase_rules::cli::Cli;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Runs the binary inside `cwd` with no settings from the environment.
fn run_bin(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_git-rebase-rules"))
        .args(args)
        .current_dir(cwd)
        .env_remove("GIT_REBASE_RULES_GLOBAL__OUTPUT_LOG_LEVEL")
        .env_remove("GIT_REBASE_RULES_TOOLS__GIT")
        .env_remove("GIT_REBASE_RULES_REPO__PATH")
        .output()
        .expect("failed to run binary")
}

fn git(args: &[&str], cwd: &Path) {
    let status = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {args:?} failed");
}

// =============================================================================
// Argument Parsing
// =============================================================================

#[test]
fn cli_conf_and_doit() {
    let cli = Cli::try_parse_from(["git-rebase-rules", "-c", "stack.rules", "--doit"]).unwrap();
    assert!(cli.doit);
    assert_eq!(cli.conf.as_deref(), Some(Path::new("stack.rules")));
}

#[test]
fn cli_unknown_flag_rejected() {
    assert!(Cli::try_parse_from(["git-rebase-rules", "-c", "r", "--force"]).is_err());
}

#[test]
fn cli_conf_requires_value() {
    assert!(Cli::try_parse_from(["git-rebase-rules", "-c"]).is_err());
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn bin_version_prints_package_version() {
    let temp = temp_dir();
    let output = run_bin(&["--version"], temp.path());
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );
}

#[test]
fn bin_missing_conf_prints_usage_and_fails() {
    let temp = temp_dir();
    let output = run_bin(&[], temp.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}

#[test]
fn bin_dry_run_succeeds_without_touching_git() {
    let temp = temp_dir();
    fs::write(temp.path().join("stack.rules"), "a -> b\nc -> ^\n").unwrap();

    // not a repository: a dry run never calls git, so this still succeeds
    let output = run_bin(&["-c", "stack.rules"], temp.path());
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("--doit"));
}

#[test]
fn bin_dry_run_needs_no_temp_dir_or_git() {
    let temp = temp_dir();
    fs::write(temp.path().join("stack.rules"), "a -> b
").unwrap();
    let missing = temp.path().join("no-such-dir");

    let output = Command::new(env!("CARGO_BIN_EXE_git-rebase-rules"))
        .args(["-c", "stack.rules", "--git"])
        .arg(temp.path().join("no-such-git"))
        .current_dir(temp.path())
        .env("TMPDIR", &missing)
        .env_remove("GIT_REBASE_RULES_GLOBAL__OUTPUT_LOG_LEVEL")
        .env_remove("GIT_REBASE_RULES_REPO__PATH")
        .output()
        .expect("failed to run binary");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(!missing.exists());
}

#[test]
fn bin_malformed_rules_fail_before_git() {
    let temp = temp_dir();
    fs::write(temp.path().join("bad.rules"), "a -> b\nno separator\n").unwrap();

    let output = run_bin(&["-c", "bad.rules", "--doit"], temp.path());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("malformed rule on line 2"),
        "stderr: {stderr}"
    );
}

#[test]
fn bin_missing_rule_file_fails() {
    let temp = temp_dir();
    let output = run_bin(&["-c", "absent.rules"], temp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("rule file not found"));
}

#[test]
fn bin_invalid_settings_file_fails() {
    let temp = temp_dir();
    fs::write(temp.path().join("stack.rules"), "a -> b\n").unwrap();
    fs::write(temp.path().join("git-rebase-rules.toml"), "[global]\nbogus = 1\n").unwrap();

    let output = run_bin(&["-c", "stack.rules"], temp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load settings"));
}

#[test]
fn bin_doit_with_repo_option_rebases() {
    let temp = temp_dir();
    let repo = temp.path().join("repo");
    fs::create_dir(&repo).unwrap();
    git(&["init", "--quiet"], &repo);
    git(&["config", "user.email", "test@example.com"], &repo);
    git(&["config", "user.name", "Test"], &repo);
    git(&["checkout", "--quiet", "-b", "main"], &repo);
    git(&["commit", "--allow-empty", "--quiet", "-m", "base"], &repo);
    git(&["branch", "feature"], &repo);
    git(&["commit", "--allow-empty", "--quiet", "-m", "main moves"], &repo);
    fs::write(temp.path().join("stack.rules"), "feature -> main\n").unwrap();

    let output = run_bin(
        &["-C", "repo", "-c", "stack.rules", "--doit", "-l", "1"],
        temp.path(),
    );
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let merged = Command::new("git")
        .args(["merge-base", "--is-ancestor", "main", "feature"])
        .current_dir(&repo)
        .status()
        .unwrap();
    assert!(merged.success());
}

#[test]
fn bin_doit_failure_exits_non_zero() {
    let temp = temp_dir();
    git(&["init", "--quiet"], temp.path());
    git(&["config", "user.email", "test@example.com"], temp.path());
    git(&["config", "user.name", "Test"], temp.path());
    git(&["checkout", "--quiet", "-b", "main"], temp.path());
    git(&["commit", "--allow-empty", "--quiet", "-m", "base"], temp.path());
    fs::write(temp.path().join("stack.rules"), "ghost -> main\n").unwrap();

    let output = run_bin(&["-c", "stack.rules", "--doit"], temp.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("git invocations failed"));
}
