// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Version-control backend abstraction layer.
//!
//! ```text
//! VersionControl (trait)
//!   status      -> git status -sb
//!   show_head   -> git show --pretty=oneline HEAD
//!   checkout    -> git checkout <ref>
//!   rebase      -> git rebase <ref>
//!         |
//!         v
//!   ShellBackend --> git CLI, stderr into one reused temp file
//! ```
//!
//! Every operation takes `&mut self`: a backend runs one command at a time.

use std::path::{Path, PathBuf};

use crate::core::process::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::core::process::capture::StderrCapture;
use crate::error::{CommandWarning, ProcessError, RebaseResult};

/// Name used to look up git on PATH.
pub const GIT_PROGRAM: &str = "git";

// --- Invocation ---

/// Result of one external command, with the command line it was run as.
#[derive(Debug)]
pub struct Invocation {
    command: String,
    outcome: Result<ProcessOutput, ProcessError>,
}

impl Invocation {
    /// Wraps the outcome of running `command`.
    pub fn new(command: impl Into<String>, outcome: Result<ProcessOutput, ProcessError>) -> Self {
        Self {
            command: command.into(),
            outcome,
        }
    }

    /// Command line as invoked.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Output of the process, if it ran to completion.
    #[must_use]
    pub fn output(&self) -> Option<&ProcessOutput> {
        self.outcome.as_ref().ok()
    }

    /// Stdout of a successful (exit 0) run.
    #[must_use]
    pub fn success_stdout(&self) -> Option<&str> {
        self.output()
            .filter(|output| output.success())
            .map(ProcessOutput::stdout)
    }

    /// Builds a warning if the command failed to run, exited non-zero, or wrote to stderr.
    #[must_use]
    pub fn warning(&self) -> Option<CommandWarning> {
        match &self.outcome {
            Err(ProcessError::NonZeroExit { code, .. }) => Some(CommandWarning {
                command: self.command.clone(),
                exit_code: Some(*code),
                stderr: String::new(),
            }),
            Err(e) => Some(CommandWarning {
                command: self.command.clone(),
                exit_code: None,
                stderr: e.to_string(),
            }),
            Ok(output) => {
                let stderr = output.stderr().trim();
                (!output.success() || !stderr.is_empty()).then(|| CommandWarning {
                    command: self.command.clone(),
                    exit_code: Some(output.exit_code()),
                    stderr: stderr.to_string(),
                })
            }
        }
    }
}

// --- VersionControl Trait ---

/// The operations the executor needs from a version-control tool.
///
/// Implementations never fail outright: problems are carried inside the
/// returned [`Invocation`] so the caller can keep going.
pub trait VersionControl {
    /// Short status with a branch header (`status -sb`).
    fn status(&mut self) -> Invocation;

    /// One-line description of the HEAD commit (`show --pretty=oneline HEAD`).
    fn show_head(&mut self) -> Invocation;

    /// Check out a branch or commit.
    fn checkout(&mut self, reference: &str) -> Invocation;

    /// Rebase the checked-out branch onto `onto`.
    fn rebase(&mut self, onto: &str) -> Invocation;
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based backend that runs the git executable.
#[derive(Debug)]
pub struct ShellBackend {
    program: PathBuf,
    repo: Option<PathBuf>,
    capture: StderrCapture,
}

impl ShellBackend {
    /// Creates a backend for the given git executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the stderr capture file cannot be created.
    pub fn new(program: impl AsRef<Path>) -> RebaseResult<Self> {
        Ok(Self {
            program: program.as_ref().to_path_buf(),
            repo: None,
            capture: StderrCapture::new()?,
        })
    }

    /// Runs every command inside `dir` instead of the current directory.
    #[must_use]
    pub fn with_repo(mut self, dir: impl AsRef<Path>) -> Self {
        self.repo = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Resolves the git executable: an explicit path wins, otherwise PATH is searched.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if no explicit path is given
    /// and git is not on PATH.
    pub fn locate(explicit: Option<&Path>) -> RebaseResult<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => ProcessBuilder::which(GIT_PROGRAM)
                .map(|builder| builder.program().clone())
                .map_err(Into::into),
        }
    }

    /// Path of the git executable in use.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn invoke(&mut self, args: &[&str]) -> Invocation {
        let mut builder = ProcessBuilder::new(&self.program)
            .name(GIT_PROGRAM)
            .args(args)
            .env("LC_ALL", "C")
            .flag(ProcessFlags::ALLOW_FAILURE);
        if let Some(repo) = &self.repo {
            builder = builder.cwd(repo);
        }

        let command = builder.command_line();
        Invocation::new(command, builder.run(&mut self.capture))
    }
}

impl VersionControl for ShellBackend {
    fn status(&mut self) -> Invocation {
        self.invoke(&["status", "-sb"])
    }

    fn show_head(&mut self) -> Invocation {
        self.invoke(&["show", "--pretty=oneline", "HEAD"])
    }

    fn checkout(&mut self, reference: &str) -> Invocation {
        self.invoke(&["checkout", reference])
    }

    fn rebase(&mut self, onto: &str) -> Invocation {
        self.invoke(&["rebase", onto])
    }
}
