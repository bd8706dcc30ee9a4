// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          RebaseError (two words)
//!                  |
//!   +--------+-----+-----+
//!   |        |     |     |
//!   v        v     v     v
//! Config    Git  Process Io
//!  Box      Box   Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Config   NotFound, ReadError, MalformedRule, DanglingMarker, InvalidValue
//!   Git      HeadUnknown
//!   Process  ExecutableNotFound, SpawnFailed, NonZeroExit, CaptureFailed
//!
//! CommandWarning is not raised: the executor records it and moves on.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`RebaseError`].
pub type RebaseResult<T> = std::result::Result<T, RebaseError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum RebaseError {
    /// Rule file or settings error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for RebaseError {
                fn from(err: $error) -> Self {
                    RebaseError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    GitError => Git,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Config Errors ---

/// Rule file and settings errors.
///
/// Every variant is fatal and is raised before any branch is touched.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Rule file does not exist.
    #[error("rule file not found: {0}")]
    NotFound(String),

    /// Rule file exists but could not be read.
    #[error("failed to read rule file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A line is neither blank, a comment, nor `from -> onto`.
    #[error("malformed rule on line {line_no}: '{line}'")]
    MalformedRule { line_no: usize, line: String },

    /// A `^` marker with no preceding rule to resolve against.
    #[error("'^' on line {line_no} has no previous rule to refer to: '{line}'")]
    DanglingMarker { line_no: usize, line: String },

    /// Invalid settings value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Neither a branch name nor a commit hash could be determined.
    #[error("could not determine the current branch or commit")]
    HeadUnknown,
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with non-zero status.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// The stderr capture file could not be prepared or read back.
    #[error("failed to capture stderr of '{command}': {source}")]
    CaptureFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Command Warnings ---

/// A non-fatal problem reported by one external invocation.
///
/// Produced for spawn failures, non-zero exits, and any stderr output.
/// Only the first two count as failures of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandWarning {
    /// Command line as it was invoked (`git checkout feature`).
    pub command: String,
    /// Exit code, or `None` if the process never ran to completion.
    pub exit_code: Option<i32>,
    /// Captured standard error, trimmed.
    pub stderr: String,
}

impl CommandWarning {
    /// Whether this warning represents a failed invocation rather than chatter on stderr.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !matches!(self.exit_code, Some(0))
    }
}

impl std::fmt::Display for CommandWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.exit_code, self.stderr.is_empty()) {
            (None, _) => write!(f, "{}: did not run: {}", self.command, self.stderr),
            (Some(code), true) => write!(f, "{}: exited with code {code}", self.command),
            (Some(0), false) => write!(f, "{}: {}", self.command, self.stderr),
            (Some(code), false) => {
                write!(f, "{}: exited with code {code}: {}", self.command, self.stderr)
            }
        }
    }
}

impl std::error::Error for CommandWarning {}
