// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run(&mut capture)
//!        |
//!        v
//!  build_command()
//!  args, cwd, stdin=null,
//!  stdout=piped, stderr=capture
//!        |
//!        v
//!  output()  (blocks)
//!        |
//!        v
//!  validate exit_code
//!  (skip if ALLOW_FAILURE)
//!        |
//!        v
//!  ProcessOutput
//! ```

use std::fmt::Write as _;
use std::process::{Command, Stdio};
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use super::capture::StderrCapture;
use crate::error::ProcessError;
use crate::logging::LogReason;

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the command line as `<display name> <args...>` (for logging and warnings).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = self.display_name();
        for arg in self.args_slice() {
            if arg.is_empty() || arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and blocks until it exits.
    ///
    /// Stdout is piped; stderr goes through `capture`, which is truncated first.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The capture file cannot be prepared or read back.
    /// - The process exits with a non-zero status and `ALLOW_FAILURE` is not set.
    pub fn run(self, capture: &mut StderrCapture) -> Result<ProcessOutput, ProcessError> {
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(reason = LogReason::Command.as_str(), cmd = %cmd_line, "exec");

        let stderr = capture
            .prepare()
            .map_err(|source| ProcessError::CaptureFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let output = self
            .build_command(stderr)
            .output()
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let stderr = capture
            .read_back()
            .map_err(|source| ProcessError::CaptureFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        trace!(cmd = %cmd_line, exit_code, "completed");

        if exit_code != 0 && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) {
            return Err(ProcessError::NonZeroExit {
                command: cmd_line,
                code: exit_code,
            });
        }

        Ok(ProcessOutput::new(
            exit_code,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
        ))
    }

    /// Builds the std Command from this builder's configuration.
    fn build_command(&self, stderr: Stdio) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }
        command.envs(self.env_vars().iter().map(|(k, v)| (k, v)));

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(stderr);

        command
    }
}
