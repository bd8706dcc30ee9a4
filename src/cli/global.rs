// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI options that override settings.
//!
//! # Option Precedence
//!
//! ```text
//! --settings FILE   <- additional settings files (can repeat)
//! --git PATH        <- tools.git
//! -C, --repo DIR    <- repo.path
//! --log-level N     <- global.output_log_level (0-5)
//! --file-log-level  <- global.file_log_level (defaults to --log-level)
//! --log-file FILE   <- global.log_file
//!
//! Precedence: CLI flags > env > --settings > git-rebase-rules.toml > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

/// Options shared with the settings file.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Additional TOML settings file(s). Can be specified multiple times.
    #[arg(long = "settings", value_name = "FILE", action = clap::ArgAction::Append)]
    pub settings: Vec<PathBuf>,

    /// Path to the git executable. Looked up in PATH if not given.
    #[arg(long = "git", value_name = "PATH")]
    pub git: Option<PathBuf>,

    /// Runs git in DIR instead of the current directory.
    #[arg(short = 'C', long = "repo", value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Converts command-line options to `(key, value)` settings overrides.
    #[must_use]
    pub fn to_settings_overrides(&self) -> Vec<(&'static str, String)> {
        let mut overrides = Vec::new();

        if let Some(level) = self.log_level {
            overrides.push(("global.output_log_level", level.to_string()));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(("global.file_log_level", level.to_string()));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(("global.log_file", path.display().to_string()));
        }

        if let Some(ref git) = self.git {
            overrides.push(("tools.git", git.display().to_string()));
        }

        if let Some(ref repo) = self.repo {
            overrides.push(("repo.path", repo.display().to_string()));
        }

        overrides
    }
}
