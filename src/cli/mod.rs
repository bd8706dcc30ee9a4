// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Invocation
//!
//! ```text
//! git-rebase-rules [global options] -c <RULES> [--doit]
//! git-rebase-rules --version
//!
//! without --doit: dry run, nothing is executed
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::Parser;
use std::path::PathBuf;

/// Rebase chains of git branches from a rule file.
#[derive(Debug, Parser)]
#[command(
    name = "git-rebase-rules",
    author,
    about = "Rebase chains of git branches from a rule file",
    long_about = "git-rebase-rules Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads a rule file of `<branch> -> <new base>` lines and runs\n\
                  `git checkout <branch>` followed by `git rebase <new base>` for\n\
                  each of them, then checks out the branch you started on.\n\
                  Nothing is executed unless --doit is given.",
    after_help = "RULE FILES:\n\n\
                  One rule per line, `->` and `=>` are interchangeable:\n\n\
                  \x20   # comments and blank lines are ignored\n\
                  \x20   branch-D -> branch-A\n\
                  \x20   branch-E => ^\n\n\
                  `^` as the new base stands for the branch of the rule above,\n\
                  so a stack of branches can be rebased with one file.",
    disable_version_flag = true
)]
pub struct Cli {
    /// Options that mirror settings file keys
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Rule file to execute.
    #[arg(
        short = 'c',
        long = "conf",
        value_name = "FILE",
        required_unless_present = "version"
    )]
    pub conf: Option<PathBuf>,

    /// Executes the rules. Without this flag only the plan is shown.
    #[arg(long)]
    pub doit: bool,

    /// Prints the version and exits.
    #[arg(short = 'V', long)]
    pub version: bool,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
