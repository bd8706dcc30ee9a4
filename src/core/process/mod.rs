// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synchronous process spawning.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .flag() .name()
//!   .run(&mut StderrCapture)
//!       --> std::process::Command
//!           stdout piped, stderr into the capture file
//!       --> ProcessOutput { exit_code, stdout, stderr }
//! ```
//!
//! Exactly one process runs at a time: `run` borrows the capture file
//! mutably for the whole lifetime of the child.

pub mod builder;
pub mod capture;
mod runner;
