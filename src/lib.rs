// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)         cmd (handler)
//!                |                   rebase
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |  config: TOML settings    |
//!              |  rules:  rule file parser |
//!              '-------------+-------------'
//!                            v
//!                        executor
//!                 checkout/rebase/restore
//!                            |
//!                            v
//!                   git (VersionControl)
//!                 ShellBackend, HEAD parsing
//!
//!   +-----------------------------------------+
//!   |  core   process builder, stderr capture |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod executor;
pub mod git;
pub mod logging;
pub mod rules;
