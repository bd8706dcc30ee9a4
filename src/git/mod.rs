// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!        executor
//!           |
//!           v
//!   ,------------------,
//!   | backend (trait)  |     head.rs
//!   '--------+---------'     parse status / show output
//!            |
//!            v
//!      VersionControl
//!      status / show_head / checkout / rebase
//!            |
//!            v
//!      ShellBackend --> git CLI
//! ```
//!
//! The crate never touches the repository itself; every change goes through
//! the git executable.

pub mod backend;
pub mod head;
