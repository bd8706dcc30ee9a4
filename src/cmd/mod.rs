// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args + Settings --> cmd::run_rebase_command
//! ```

pub mod rebase;
