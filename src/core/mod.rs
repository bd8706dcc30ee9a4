// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process management.
//!
//! ```text
//!         core
//!          |
//!          v
//!       process
//!          |
//!   Builder  Output
//!   StderrCapture (one temp file, reused)
//! ```

pub mod process;
