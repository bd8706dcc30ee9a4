// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Parsing of git's output to find where HEAD points.
//!
//! ```text
//! status -sb                       -> branch
//!   ## main...origin/main [ahead 1]   Some("main")
//!   ## No commits yet on trunk        Some("trunk")
//!   ## HEAD (no branch)               None  (detached)
//!
//! show --pretty=oneline HEAD       -> commit
//!   <40 hex> subject line             Some("<40 hex>")
//! ```
//!
//! Output is treated as opaque text: anything that does not look like a
//! branch header simply yields `None` and the caller falls back. The headers
//! are matched in their C-locale wording, which `ShellBackend` enforces with
//! `LC_ALL=C`.

use regex::Regex;

/// Length of a full SHA-1 object name.
pub const COMMIT_HASH_LEN: usize = 40;

/// Extracts the branch name from `git status -sb` output.
///
/// Returns `None` when HEAD is detached or no branch header is present.
#[must_use]
pub fn branch_from_status(status: &str) -> Option<String> {
    let header = Regex::new(r"(?m)^## (?:No commits yet on |Initial commit on )?([^ \t\r\n]+)").ok()?;
    let name = header.captures(status)?.get(1)?.as_str();

    // "HEAD (no branch)" and friends
    if name == "HEAD" {
        return None;
    }

    let name = name.split_once("...").map_or(name, |(local, _)| local);
    (!name.is_empty()).then(|| name.to_string())
}

/// Extracts the first full commit hash from `git show --pretty=oneline HEAD` output.
#[must_use]
pub fn commit_from_show(show: &str) -> Option<String> {
    let hash = Regex::new(r"^[0-9a-fA-F]{40}$").ok()?;
    show.split_whitespace()
        .find(|token| hash.is_match(token))
        .map(str::to_string)
}
