// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rule file parsing.
//!
//! # Rule File Format
//!
//! ```text
//! # full-line comment
//! feature-a -> main        rebase feature-a onto main
//! feature-b => feature-a   `=>` works the same as `->`
//! feature-c -> ^           ^ = the branch of the rule above (feature-b)
//! ```
//!
//! # Parse Pipeline
//!
//! ```text
//! lines() --> skip blank / '#'
//!         --> split on first '->' or '=>'
//!         --> resolve '^' against previous rule's `from`
//!         --> RuleSet (file order)
//! ```
//!
//! A leading UTF-8 byte order mark is ignored. The first malformed line aborts
//! the parse; no partial set is returned.

use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::error::ConfigError;
use crate::logging::LogReason;

/// Separators between the branch to rebase and its new base.
pub const SEPARATORS: [&str; 2] = ["->", "=>"];

/// Shorthand for "the branch checked out by the previous rule".
pub const CHAIN_MARKER: &str = "^";

/// Prefix of a full-line comment.
pub const COMMENT_PREFIX: char = '#';

/// UTF-8 byte order mark some editors put at the start of a file.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// One rebase step: check out `from`, then rebase it onto `onto`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RebaseRule {
    from: String,
    onto: String,
}

impl RebaseRule {
    /// Creates a rule from two already-resolved identifiers.
    pub fn new(from: impl Into<String>, onto: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            onto: onto.into(),
        }
    }

    /// Branch or commit that gets checked out and rebased.
    #[must_use]
    pub fn from(&self) -> &str {
        &self.from
    }

    /// New base for `from`.
    #[must_use]
    pub fn onto(&self) -> &str {
        &self.onto
    }
}

impl std::fmt::Display for RebaseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.onto)
    }
}

/// Ordered rules with every chain marker already resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<RebaseRule>,
}

impl RuleSet {
    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule file held no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, RebaseRule> {
        self.rules.iter()
    }

}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RebaseRule;
    type IntoIter = std::slice::Iter<'a, RebaseRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<RebaseRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RebaseRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

/// Parses rule file content.
///
/// # Errors
///
/// Returns `ConfigError::MalformedRule` for a line without a separator or with an
/// empty side, and `ConfigError::DanglingMarker` for a `^` with no rule above it.
pub fn parse(content: &str) -> Result<RuleSet, ConfigError> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let mut rules: Vec<RebaseRule> = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let (from, onto) = split_rule(line).ok_or_else(|| ConfigError::MalformedRule {
            line_no,
            line: raw.to_string(),
        })?;

        let onto = if onto == CHAIN_MARKER {
            rules
                .last()
                .map(|previous| previous.from.clone())
                .ok_or_else(|| ConfigError::DanglingMarker {
                    line_no,
                    line: raw.to_string(),
                })?
        } else {
            onto.to_string()
        };

        info!(line = line_no, from, onto = %onto, "rule");
        rules.push(RebaseRule::new(from, onto));
    }

    Ok(RuleSet { rules })
}

/// Reads and parses a rule file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::ReadError` if it cannot be read, and any error from [`parse`].
pub fn load(path: &Path) -> Result<RuleSet, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.display().to_string())
        } else {
            ConfigError::ReadError {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    let rules = parse(&content)?;
    info!(
        reason = LogReason::Config.as_str(),
        path = %path.display(),
        count = rules.len(),
        "loaded rule file"
    );
    Ok(rules)
}

/// Splits `line` at the earliest separator into trimmed, non-empty halves.
fn split_rule(line: &str) -> Option<(&str, &str)> {
    let (at, separator) = SEPARATORS
        .iter()
        .filter_map(|sep| line.find(sep).map(|at| (at, *sep)))
        .min_by_key(|(at, _)| *at)?;

    let from = line[..at].trim();
    let onto = line[at + separator.len()..].trim();
    (!from.is_empty() && !onto.is_empty()).then_some((from, onto))
}
