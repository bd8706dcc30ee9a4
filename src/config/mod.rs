// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Optional tool settings.
//!
//! These configure the tool itself; the rebase plan always comes from the
//! rule file (see [`crate::rules`]).
//!
//! # Settings Hierarchy
//!
//! ```text
//! Priority (low -> high)
//! 1. defaults
//! 2. git-rebase-rules.toml (cwd, optional)
//! 3. --settings FILE (repeatable)
//! 4. GIT_REBASE_RULES_* env vars
//! 5. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GIT_REBASE_RULES_GLOBAL__OUTPUT_LOG_LEVEL=4  -> global.output_log_level = 4
//! GIT_REBASE_RULES_TOOLS__GIT=/opt/git/bin/git -> tools.git = "/opt/git/bin/git"
//! GIT_REBASE_RULES_REPO__PATH=/work/repo       -> repo.path = "/work/repo"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{ConfigError, Result};

use loader::SettingsLoader;
use types::{GlobalConfig, RepoConfig, ToolsConfig};

/// Settings file looked up in the current directory.
pub const DEFAULT_SETTINGS_FILE: &str = "git-rebase-rules.toml";

/// Prefix of settings environment variables.
pub const ENV_PREFIX: &str = "GIT_REBASE_RULES";

/// Complete tool settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Logging options.
    pub global: GlobalConfig,
    /// Tool paths.
    pub tools: ToolsConfig,
    /// Repository options.
    pub repo: RepoConfig,
}

impl Settings {
    /// Create a new settings builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rebase_rules::config::Settings;
    ///
    /// let settings = Settings::builder()
    ///     .add_toml_file_optional("git-rebase-rules.toml")
    ///     .with_env_prefix("GIT_REBASE_RULES")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot work.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `repo.path` exists and is not a
    /// directory.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.repo.path
            && path.exists()
            && !path.is_dir()
        {
            return Err(ConfigError::InvalidValue {
                section: "repo".to_string(),
                key: "path".to_string(),
                message: format!("'{}' is not a directory", path.display()),
            }
            .into());
        }
        Ok(())
    }

    /// Format settings for display, one `key = value` line each, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt = |p: &Option<std::path::PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        let mut options = BTreeMap::new();
        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global.log_file", fmt(&self.global.log_file));
        options.insert("tools.git", fmt(&self.tools.git));
        options.insert("repo.path", fmt(&self.repo.path));

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
