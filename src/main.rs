// git-rebase-rules: rule-driven branch rebasing
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> --version? --> Settings --> Logging --> run_rebase_command
//! ```

use std::process::ExitCode;

use rebase_rules::cli::{self, Cli};
use rebase_rules::cmd::rebase::run_rebase_command;
use rebase_rules::config::loader::SettingsLoader;
use rebase_rules::config::{DEFAULT_SETTINGS_FILE, ENV_PREFIX, Settings};
use rebase_rules::error::Result;
use rebase_rules::logging::{LogConfig, LogReason, init_logging};

use mimalloc::MiMalloc;
use tracing::debug;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if cli.version {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let (settings, sources) = match load_settings(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load settings: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&settings);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    for source in &sources {
        debug!(reason = LogReason::Config.as_str(), "settings {source}");
    }

    dispatch_command(&cli, &settings)
}

fn build_log_config(settings: &Settings) -> LogConfig {
    LogConfig::builder()
        .with_console_level(settings.global.output_log_level)
        .with_file_level(settings.global.file_log_level)
        .maybe_with_log_file(
            settings
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}

fn dispatch_command(cli: &Cli, settings: &Settings) -> ExitCode {
    let result = match &cli.conf {
        Some(conf) => run_rebase_command(conf, settings, cli.doit),
        None => Err(anyhow::anyhow!("No rule file specified")),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_settings_loader(cli: &Cli) -> Result<SettingsLoader> {
    let mut loader = SettingsLoader::new().add_toml_file_optional(DEFAULT_SETTINGS_FILE);
    for path in &cli.global.settings {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for (key, value) in cli.global.to_settings_overrides() {
        loader = loader.set(key, value)?;
    }
    Ok(loader)
}

fn load_settings(cli: &Cli) -> Result<(Settings, Vec<String>)> {
    let loader = build_settings_loader(cli)?;
    let sources = loader.format_loaded_files();
    Ok((loader.build()?, sources))
}
