// githerd: submodule-aware git housekeeping
//
// SPDX-FileCopyrightText: 2026 githerd contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Branch | Commit | Status | Options | Inis | Version
//! ```

use std::process::ExitCode;

use githerd::cli::global::GlobalOptions;
use githerd::cli::{self, Command};
use githerd::cmd::branch::run_branch_command;
use githerd::cmd::commit::run_commit_command;
use githerd::cmd::config::{run_inis_command, run_options_command};
use githerd::cmd::status::run_status_command;
use githerd::config::loader::ConfigLoader;
use githerd::config::Config;
use githerd::logging::init_logging;
use githerd::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    // Version, inis and the empty invocation finish before config and
    // logging come up.
    match &cli.command {
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
        Some(Command::Version) => {
            handle_version_command();
            return ExitCode::SUCCESS;
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.format_loaded_files());
            return ExitCode::SUCCESS;
        }
        Some(_) => {}
    }

    let Ok(config) = load_config(&cli.global) else {
        return ExitCode::FAILURE;
    };

    let log_config = build_log_config(&cli.global, &config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config).await
}

fn build_log_config(global: &GlobalOptions, config: &Config) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.log_level);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(config.global.file_log_level);

    let log_file = global
        .log_file
        .clone()
        .or_else(|| config.global.log_file.clone());

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(log_file.map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Options) => {
            run_options_command(config);
            Ok(true)
        }
        Some(Command::Branch(args)) => run_branch_command(args, config).await,
        Some(Command::Commit(args)) => run_commit_command(args, config).await,
        Some(Command::Status(args)) => run_status_command(args, config).await.map(|()| true),
        // Version, Inis and the empty invocation returned from main already.
        _ => return ExitCode::SUCCESS,
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional("githerd.toml");
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix("GITHERD")
}

fn load_config(global: &GlobalOptions) -> githerd::error::Result<Config> {
    let loader = build_config_loader(global);
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
