// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   All | Doc | Dist | Clean | Docclean | Distclean | List | Config
//! ```

use std::process::ExitCode;

use relkit::cli::global::GlobalOptions;
use relkit::cli::{self, Command};
use relkit::cmd::clean::{CleanTargets, run_clean_command};
use relkit::cmd::config::{run_inis_command, run_options_command};
use relkit::cmd::list::run_list_command;
use relkit::cmd::phase::{Phase, run_phase_command};
use relkit::config::Config;
use relkit::config::loader::ConfigLoader;
use relkit::error::ComponentError;
use relkit::logging::init_logging;
use relkit::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli).await
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

async fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Inis) => {
            let loader = build_config_loader(&cli.global);
            run_inis_command(&loader.source_lines());
            Ok(())
        }
        Some(Command::List) => load_config(&cli.global).map(|config| run_list_command(&config)),
        Some(Command::All) => run_phase(Phase::All, &cli.global).await,
        Some(Command::Doc) => run_phase(Phase::Doc, &cli.global).await,
        Some(Command::Dist) => run_phase(Phase::Dist, &cli.global).await,
        Some(Command::Clean) => run_clean(CleanTargets::all_targets(), &cli.global).await,
        Some(Command::Docclean) => run_clean(CleanTargets::DOC, &cli.global).await,
        Some(Command::Distclean) => run_clean(CleanTargets::DIST, &cli.global).await,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        }
    }
}

async fn run_phase(phase: Phase, global: &GlobalOptions) -> relkit::error::Result<()> {
    let config = load_config(global)?;
    run_phase_command(phase, &config, global.dry).await
}

async fn run_clean(targets: CleanTargets, global: &GlobalOptions) -> relkit::error::Result<()> {
    let config = load_config(global)?;
    run_clean_command(targets, &config, global.dry).await
}

/// Propagates a failing component's exit status; everything else is 1.
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if let Some(ComponentError::BuildFailed { exit_code, .. }) =
        error.downcast_ref::<ComponentError>()
    {
        let code = u8::try_from(*exit_code).unwrap_or(1);
        return ExitCode::from(code.max(1));
    }
    ExitCode::FAILURE
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::standard();
    for ini_path in &global.inis {
        loader = loader.add_file(ini_path);
    }
    loader
}

fn load_config(global: &GlobalOptions) -> relkit::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for entry in global.to_config_overrides() {
        let Some((key, value)) = entry.split_once('=') else {
            anyhow::bail!("invalid --set option '{entry}', expected key=value");
        };
        loader = loader.set(key, value.to_string())?;
    }
    loader.build()
}
