// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use relkit::cli::{Cli, Command};
use relkit::cli::global::GlobalOptions;
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["relkit", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["relkit", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

// =============================================================================
// Phase Commands
// =============================================================================

#[test]
fn cli_all_command() {
    let cli = Cli::try_parse_from(["relkit", "all"]).unwrap();
    assert!(matches!(cli.command, Some(Command::All)));
}

#[test]
fn cli_doc_command() {
    let cli = Cli::try_parse_from(["relkit", "doc"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Doc)));
}

#[test]
fn cli_dist_command() {
    let cli = Cli::try_parse_from(["relkit", "dist"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Dist)));
}

// =============================================================================
// Clean Commands
// =============================================================================

#[test]
fn cli_clean_command() {
    let cli = Cli::try_parse_from(["relkit", "clean"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Clean)));
}

#[test]
fn cli_docclean_command() {
    let cli = Cli::try_parse_from(["relkit", "docclean"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Docclean)));
}

#[test]
fn cli_distclean_command() {
    let cli = Cli::try_parse_from(["relkit", "distclean"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Distclean)));
}

// =============================================================================
// Introspection Commands
// =============================================================================

#[test]
fn cli_list_command() {
    let cli = Cli::try_parse_from(["relkit", "list"]).unwrap();
    assert!(matches!(cli.command, Some(Command::List)));
}

#[test]
fn cli_options_command() {
    let cli = Cli::try_parse_from(["relkit", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
}

#[test]
fn cli_inis_command() {
    let cli = Cli::try_parse_from(["relkit", "inis"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Inis)));
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_dry_run() {
    let cli = Cli::try_parse_from(["relkit", "--dry", "dist"]).unwrap();
    assert!(cli.global.dry);
}

#[test]
fn cli_global_options_log_levels() {
    let cli = Cli::try_parse_from(["relkit", "-l", "5", "--file-log-level", "3", "dist"]).unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(cli.global.file_log_level, Some(3));
}

#[test]
fn cli_global_options_multiple_inis() {
    let cli =
        Cli::try_parse_from(["relkit", "-i", "base.toml", "-i", "override.toml", "dist"]).unwrap();
    assert_eq!(
        cli.global.inis,
        vec![PathBuf::from("base.toml"), PathBuf::from("override.toml")]
    );
}

#[test]
fn cli_global_options_set_options() {
    let cli = Cli::try_parse_from([
        "relkit",
        "-s",
        "project.version=1.1",
        "-s",
        "global.dry=true",
        "dist",
    ])
    .unwrap();
    assert_eq!(
        cli.global.options,
        vec!["project.version=1.1".to_string(), "global.dry=true".to_string()]
    );
}

#[test]
fn cli_global_options_root() {
    let cli = Cli::try_parse_from(["relkit", "-C", "/srv/checkout", "dist"]).unwrap();
    assert_eq!(cli.global.root, Some(PathBuf::from("/srv/checkout")));
}

#[test]
fn cli_global_options_to_config_overrides() {
    let opts = GlobalOptions {
        dry: true,
        root: Some(PathBuf::from("/srv/checkout")),
        options: vec!["project.version=1.1".to_string()],
        ..Default::default()
    };
    let overrides = opts.to_config_overrides();
    assert_eq!(
        overrides,
        vec![
            "project.version=1.1".to_string(),
            "global.dry=true".to_string(),
            "project.root=/srv/checkout".to_string(),
        ]
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn cli_invalid_log_level() {
    // Log level must be 0-5
    let result = Cli::try_parse_from(["relkit", "-l", "10", "dist"]);
    assert!(result.is_err());
}

#[test]
fn cli_unknown_command_rejected() {
    let result = Cli::try_parse_from(["relkit", "frobnicate"]);
    assert!(result.is_err());
}

#[test]
fn cli_no_command_allowed() {
    // The binary prints usage guidance itself when no command is given.
    let cli = Cli::try_parse_from(["relkit"]).unwrap();
    assert!(cli.command.is_none());
}
