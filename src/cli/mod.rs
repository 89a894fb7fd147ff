// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for relkit using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! relkit [global options] <command>
//! all | doc | dist
//! clean | docclean | distclean
//! list | options | inis | version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Release Orchestration Tool
///
/// Coordinates the build, documentation-collection and packaging steps of
/// a multi-component project.
#[derive(Debug, Parser)]
#[command(
    name = "relkit",
    author,
    version,
    about = "Release Orchestration Tool",
    long_about = "relkit\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Coordinates the build, documentation-collection and packaging\n\
                  steps of a project composed of independently buildable\n\
                  components. `relkit dist` builds every component, gathers the\n\
                  artifacts under dist/ and produces the release archives; see\n\
                  `relkit <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, relkit loads `relkit.toml` from the current\n\
                  directory. Additional files can be specified with --ini and\n\
                  are loaded afterwards, each overriding the previous ones.\n\
                  RELKIT_* environment variables and --set key=value override\n\
                  everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by relkit.
    Inis,

    /// Builds everything: docs and the release archives.
    All,

    /// Collects per-component documentation under doc/ (builds dist first).
    Doc,

    /// Builds every component, collects dist artifacts and produces the
    /// release archives.
    Dist,

    /// Removes the doc/ and dist/ trees and runs each component's own
    /// clean command.
    Clean,

    /// Removes the doc/ output tree.
    Docclean,

    /// Removes the dist/ output tree.
    Distclean,

    /// Lists the configured components.
    List,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
