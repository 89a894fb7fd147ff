// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands for relkit.

use crate::config::Config;

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration sources.
pub fn run_inis_command(sources: &[String]) {
    if sources.is_empty() {
        println!("No configuration files loaded");
    } else {
        for (i, line) in sources.iter().enumerate() {
            println!("{}. {line}", i + 1);
        }
    }
}
