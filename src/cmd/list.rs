// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for relkit.

use crate::config::Config;

/// Main handler for the list command: prints the configured components in
/// registry (build) order.
pub fn run_list_command(config: &Config) {
    if config.components.is_empty() {
        println!("No components configured");
        return;
    }

    for component in &config.components {
        let dist = component
            .dist
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());
        let doc = component
            .doc
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());
        println!(
            "{:<12} path={} dist={} doc={}",
            component.name,
            component.path.display(),
            dist,
            doc
        );
    }
}
