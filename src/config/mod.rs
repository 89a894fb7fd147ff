// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for relkit.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low -> high)
//! 1. defaults
//! 2. relkit.toml (cwd)
//! 3. --ini FILE (repeatable)
//! 4. RELKIT_* env vars
//! 5. --set key=value / CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! RELKIT_GLOBAL_DRY=true      -> global.dry = true
//! RELKIT_PROJECT_VERSION=1.1  -> project.version = "1.1"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub use types::{ComponentConfig, GlobalConfig, ProjectConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Project name, version, root.
    pub project: ProjectConfig,
    /// Ordered component entries.
    #[serde(rename = "component")]
    pub components: Vec<ComponentConfig>,
}

impl Config {
    /// Resolves defaults and validates the merged configuration.
    ///
    /// Called by `ConfigLoader::build()` after deserialization. Component
    /// source directory existence is deliberately not checked here; that is
    /// the registry's job at pipeline start, so introspection commands keep
    /// working on an unbuilt checkout.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the project section is incomplete, a
    /// component entry is invalid, or two components share a name.
    pub fn resolve_and_validate(&mut self) -> std::result::Result<(), ConfigError> {
        self.project.validate()?;

        if self.project.root.as_os_str().is_empty() {
            self.project.root = PathBuf::from(".");
        }

        let mut seen = BTreeSet::new();
        for component in &self.components {
            component.validate()?;
            if !seen.insert(component.name.clone()) {
                return Err(ConfigError::DuplicateComponent(component.name.clone()));
            }
        }

        Ok(())
    }

    /// Returns the project root directory.
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project.root
    }

    /// Returns the archive base name, `<name>-<version>`.
    #[must_use]
    pub fn archive_base_name(&self) -> String {
        format!("{}-{}", self.project.name, self.project.version)
    }

    /// Formats every resolved option as `key = value` lines for the
    /// `options` command.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let value = serde_json::to_value(self).unwrap_or(serde_json::Value::Null);
        let mut lines = Vec::new();
        flatten_options("", &value, &mut lines);
        lines
    }
}

fn flatten_options(prefix: &str, value: &serde_json::Value, lines: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_options(&path, nested, lines);
            }
        }
        serde_json::Value::Array(items) => {
            for (i, nested) in items.iter().enumerate() {
                flatten_options(&format!("{prefix}[{i}]"), nested, lines);
            }
        }
        other => lines.push(format!("{prefix} = {other}")),
    }
}
