// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for relkit.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ProjectConfig, [ComponentConfig]
//! ```
//!
//! # Example
//!
//! ```toml
//! [project]
//! name = "fnss"
//! version = "1.0"
//!
//! [[component]]
//! name = "core"
//! path = "core"
//! build = ["make", "dist"]
//! clean = ["make", "clean"]
//! dist = "dist"
//! doc = "doc/html"
//! disambiguate = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

/// Global configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Simulate filesystem operations without making changes.
    pub dry: bool,
}

/// Project-level configuration: what the release is called.
///
/// The archive base name is `<name>-<version>`; the version is an opaque
/// string supplied here, never computed by the tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name, used for archive naming and the rename prefix.
    pub name: String,
    /// Release version string.
    pub version: String,
    /// Project root directory. Component paths and the doc/dist output
    /// trees are resolved relative to this. Defaults to the current
    /// directory.
    pub root: PathBuf,
}

impl ProjectConfig {
    /// Validates that the required fields are present.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` for an empty name or version.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "project".to_string(),
                key: "name".to_string(),
            });
        }
        if self.version.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "project".to_string(),
                key: "version".to_string(),
            });
        }
        Ok(())
    }
}

/// A single component entry from the configuration.
///
/// Each component is an independently buildable sub-project. Its build and
/// clean commands are opaque invocations run with the component's source
/// directory as working directory; only the exit status matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentConfig {
    /// Component name, unique across the registry. Also names the
    /// component's subtree in the doc/ and dist/ output trees.
    pub name: String,
    /// Source directory, relative to the project root.
    pub path: PathBuf,
    /// Build invocation (program + args).
    pub build: Vec<String>,
    /// Clean invocation (program + args). Components without one are
    /// skipped during `clean`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clean: Vec<String>,
    /// Path within the source directory where dist artifacts land after a
    /// successful build. Components without one contribute nothing to the
    /// dist tree.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dist: Option<PathBuf>,
    /// Path within the source directory where documentation lands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<PathBuf>,
    /// Whether collected dist artifacts carrying the generic project
    /// prefix get the component name spliced in (e.g. `fnss-1.0.zip` to
    /// `fnss-core-1.0.zip`).
    pub disambiguate: bool,
}

impl ComponentConfig {
    /// Validates the component entry in isolation.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the name is missing or the build command
    /// is empty.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "component".to_string(),
                key: "name".to_string(),
            });
        }
        if self.build.is_empty() {
            return Err(ConfigError::EmptyCommand {
                name: self.name.clone(),
                command: "build".to_string(),
            });
        }
        Ok(())
    }
}
