// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Component registry and descriptors.
//!
//! ```text
//! Config [[component]] entries
//!        |
//!        v
//! ComponentRegistry::from_config
//!   unique names, existing source dirs (fail fast)
//!        |
//!        v
//! ordered, read-only [ComponentDescriptor]
//! ```
//!
//! A component is an independently buildable sub-project. The registry is
//! static for the duration of a run; its order is the build order.

pub mod builder;


use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::{ComponentConfig, Config};
use crate::error::{ConfigError, Result};
use crate::pipeline::ArtifactKind;

/// A single sub-project descriptor with its source directory resolved
/// against the project root.
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// Unique component name (e.g. "core", "cpp", "java", "ns3").
    name: String,
    /// Resolved source directory; the build command's working directory.
    source_dir: PathBuf,
    /// Build invocation (program + args).
    build_command: Vec<String>,
    /// Optional clean invocation.
    clean_command: Vec<String>,
    /// Dist artifact path relative to `source_dir`, if the component
    /// produces distributables.
    dist_path: Option<PathBuf>,
    /// Documentation path relative to `source_dir`, if the component
    /// produces documentation.
    doc_path: Option<PathBuf>,
    /// Whether collected dist artifacts get the component name spliced
    /// into the generic project prefix.
    disambiguate: bool,
}

impl ComponentDescriptor {
    fn from_config(entry: &ComponentConfig, project_root: &Path) -> Self {
        Self {
            name: entry.name.clone(),
            source_dir: project_root.join(&entry.path),
            build_command: entry.build.clone(),
            clean_command: entry.clean.clone(),
            dist_path: entry.dist.clone(),
            doc_path: entry.doc.clone(),
            disambiguate: entry.disambiguate,
        }
    }

    /// Returns the component name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the resolved source directory.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Returns the build invocation.
    #[must_use]
    pub fn build_command(&self) -> &[String] {
        &self.build_command
    }

    /// Returns the clean invocation; empty when the component has none.
    #[must_use]
    pub fn clean_command(&self) -> &[String] {
        &self.clean_command
    }

    /// Returns the artifact path for `kind`, relative to the source
    /// directory, if the component produces that kind.
    #[must_use]
    pub fn artifact_path(&self, kind: ArtifactKind) -> Option<&Path> {
        match kind {
            ArtifactKind::Dist => self.dist_path.as_deref(),
            ArtifactKind::Doc => self.doc_path.as_deref(),
        }
    }

    /// Returns whether this component's dist artifacts get renamed after
    /// collection.
    #[must_use]
    pub const fn disambiguate(&self) -> bool {
        self.disambiguate
    }
}

/// Ordered, read-only sequence of component descriptors.
#[derive(Debug)]
pub struct ComponentRegistry {
    components: Vec<ComponentDescriptor>,
}

impl ComponentRegistry {
    /// Builds the registry from the loaded configuration.
    ///
    /// Fails fast on configuration errors: duplicate names (re-checked
    /// here even though config validation also rejects them) and source
    /// directories that don't exist at invocation time. No side effects.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first offending component.
    pub fn from_config(config: &Config) -> Result<Self> {
        let root = config.project_root();
        let mut seen = BTreeSet::new();
        let mut components = Vec::with_capacity(config.components.len());

        for entry in &config.components {
            if !seen.insert(entry.name.clone()) {
                return Err(ConfigError::DuplicateComponent(entry.name.clone()).into());
            }

            let descriptor = ComponentDescriptor::from_config(entry, root);
            if !descriptor.source_dir.is_dir() {
                return Err(ConfigError::MissingSourceDir {
                    name: descriptor.name,
                    path: descriptor.source_dir,
                }
                .into());
            }
            components.push(descriptor);
        }

        Ok(Self { components })
    }

    /// Returns the descriptors in registry (build) order.
    #[must_use]
    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    /// Returns the number of registered components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Iterates over descriptors in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComponentDescriptor> {
        self.components.iter()
    }
}

impl<'a> IntoIterator for &'a ComponentRegistry {
    type Item = &'a ComponentDescriptor;
    type IntoIter = std::slice::Iter<'a, ComponentDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
