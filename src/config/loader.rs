// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from layered sources.
//!
//! ```text
//! ConfigLoader::standard()          relkit.toml (optional) + RELKIT_* env
//!   .add_file("release.toml")      --ini files, later wins
//!   .set("project.version", ..)    --set overrides, always win
//!   .build() --> Config
//! ```

use std::path::Path;

use config::{Environment, File, FileFormat};

use super::Config;
use crate::error::Result;

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "relkit.toml";

/// Prefix for environment overrides, `RELKIT_PROJECT_VERSION` and friends.
pub const ENV_PREFIX: &str = "RELKIT";

/// Assembles a [`Config`] from layered sources.
///
/// Later sources override earlier ones; `set()` overrides beat every
/// source. Environment variables sit between the files and the `set()`
/// overrides regardless of when the loader was constructed.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    use_env: bool,
    sources: Vec<String>,
}

impl ConfigLoader {
    /// Loader with relkit's standard sources: `relkit.toml` from the
    /// working directory when present, plus `RELKIT_*` environment
    /// variables.
    #[must_use]
    pub fn standard() -> Self {
        let mut loader = Self::empty();
        loader.builder = loader.builder.add_source(
            File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        );
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            loader.sources.push(DEFAULT_CONFIG_FILE.to_string());
        }
        loader.use_env = true;
        loader
    }

    /// Loader with no sources at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            builder: config::Config::builder(),
            use_env: false,
            sources: Vec::new(),
        }
    }

    /// Adds a required TOML file (an `--ini` argument).
    ///
    /// The file is read when `build()` is called; a missing file or invalid
    /// TOML fails the build.
    #[must_use]
    pub fn add_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.sources.push(p.display().to_string());
        self
    }

    /// Adds inline TOML, mainly for tests.
    #[must_use]
    pub fn add_str(mut self, content: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.sources.push("<inline>".to_string());
        self
    }

    /// Applies a `key=value` override that wins over every source.
    ///
    /// # Errors
    ///
    /// Returns an error if the key path is not a valid config expression.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("invalid override '{key}': {e}"))?;
        Ok(self)
    }

    /// Merges all sources and produces the validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, any source fails to
    /// parse, the merged value does not deserialize into [`Config`], or
    /// validation rejects it.
    pub fn build(self) -> Result<Config> {
        let builder = if self.use_env {
            self.builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("_")
                    .try_parsing(true),
            )
        } else {
            self.builder
        };
        let mut config: Config = builder.build()?.try_deserialize()?;
        config.resolve_and_validate()?;
        Ok(config)
    }

    /// One human-readable line per configuration source, in load order,
    /// for the `inis` command.
    #[must_use]
    pub fn source_lines(&self) -> Vec<String> {
        let mut lines = self.sources.clone();
        if self.use_env {
            lines.push(format!("{ENV_PREFIX}_* environment variables"));
        }
        lines
    }
}
