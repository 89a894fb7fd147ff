// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! The orchestration pipeline.
//!
//! ```text
//! dist:  clean dist/ -> run builds -> collect(Dist) -> rename -> archives
//! doc:   dist (prerequisite) -> clean doc/ -> collect(Doc)
//! clean: clean dist/ + doc/ -> per-component clean commands
//! ```
//!
//! Stages run strictly sequentially and fail fast: the first error aborts
//! the phase, partial output is left in place (not rolled back), and the
//! failing component is reported. The doc/dist output trees are explicit
//! [`OutputTree`] handles passed through every stage, never ambient paths,
//! so tests run the whole pipeline against a temp root.

pub mod archive;
pub mod cleaner;
pub mod collector;
pub mod executor;
pub mod normalizer;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;

/// Name of the unified dist output tree under the project root.
pub const DIST_DIR: &str = "dist";

/// Name of the unified doc output tree under the project root.
pub const DOC_DIR: &str = "doc";

/// Which kind of artifact a collection pass gathers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Distributable build outputs (packaged libraries, binaries).
    Dist,
    /// Generated documentation.
    Doc,
}

impl ArtifactKind {
    /// Lowercase label used in log messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dist => "dist",
            Self::Doc => "doc",
        }
    }
}

/// Handle to a unified output tree (`dist/` or `doc/`).
///
/// One subdirectory per component name; created fresh each phase and never
/// partially reused across runs (the cleaner removes it first).
#[derive(Debug, Clone)]
pub struct OutputTree {
    root: PathBuf,
}

impl OutputTree {
    /// Creates a handle rooted at `root`. Purely descriptive; nothing is
    /// touched on disk.
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The dist tree for a project root.
    #[must_use]
    pub fn dist(project_root: &Path) -> Self {
        Self::new(project_root.join(DIST_DIR))
    }

    /// The doc tree for a project root.
    #[must_use]
    pub fn doc(project_root: &Path) -> Self {
        Self::new(project_root.join(DOC_DIR))
    }

    /// Returns the tree root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the subtree for one component.
    #[must_use]
    pub fn component_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

/// Context threaded through every pipeline stage.
///
/// Carries the configuration, the shared cancellation token and the
/// dry-run flag.
#[derive(Clone)]
pub struct PipelineContext {
    config: Arc<Config>,
    cancel_token: CancellationToken,
    dry_run: bool,
}

impl PipelineContext {
    /// Creates a new `PipelineContext`.
    #[must_use]
    pub const fn new(config: Arc<Config>, cancel_token: CancellationToken, dry_run: bool) -> Self {
        Self {
            config,
            cancel_token,
            dry_run,
        }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub const fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Returns a reference to the cancellation token.
    #[must_use]
    pub const fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    /// Returns whether this is a dry-run execution.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Checks if cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
