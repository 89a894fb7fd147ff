// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phase commands: `all`, `doc`, `dist`.
//!
//! ```text
//! dist: distclean -> build components -> collect(Dist)
//!         -> normalize -> zip + tar.gz
//! doc:  dist -> docclean -> collect(Doc)
//! all:  doc (dist is its prerequisite and runs once)
//! ```

use std::sync::Arc;

use tracing::info;

use crate::component::ComponentRegistry;
use crate::component::builder::BuildPhase;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::archive::{ArchiveSpec, build_archives};
use crate::pipeline::{
    ArtifactKind, DIST_DIR, DOC_DIR, OutputTree, PipelineContext, cleaner, collector, executor,
    normalizer,
};

/// Top-level build phase selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Docs and release archives.
    All,
    /// Documentation collection (runs the dist pipeline first).
    Doc,
    /// Component builds, dist collection and archives.
    Dist,
}

/// Main handler for the phase commands.
///
/// # Errors
///
/// Returns an error if the registry cannot be constructed or any pipeline
/// stage fails; the first failure aborts the phase.
pub async fn run_phase_command(phase: Phase, config: &Config, dry_run: bool) -> Result<()> {
    let config = Arc::new(config.clone());
    let registry = ComponentRegistry::from_config(&config)?;
    let dry_run = dry_run || config.global.dry;

    let ctx = PipelineContext::new(
        Arc::clone(&config),
        tokio_util::sync::CancellationToken::new(),
        dry_run,
    );

    super::spawn_interrupt_handler(ctx.cancel_token().clone());

    match phase {
        Phase::Dist => run_dist(&registry, &ctx).await,
        // Docs only exist as a byproduct of the component builds, so doc
        // runs the dist pipeline first and `all` adds nothing beyond it.
        Phase::Doc | Phase::All => run_doc(&registry, &ctx).await,
    }
}

/// The dist pipeline: clean, build, collect, rename, archive.
async fn run_dist(registry: &ComponentRegistry, ctx: &PipelineContext) -> Result<()> {
    let root = ctx.config().project_root().to_path_buf();
    let dist_tree = OutputTree::dist(&root);

    cleaner::clean(dist_tree.root(), ctx).await?;
    executor::run_builds(registry, ctx, BuildPhase::Build).await?;
    collector::collect(registry, &dist_tree, ArtifactKind::Dist, ctx).await?;

    let project = &ctx.config().project.name;
    let pattern = format!("{project}-");
    for descriptor in registry {
        if descriptor.disambiguate() {
            let replacement = format!("{project}-{}-", descriptor.name());
            normalizer::normalize(&dist_tree, descriptor.name(), &pattern, &replacement, ctx)
                .await?;
        }
    }

    let spec = ArchiveSpec::new(
        ctx.config().archive_base_name(),
        &root,
        dist_tree.root(),
        [DOC_DIR, DIST_DIR],
    );

    if ctx.is_dry_run() {
        info!(
            base_name = spec.base_name(),
            "[dry-run] would build release archives"
        );
        return Ok(());
    }

    for path in build_archives(&spec)? {
        info!(archive = %path.display(), "created");
    }

    info!("dist phase completed");
    Ok(())
}

/// The doc pipeline: dist first, then a fresh doc/ tree.
async fn run_doc(registry: &ComponentRegistry, ctx: &PipelineContext) -> Result<()> {
    run_dist(registry, ctx).await?;

    let root = ctx.config().project_root().to_path_buf();
    let doc_tree = OutputTree::doc(&root);

    cleaner::clean(doc_tree.root(), ctx).await?;
    collector::collect(registry, &doc_tree, ArtifactKind::Doc, ctx).await?;

    info!("doc phase completed");
    Ok(())
}
