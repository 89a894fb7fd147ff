// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clean commands: `clean`, `docclean`, `distclean`.

use std::sync::Arc;

use bitflags::bitflags;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::component::ComponentRegistry;
use crate::component::builder::BuildPhase;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::{OutputTree, PipelineContext, cleaner, executor};

bitflags! {
    /// What a clean command removes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CleanTargets: u32 {
        /// The dist/ output tree.
        const DIST = 0x01;
        /// The doc/ output tree.
        const DOC = 0x02;
        /// Each component's own build outputs, via its clean command.
        const COMPONENTS = 0x04;
    }
}

impl CleanTargets {
    /// Everything: both output trees and the component build outputs.
    #[must_use]
    pub const fn all_targets() -> Self {
        Self::DIST.union(Self::DOC).union(Self::COMPONENTS)
    }
}

/// Main handler for the clean commands.
///
/// The output trees are removed first; component clean commands run last,
/// in registry order, with the same fail-fast policy as builds. The
/// registry (and therefore source-dir existence) is only required when
/// component cleans are requested.
///
/// # Errors
///
/// Returns an error if a removal fails or a component's clean command
/// exits non-zero.
pub async fn run_clean_command(targets: CleanTargets, config: &Config, dry_run: bool) -> Result<()> {
    let config = Arc::new(config.clone());
    let dry_run = dry_run || config.global.dry;
    let ctx = PipelineContext::new(Arc::clone(&config), CancellationToken::new(), dry_run);
    super::spawn_interrupt_handler(ctx.cancel_token().clone());
    let root = config.project_root();

    if targets.contains(CleanTargets::DIST) {
        cleaner::clean(OutputTree::dist(root).root(), &ctx).await?;
    }

    if targets.contains(CleanTargets::DOC) {
        cleaner::clean(OutputTree::doc(root).root(), &ctx).await?;
    }

    if targets.contains(CleanTargets::COMPONENTS) {
        let registry = ComponentRegistry::from_config(&config)?;
        executor::run_builds(&registry, &ctx, BuildPhase::Clean).await?;
    }

    info!("clean completed");
    Ok(())
}
