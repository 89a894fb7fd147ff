// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Phase executor: sequential, fail-fast component builds.
//!
//! ```text
//! run_builds(ctx, phase)
//!   per component (registry order):
//!     check cancellation -> CommandBuilder::build -> abort on first error
//! ```
//!
//! Builds never run concurrently; the design forgoes parallelism so
//! fail-fast stays simple and child output never interleaves.

use anyhow::Context;
use tracing::info;

use crate::component::ComponentRegistry;
use crate::component::builder::{BuildPhase, CommandBuilder, ComponentBuilder};
use crate::error::Result;

use super::PipelineContext;

/// Runs the `phase` command of every registered component in order.
///
/// Cancellation is checked between components; a cancelled pipeline stops
/// before the next build starts.
///
/// # Errors
///
/// Returns the first component's error and runs nothing after it. A failed
/// build surfaces as `ComponentError::BuildFailed` with the child's exit
/// code.
pub async fn run_builds(
    registry: &ComponentRegistry,
    ctx: &PipelineContext,
    phase: BuildPhase,
) -> Result<()> {
    if registry.is_empty() {
        info!("no components registered, nothing to {}", phase.label());
        return Ok(());
    }

    info!(
        components = registry.len(),
        phase = phase.label(),
        "running component commands"
    );

    for (i, descriptor) in registry.iter().enumerate() {
        if ctx.is_cancelled() {
            anyhow::bail!("interrupted before component {}", i + 1);
        }

        info!(
            component = %descriptor.name(),
            index = i + 1,
            total = registry.len(),
            "component {}", phase.label()
        );

        let builder = CommandBuilder::new(descriptor.clone());
        builder
            .build(ctx, phase)
            .await
            .with_context(|| format!("component '{}' {} failed", descriptor.name(), phase.label()))?;
    }

    info!(phase = phase.label(), "all components completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use tokio_util::sync::CancellationToken;

    use super::{BuildPhase, PipelineContext, run_builds};
    use crate::component::ComponentRegistry;
    use crate::config::{ComponentConfig, Config};

    fn config_with_component(root: &std::path::Path, clean: &[&str]) -> Config {
        std::fs::create_dir_all(root.join("core")).unwrap();
        let mut config = Config::default();
        config.project.name = "fnss".to_string();
        config.project.version = "1.0".to_string();
        config.project.root = root.to_path_buf();
        config.components = vec![ComponentConfig {
            name: "core".to_string(),
            path: PathBuf::from("core"),
            build: vec!["true".to_string()],
            clean: clean.iter().map(ToString::to_string).collect(),
            ..Default::default()
        }];
        config
    }

    #[tokio::test]
    async fn test_cancelled_context_runs_no_commands() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_component(dir.path(), &["sh", "-c", "touch cleaned"]);
        let registry = ComponentRegistry::from_config(&config).unwrap();

        let token = CancellationToken::new();
        token.cancel();
        let ctx = PipelineContext::new(Arc::new(config), token, false);

        let err = run_builds(&registry, &ctx, BuildPhase::Clean)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("interrupted"));
        assert!(!dir.path().join("core/cleaned").exists());
    }

    #[tokio::test]
    async fn test_clean_phase_runs_component_command() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_component(dir.path(), &["sh", "-c", "touch cleaned"]);
        let registry = ComponentRegistry::from_config(&config).unwrap();

        let ctx = PipelineContext::new(Arc::new(config), CancellationToken::new(), false);
        run_builds(&registry, &ctx, BuildPhase::Clean).await.unwrap();

        assert!(dir.path().join("core/cleaned").is_file());
    }
}
