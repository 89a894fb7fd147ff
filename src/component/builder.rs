// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build invocation behind a uniform capability.
//!
//! ```text
//! ComponentBuilder::build(ctx, phase) -> BoxFuture<Result<()>>
//!        |
//!        v
//! CommandBuilder: ProcessBuilder(cwd = source_dir)
//!   exit != 0 -> ComponentError::BuildFailed
//! ```
//!
//! The orchestrator never depends on a sub-build-tool's conventions beyond
//! exit status; make, maven, waf and friends all look the same from here.

use futures_util::future::BoxFuture;
use tracing::{debug, info};

use crate::component::ComponentDescriptor;
use crate::core::process::ProcessBuilder;
use crate::error::{ComponentError, Result};
use crate::pipeline::PipelineContext;

/// Which of a component's own commands to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildPhase {
    /// The component's build command.
    Build,
    /// The component's clean command, when it has one.
    Clean,
}

impl BuildPhase {
    /// Lowercase label used in log messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Clean => "clean",
        }
    }
}

/// Capability for invoking a component's native build tooling.
///
/// One implementation per component type would be possible; in practice
/// every component is driven through [`CommandBuilder`], since the contract
/// is exit-status-only either way.
pub trait ComponentBuilder: Send + Sync {
    /// Returns the component name.
    fn name(&self) -> &str;

    /// Runs the command for `phase` and validates its exit status.
    fn build<'a>(&'a self, ctx: &'a PipelineContext, phase: BuildPhase) -> BoxFuture<'a, Result<()>>;
}

/// Shell-command implementation of [`ComponentBuilder`].
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    descriptor: ComponentDescriptor,
}

impl CommandBuilder {
    /// Wraps a descriptor.
    #[must_use]
    pub const fn new(descriptor: ComponentDescriptor) -> Self {
        Self { descriptor }
    }

    fn command_for(&self, phase: BuildPhase) -> &[String] {
        match phase {
            BuildPhase::Build => self.descriptor.build_command(),
            BuildPhase::Clean => self.descriptor.clean_command(),
        }
    }

    async fn run_command(&self, ctx: &PipelineContext, phase: BuildPhase) -> Result<()> {
        let command = self.command_for(phase);

        if command.is_empty() {
            // Only possible for clean; build commands are validated non-empty.
            debug!(
                component = %self.descriptor.name(),
                "no clean command configured, skipping"
            );
            return Ok(());
        }

        if ctx.is_dry_run() {
            info!(
                component = %self.descriptor.name(),
                cwd = %self.descriptor.source_dir().display(),
                cmd = ?command,
                "[dry-run] would run {} command", phase.label()
            );
            return Ok(());
        }

        info!(
            component = %self.descriptor.name(),
            cmd = ?command,
            "running {} command", phase.label()
        );

        let output = ProcessBuilder::new(&command[0])
            .args(command[1..].iter().cloned())
            .cwd(self.descriptor.source_dir())
            .name(format!("{} {}", self.descriptor.name(), phase.label()))
            .allow_failure()
            .run_with_cancellation(ctx.cancel_token())
            .await?;

        if output.is_interrupted() {
            return Err(ComponentError::Interrupted(self.descriptor.name().to_string()).into());
        }

        if !output.success() {
            return Err(ComponentError::BuildFailed {
                name: self.descriptor.name().to_string(),
                exit_code: output.exit_code(),
            }
            .into());
        }

        Ok(())
    }
}

impl ComponentBuilder for CommandBuilder {
    fn name(&self) -> &str {
        self.descriptor.name()
    }

    fn build<'a>(&'a self, ctx: &'a PipelineContext, phase: BuildPhase) -> BoxFuture<'a, Result<()>> {
        Box::pin(self.run_command(ctx, phase))
    }
}
