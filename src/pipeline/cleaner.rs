// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Cleaner: removes generated output trees before a phase re-runs.
//!
//! Removing `doc/` and `dist/` up front guarantees idempotent re-builds
//! with no stale artifacts leaking between runs.

use std::path::Path;

use tokio::fs;
use tracing::{debug, info};

use crate::error::{FsError, Result};

use super::PipelineContext;

/// Recursively removes `path` if it exists; a no-op (not an error) when it
/// is absent.
///
/// # Errors
///
/// Returns an [`FsError`] if the removal itself fails (e.g. permissions).
pub async fn clean(path: &Path, ctx: &PipelineContext) -> Result<()> {
    if !path.exists() {
        debug!(path = %path.display(), "nothing to clean");
        return Ok(());
    }

    if ctx.is_dry_run() {
        info!(path = %path.display(), "[dry-run] would remove");
        return Ok(());
    }

    info!(path = %path.display(), "removing");
    if path.is_dir() {
        fs::remove_dir_all(path)
            .await
            .map_err(|e| FsError::from_io(path, e))?;
    } else {
        fs::remove_file(path)
            .await
            .map_err(|e| FsError::from_io(path, e))?;
    }

    Ok(())
}
