// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Name normalizer: disambiguates generic artifact names after collection.
//!
//! ```text
//! normalize(tree, "core", "fnss-", "fnss-core-")
//!   fnss-1.0.zip   -> fnss-core-1.0.zip
//!   readme.txt     -> (untouched)
//! ```
//!
//! Several components package themselves under the generic project prefix;
//! without the rename, flattening the dist tree later would collide.

use anyhow::Context;
use tokio::fs;
use tracing::{debug, info};

use crate::error::Result;

use super::{OutputTree, PipelineContext};

/// Renames files directly under `tree/<component>/` whose name contains
/// `pattern`, substituting `replacement` for the first occurrence.
///
/// Only the one component subtree is touched; non-matching files and
/// subdirectories are left alone. Files already carrying `replacement` are
/// skipped, so a re-run against an already-renamed tree is a no-op.
///
/// Returns the number of files renamed.
///
/// # Errors
///
/// Returns an error if the directory listing or a rename fails.
pub async fn normalize(
    tree: &OutputTree,
    component: &str,
    pattern: &str,
    replacement: &str,
    ctx: &PipelineContext,
) -> Result<usize> {
    let dir = tree.component_dir(component);
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "no component subtree to normalize");
        return Ok(0);
    }

    let mut renamed = 0;
    let mut entries = fs::read_dir(&dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", dir.display()))?
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if name.contains(replacement) || !name.contains(pattern) {
            continue;
        }

        let new_name = name.replacen(pattern, replacement, 1);
        let new_path = dir.join(&new_name);

        if ctx.is_dry_run() {
            info!(from = %name, to = %new_name, "[dry-run] would rename artifact");
            renamed += 1;
            continue;
        }

        debug!(from = %name, to = %new_name, "renaming artifact");
        fs::rename(&path, &new_path).await.with_context(|| {
            format!("failed to rename {} to {}", path.display(), new_path.display())
        })?;
        renamed += 1;
    }

    if renamed > 0 {
        info!(component, renamed, "normalized artifact names");
    }

    Ok(renamed)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio_util::sync::CancellationToken;

    use super::{OutputTree, PipelineContext, normalize};
    use crate::config::Config;

    fn context() -> PipelineContext {
        PipelineContext::new(Arc::new(Config::default()), CancellationToken::new(), false)
    }

    fn setup(files: &[&str]) -> (tempfile::TempDir, OutputTree) {
        let dir = tempfile::tempdir().unwrap();
        let core = dir.path().join("dist/core");
        std::fs::create_dir_all(&core).unwrap();
        for file in files {
            std::fs::write(core.join(file), file).unwrap();
        }
        let tree = OutputTree::dist(dir.path());
        (dir, tree)
    }

    #[tokio::test]
    async fn test_normalize_substitutes_prefix() {
        let (_dir, tree) = setup(&["fnss-1.0.zip", "fnss-1.0.tar.gz", "readme.txt"]);

        let renamed = normalize(&tree, "core", "fnss-", "fnss-core-", &context())
            .await
            .unwrap();

        assert_eq!(renamed, 2);
        let core = tree.component_dir("core");
        assert!(core.join("fnss-core-1.0.zip").is_file());
        assert!(core.join("fnss-core-1.0.tar.gz").is_file());
        assert!(core.join("readme.txt").is_file());
        assert!(!core.join("fnss-1.0.zip").exists());
    }

    #[tokio::test]
    async fn test_normalize_is_idempotent() {
        let (_dir, tree) = setup(&["fnss-1.0.zip"]);

        normalize(&tree, "core", "fnss-", "fnss-core-", &context())
            .await
            .unwrap();
        let second = normalize(&tree, "core", "fnss-", "fnss-core-", &context())
            .await
            .unwrap();

        assert_eq!(second, 0);
        assert!(tree.component_dir("core").join("fnss-core-1.0.zip").is_file());
    }

    #[tokio::test]
    async fn test_normalize_only_touches_named_component() {
        let dir = tempfile::tempdir().unwrap();
        for comp in ["core", "java"] {
            let sub = dir.path().join("dist").join(comp);
            std::fs::create_dir_all(&sub).unwrap();
            std::fs::write(sub.join("fnss-1.0.zip"), "x").unwrap();
        }
        let tree = OutputTree::dist(dir.path());

        normalize(&tree, "core", "fnss-", "fnss-core-", &context())
            .await
            .unwrap();

        assert!(tree.component_dir("core").join("fnss-core-1.0.zip").is_file());
        assert!(tree.component_dir("java").join("fnss-1.0.zip").is_file());
    }

    #[tokio::test]
    async fn test_normalize_missing_subtree_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let tree = OutputTree::dist(dir.path());
        let renamed = normalize(&tree, "core", "fnss-", "fnss-core-", &context())
            .await
            .unwrap();
        assert_eq!(renamed, 0);
    }

    #[tokio::test]
    async fn test_normalize_dry_run_renames_nothing() {
        let (_dir, tree) = setup(&["fnss-1.0.zip"]);
        let ctx =
            PipelineContext::new(Arc::new(Config::default()), CancellationToken::new(), true);

        let renamed = normalize(&tree, "core", "fnss-", "fnss-core-", &ctx)
            .await
            .unwrap();

        assert_eq!(renamed, 1);
        assert!(tree.component_dir("core").join("fnss-1.0.zip").is_file());
    }
}
