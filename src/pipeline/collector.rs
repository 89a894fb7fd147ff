// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Artifact collector: copies per-component outputs into the unified tree.
//!
//! ```text
//! collect(registry, tree, kind)
//!   per component declaring a <kind> path:
//!     source_dir/<rel> --(recursive copy)--> tree/<name>/
//!   missing path after a successful build -> MissingArtifact, abort
//! ```
//!
//! Collection is purely additive: it creates component subtrees and copies
//! into them, never deletes outside them, and never mutates a component's
//! own source or build tree.

use tracing::{debug, info};

use crate::component::ComponentRegistry;
use crate::error::{ComponentError, Result};
use crate::utility::fs::copy::copy_dir_contents_async;

use super::{ArtifactKind, OutputTree, PipelineContext};

/// Copies every component's `kind` artifacts into `tree/<component>/`.
///
/// Components that declare no path for `kind` contribute nothing and are
/// skipped silently. A declared path that is absent after a successful
/// build is a contract violation between the registry and the component's
/// layout, not something to paper over.
///
/// # Errors
///
/// Returns `ComponentError::MissingArtifact` for the first component whose
/// declared path does not exist, copying nothing for it, or a filesystem
/// error from the copy itself.
pub async fn collect(
    registry: &ComponentRegistry,
    tree: &OutputTree,
    kind: ArtifactKind,
    ctx: &PipelineContext,
) -> Result<()> {
    for descriptor in registry {
        let Some(rel) = descriptor.artifact_path(kind) else {
            debug!(
                component = %descriptor.name(),
                "no {} path declared, skipping", kind.label()
            );
            continue;
        };

        let source = descriptor.source_dir().join(rel);
        let dest = tree.component_dir(descriptor.name());

        // The build that produces the artifacts was itself skipped in a dry
        // run, so existence cannot be checked either.
        if ctx.is_dry_run() {
            info!(
                src = %source.display(),
                dst = %dest.display(),
                "[dry-run] would collect {} artifacts", kind.label()
            );
            continue;
        }

        if !source.exists() {
            return Err(ComponentError::MissingArtifact {
                name: descriptor.name().to_string(),
                expected: source,
            }
            .into());
        }

        info!(
            component = %descriptor.name(),
            src = %source.display(),
            dst = %dest.display(),
            "collecting {} artifacts", kind.label()
        );

        copy_dir_contents_async(&source, &dest).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use tokio_util::sync::CancellationToken;

    use super::{ArtifactKind, OutputTree, PipelineContext, collect};
    use crate::component::ComponentRegistry;
    use crate::config::{ComponentConfig, Config};
    use crate::error::ComponentError;

    fn write_file(path: &std::path::Path, contents: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    fn test_config(root: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.project.name = "fnss".to_string();
        config.project.version = "1.0".to_string();
        config.project.root = root.to_path_buf();
        config
    }

    fn component(name: &str, dist: Option<&str>, doc: Option<&str>) -> ComponentConfig {
        ComponentConfig {
            name: name.to_string(),
            path: PathBuf::from(name),
            build: vec!["true".to_string()],
            dist: dist.map(PathBuf::from),
            doc: doc.map(PathBuf::from),
            ..Default::default()
        }
    }

    fn context(config: Config) -> PipelineContext {
        PipelineContext::new(Arc::new(config), CancellationToken::new(), false)
    }

    #[tokio::test]
    async fn test_collect_copies_into_component_subtrees() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        write_file(&root.join("core/build/out/fnss-1.0.zip"), "core");
        write_file(&root.join("core/build/out/nested/lib.py"), "lib");
        write_file(&root.join("java/target/fnss.jar"), "jar");

        let mut config = test_config(root);
        config.components = vec![
            component("core", Some("build/out"), None),
            component("java", Some("target"), None),
        ];
        let registry = ComponentRegistry::from_config(&config).unwrap();
        let tree = OutputTree::dist(root);

        collect(&registry, &tree, ArtifactKind::Dist, &context(config))
            .await
            .unwrap();

        assert!(tree.component_dir("core").join("fnss-1.0.zip").is_file());
        assert!(tree.component_dir("core").join("nested/lib.py").is_file());
        assert!(tree.component_dir("java").join("fnss.jar").is_file());
    }

    #[tokio::test]
    async fn test_collect_skips_components_without_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("ns3")).unwrap();

        let mut config = test_config(root);
        config.components = vec![component("ns3", None, None)];
        let registry = ComponentRegistry::from_config(&config).unwrap();
        let tree = OutputTree::dist(root);

        collect(&registry, &tree, ArtifactKind::Dist, &context(config))
            .await
            .unwrap();

        assert!(!tree.component_dir("ns3").exists());
    }

    #[tokio::test]
    async fn test_collect_missing_artifact_path_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("core")).unwrap();

        let mut config = test_config(root);
        config.components = vec![component("core", Some("build/out"), None)];
        let registry = ComponentRegistry::from_config(&config).unwrap();
        let tree = OutputTree::dist(root);

        let err = collect(&registry, &tree, ArtifactKind::Dist, &context(config))
            .await
            .unwrap_err();

        let component_err = err.downcast_ref::<ComponentError>().unwrap();
        assert!(matches!(
            component_err,
            ComponentError::MissingArtifact { name, .. } if name == "core"
        ));
        // nothing copied for the failing component
        assert!(!tree.component_dir("core").exists());
    }

    #[tokio::test]
    async fn test_collect_dry_run_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("core/dist/a.txt"), "a");

        let mut config = test_config(root);
        config.components = vec![component("core", Some("dist"), None)];
        let registry = ComponentRegistry::from_config(&config).unwrap();
        let tree = OutputTree::new(root.join("out"));

        let ctx = PipelineContext::new(Arc::new(config), CancellationToken::new(), true);
        collect(&registry, &tree, ArtifactKind::Dist, &ctx)
            .await
            .unwrap();

        assert!(!tree.root().exists());
    }

    #[tokio::test]
    async fn test_collect_doc_kind_uses_doc_path() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_file(&root.join("core/doc/html/index.html"), "<html>");

        let mut config = test_config(root);
        config.components = vec![component("core", None, Some("doc/html"))];
        let registry = ComponentRegistry::from_config(&config).unwrap();
        let tree = OutputTree::doc(root);

        collect(&registry, &tree, ArtifactKind::Doc, &context(config))
            .await
            .unwrap();

        assert!(tree.component_dir("core").join("index.html").is_file());
    }
}
