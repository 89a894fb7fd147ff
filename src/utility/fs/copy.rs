// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use tokio::fs;

use crate::error::{FsError, Result};

/// Recursively copies all contents from src directory to dst directory.
///
/// Creates dst if it doesn't exist. Handles both files and directories
/// recursively. Never removes anything at the destination.
///
/// # Errors
///
/// Returns an [`FsError`] if any IO operation fails (creating directory,
/// reading, copying).
pub async fn copy_dir_contents_async(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .await
        .map_err(|e| FsError::from_io(dst, e))?;

    let mut entries = fs::read_dir(src)
        .await
        .map_err(|e| FsError::from_io(src, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| FsError::from_io(src, e))?
    {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            Box::pin(copy_dir_contents_async(&src_path, &dst_path)).await?;
        } else {
            fs::copy(&src_path, &dst_path)
                .await
                .map_err(|e| FsError::from_io(&src_path, e))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::copy_dir_contents_async;
    use crate::error::FsError;

    #[tokio::test]
    async fn test_copy_recurses_and_is_additive() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");

        std::fs::create_dir_all(src.join("sub")).unwrap();
        std::fs::write(src.join("a.txt"), "a").unwrap();
        std::fs::write(src.join("sub/b.txt"), "b").unwrap();
        std::fs::create_dir_all(&dst).unwrap();
        std::fs::write(dst.join("existing.txt"), "keep").unwrap();

        copy_dir_contents_async(&src, &dst).await.unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("a.txt")).unwrap(), "a");
        assert_eq!(std::fs::read_to_string(dst.join("sub/b.txt")).unwrap(), "b");
        // pre-existing destination files survive
        assert_eq!(
            std::fs::read_to_string(dst.join("existing.txt")).unwrap(),
            "keep"
        );
    }

    #[tokio::test]
    async fn test_copy_missing_source_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("absent");
        let err = copy_dir_contents_async(&src, &dir.path().join("dst"))
            .await
            .unwrap_err();

        let fs_err = err.downcast_ref::<FsError>().unwrap();
        assert!(matches!(
            fs_err,
            FsError::NotFound(path) if path == &src.display().to_string()
        ));
    }
}
