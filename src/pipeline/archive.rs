// relkit: Release Orchestration Tool
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Archive builder: redundant zip and tar.gz bundles of the project tree.
//!
//! ```text
//! ArchiveSpec { base_name, root, exclude_roots }
//!        |
//!        v
//! sorted walk (walkdir), one entry list
//!   skip: dot-segments at any depth, excluded top-level trees
//!        |
//!        +--> <base>.zip     (zip, deflate)
//!        +--> <base>.tar.gz  (tar + flate2)
//! ```
//!
//! Both archives are written from the same entry list, so their logical
//! file set is identical by construction. The walk is sorted by file name,
//! which keeps the entry order stable across runs.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::{ArchiveError, Result};

/// What to archive and what to call it.
#[derive(Debug, Clone)]
pub struct ArchiveSpec {
    /// Archive base name, `<project>-<version>`.
    base_name: String,
    /// Tree to archive.
    root: PathBuf,
    /// Directory the archive files are written to.
    out_dir: PathBuf,
    /// Top-level directory names excluded entirely (the generated doc and
    /// dist trees; keeps previous archive runs out of the archive).
    exclude_roots: Vec<String>,
}

impl ArchiveSpec {
    /// Creates a spec for archiving `root` into `out_dir`.
    #[must_use]
    pub fn new(
        base_name: impl Into<String>,
        root: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
        exclude_roots: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            base_name: base_name.into(),
            root: root.into(),
            out_dir: out_dir.into(),
            exclude_roots: exclude_roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the archive base name.
    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    fn is_included(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        // Hidden/meta paths are excluded at any depth.
        if name.starts_with('.') {
            return false;
        }
        if entry.depth() == 1 && self.exclude_roots.iter().any(|root| root.as_str() == name) {
            return false;
        }
        true
    }
}

/// One file selected for archiving.
#[derive(Debug, Clone)]
struct ArchiveEntry {
    /// Absolute path on disk.
    path: PathBuf,
    /// Entry name within the archive (forward slashes).
    name: String,
}

/// Builds `<base>.zip` and `<base>.tar.gz` from the spec.
///
/// Returns the paths of the two archive files, zip first. Existing archive
/// files at those paths are overwritten.
///
/// # Errors
///
/// Returns an `ArchiveError` if the walk, an entry read or either encoder
/// fails.
pub fn build_archives(spec: &ArchiveSpec) -> Result<Vec<PathBuf>> {
    let entries = collect_entries(spec)?;

    std::fs::create_dir_all(&spec.out_dir).map_err(|source| ArchiveError::Create {
        path: spec.out_dir.clone(),
        source,
    })?;

    let zip_path = spec.out_dir.join(format!("{}.zip", spec.base_name));
    let tgz_path = spec.out_dir.join(format!("{}.tar.gz", spec.base_name));

    info!(
        files = entries.len(),
        zip = %zip_path.display(),
        targz = %tgz_path.display(),
        "building release archives"
    );

    write_zip(&zip_path, &entries)?;
    write_tar_gz(&tgz_path, &entries)?;

    Ok(vec![zip_path, tgz_path])
}

/// Walks the tree once, applying the exclusion rules, and returns the
/// files to archive in stable (name-sorted) order.
fn collect_entries(spec: &ArchiveSpec) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(&spec.root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| spec.is_included(entry));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().map_or_else(|| spec.root.clone(), Path::to_path_buf);
            ArchiveError::Append {
                entry: path.display().to_string(),
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("walk error")),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(&spec.root)
            .expect("walked path is under the walk root");
        let name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        debug!(entry = %name, "archiving");
        entries.push(ArchiveEntry {
            path: entry.path().to_path_buf(),
            name,
        });
    }

    Ok(entries)
}

fn write_zip(zip_path: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let file = File::create(zip_path).map_err(|source| ArchiveError::Create {
        path: zip_path.to_path_buf(),
        source,
    })?;
    let mut writer = zip::ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    for entry in entries {
        writer
            .start_file(entry.name.clone(), options)
            .map_err(ArchiveError::Zip)?;
        let mut reader =
            BufReader::new(File::open(&entry.path).map_err(|source| ArchiveError::Append {
                entry: entry.name.clone(),
                source,
            })?);
        io::copy(&mut reader, &mut writer).map_err(|source| ArchiveError::Append {
            entry: entry.name.clone(),
            source,
        })?;
    }

    let mut inner = writer.finish().map_err(ArchiveError::Zip)?;
    io::Write::flush(&mut inner).map_err(|source| ArchiveError::Create {
        path: zip_path.to_path_buf(),
        source,
    })?;
    Ok(())
}

fn write_tar_gz(tgz_path: &Path, entries: &[ArchiveEntry]) -> Result<()> {
    let file = File::create(tgz_path).map_err(|source| ArchiveError::Create {
        path: tgz_path.to_path_buf(),
        source,
    })?;
    let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for entry in entries {
        builder
            .append_path_with_name(&entry.path, &entry.name)
            .map_err(|source| ArchiveError::Append {
                entry: entry.name.clone(),
                source,
            })?;
    }

    let encoder = builder
        .into_inner()
        .map_err(|source| ArchiveError::Append {
            entry: "<tar finish>".to_string(),
            source,
        })?;
    encoder.finish().map_err(|source| ArchiveError::Create {
        path: tgz_path.to_path_buf(),
        source,
    })?;
    Ok(())
}
