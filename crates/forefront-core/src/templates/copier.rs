//! Template file copying and directory materialization
//!
//! Every path handed to a [`Copier`] is relative: sources resolve against the
//! template pack, destinations against the project directory.

use super::manifest::Manifest;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// Materializes template files into a project directory
#[derive(Debug, Clone)]
pub struct Copier {
    template_dir: PathBuf,
    target_dir: PathBuf,
}

impl Copier {
    pub fn new(template_dir: impl Into<PathBuf>, target_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            target_dir: target_dir.into(),
        }
    }

    /// Create a project directory and any missing parents; existing directories are fine
    pub async fn ensure_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let path = self.target_dir.join(dir);
        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))
    }

    /// Copy a template file or directory into the project, overwriting existing files
    ///
    /// Directories are copied recursively. Returns the number of files written.
    pub async fn copy(&self, src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<usize> {
        let source = self.template_dir.join(src);
        let target = self.target_dir.join(dst);

        let metadata = fs::metadata(&source)
            .await
            .with_context(|| format!("Template not found: {}", source.display()))?;

        if metadata.is_dir() {
            copy_dir(&source, &target).await
        } else {
            copy_file(&source, &target).await?;
            Ok(1)
        }
    }

    /// Read and parse a `package.json` from the template pack
    pub async fn read_manifest(&self, src: impl AsRef<Path>) -> Result<Manifest> {
        let path = self.template_dir.join(src);
        let content = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Manifest::from_json(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Write a manifest into the project
    pub async fn write_manifest(&self, dst: impl AsRef<Path>, manifest: &Manifest) -> Result<()> {
        let path = self.target_dir.join(dst);
        let content = manifest
            .to_json_pretty()
            .context("Failed to serialize package.json")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

async fn copy_file(source: &Path, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::copy(source, target).await.with_context(|| {
        format!(
            "Failed to copy {} to {}",
            source.display(),
            target.display()
        )
    })?;
    Ok(())
}

async fn copy_dir(source: &Path, target: &Path) -> Result<usize> {
    fs::create_dir_all(target)
        .await
        .with_context(|| format!("Failed to create directory: {}", target.display()))?;

    let mut copied = 0;
    for (relative, is_dir) in walk_template_dir(source.to_path_buf()).await? {
        let destination = target.join(&relative);

        if is_dir {
            fs::create_dir_all(&destination)
                .await
                .with_context(|| format!("Failed to create directory: {}", destination.display()))?;
        } else {
            copy_file(&source.join(&relative), &destination).await?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Relative paths under `source`, each flagged as directory or not
///
/// Symlinks are followed, so a linked directory is copied as a directory.
async fn walk_template_dir(source: PathBuf) -> Result<Vec<(PathBuf, bool)>> {
    tokio::task::spawn_blocking(move || -> Result<Vec<(PathBuf, bool)>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(&source).min_depth(1).follow_links(true) {
            let entry = entry
                .with_context(|| format!("Failed to walk template directory: {}", source.display()))?;
            let relative = entry
                .path()
                .strip_prefix(&source)
                .context("Internal error: template entry outside its directory")?;
            entries.push((relative.to_path_buf(), entry.file_type().is_dir()));
        }
        Ok(entries)
    })
    .await
    .context("Template directory walk panicked")?
}
