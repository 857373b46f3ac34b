//! Template pack discovery and its `template.yaml` manifest
//!
//! A template pack is a plain directory. It is picked in this order:
//! - an explicit `--template-dir`
//! - the product's override environment variable
//! - the pack bundled with the product

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Name of the pack manifest inside a template pack
pub const PACK_MANIFEST: &str = "template.yaml";

/// Pack manifest (`<pack>/template.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackManifest {
    /// Display name of the pack
    pub name: String,

    /// Description of what the pack provides
    #[serde(default)]
    pub description: String,

    /// Semver version for CLI compatibility checking
    pub version: String,

    /// Files and directories the workflow may copy out of the pack
    #[serde(default)]
    pub files: Vec<String>,
}

/// Where a template pack was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackSource {
    Flag(PathBuf),
    Env(PathBuf),
    Bundled(PathBuf),
}

impl PackSource {
    /// Pick the template pack location for a product
    pub fn resolve<C: ProductConfig>(config: &C, flag: Option<&Path>) -> Self {
        Self::pick(
            flag,
            std::env::var_os(config.template_dir_env()).map(PathBuf::from),
            config.bundled_template_dir(),
        )
    }

    fn pick(flag: Option<&Path>, env: Option<PathBuf>, bundled: PathBuf) -> Self {
        match (flag, env) {
            (Some(path), _) => Self::Flag(path.to_path_buf()),
            (None, Some(path)) if !path.as_os_str().is_empty() => Self::Env(path),
            _ => Self::Bundled(bundled),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Flag(path) | Self::Env(path) | Self::Bundled(path) => path,
        }
    }
}

/// An opened template pack
#[derive(Debug, Clone)]
pub struct TemplatePack {
    root: PathBuf,
    manifest: PackManifest,
}

impl TemplatePack {
    /// Open a pack directory and parse its manifest
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !fs::metadata(&root).await.is_ok_and(|m| m.is_dir()) {
            anyhow::bail!("Template directory not found: {}", root.display());
        }

        let manifest_path = root.join(PACK_MANIFEST);
        let content = fs::read_to_string(&manifest_path)
            .await
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        let manifest: PackManifest = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;

        Ok(Self { root, manifest })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &PackManifest {
        &self.manifest
    }

    /// Listed files that are absent from the pack
    pub async fn missing_files(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for file in &self.manifest.files {
            if fs::metadata(self.root.join(file)).await.is_err() {
                missing.push(file.clone());
            }
        }
        missing
    }
}
