//! Template pack access, file materialization and `package.json` merging
//!
//! This module provides:
//! - Template pack discovery and its `template.yaml` manifest
//! - File and directory copying into the project
//! - The `package.json` manifest and the npm script templates merged into it
//! - Version compatibility checking

pub mod copier;
pub mod manifest;
pub mod merger;
pub mod pack;
pub mod scripts;
pub mod version;

pub use copier::Copier;
pub use manifest::{Manifest, ManifestError};
pub use merger::merge_choices;
pub use pack::{PackManifest, PackSource, TemplatePack};
pub use version::check_compatibility;
