//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to brand the scaffolder and tell the core
//! where its template pack lives.

use crate::workflow::WorkflowState;
use std::path::{Path, PathBuf};

/// Configuration trait for the scaffolder product
///
/// Implementations define:
/// - Product identity (name, display name)
/// - Template pack location and its override variable
/// - Documentation links
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Template pack shipped with the product
    fn bundled_template_dir(&self) -> PathBuf;

    /// Environment variable name for overriding the template pack directory
    fn template_dir_env(&self) -> &'static str;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// Generate the "next steps" instructions after the project is laid out
    fn next_steps(&self, dir: &Path, state: &WorkflowState) -> Vec<String>;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;
}
