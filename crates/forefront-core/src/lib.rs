//! Forefront Core - Shared library for the Forefront project scaffolder
//!
//! This library asks a short sequence of questions, then lays out a static front-end
//! project: asset directories, optional README/index.html templates, SASS sources, a
//! script source directory and a `package.json` whose npm scripts match the answers.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template pack resolution, file materialization and
//!   the `package.json` script merger
//! - **Layer 2: Workflow Orchestration** - `WorkflowConfig`, the step sequencer and the
//!   `Prompter` seam so any front-end (or a scripted test double) can answer questions
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use forefront_core::prompt::ScriptedPrompter;
//! use forefront_core::templates::Copier;
//! use forefront_core::workflow::{self, WorkflowConfig};
//!
//! let copier = Copier::new("templates/forefront", "my-site");
//! let mut prompter = ScriptedPrompter::new(["y", "n", "y", "es6"]);
//! let state = workflow::run(&WorkflowConfig::default(), &copier, &mut prompter).await?;
//! ```

pub mod product;
pub mod prompt;
pub mod scaffold;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use product::ProductConfig;
pub use prompt::{Prompter, Question, Tone};
pub use scaffold::CreateArgs;
pub use templates::{Copier, Manifest, ManifestError, TemplatePack};
pub use workflow::{CssChoice, JsChoice, WorkflowConfig, WorkflowError, WorkflowState};

#[cfg(feature = "tui")]
pub use tui::run;
