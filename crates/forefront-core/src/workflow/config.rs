//! Workflow configuration
//!
//! Every flavor of the scaffolder (with or without README/HTML questions, CSS asked
//! before or after HTML, fixed or prompted flavors) is one `WorkflowConfig`.

use super::choice::{CssChoice, JsChoice};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One question in the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Readme,
    Html,
    Css,
    Js,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkflowConfig {
    /// Ask whether to copy the README.md template
    pub include_readme_step: bool,

    /// Ask whether to copy the index.html template
    pub include_html_step: bool,

    /// Ask the CSS question before the HTML one
    pub css_before_html: bool,

    /// Fixed CSS choice; the user is asked when unset
    pub css: Option<CssChoice>,

    /// Fixed JS choice; the user is asked when unset
    pub js: Option<JsChoice>,

    /// JS flavor taken on an empty answer
    pub default_js: JsChoice,

    /// Give up after this many answers to the JS question; unbounded when unset
    pub max_js_attempts: Option<u32>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            include_readme_step: true,
            include_html_step: true,
            css_before_html: false,
            css: None,
            js: None,
            default_js: JsChoice::CoffeeScript,
            max_js_attempts: None,
        }
    }
}

impl WorkflowConfig {
    /// Load a configuration from a YAML file; missing fields keep their defaults
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Ordered questions for this configuration
    pub fn steps(&self) -> Vec<Step> {
        let mut steps = Vec::with_capacity(4);
        if self.include_readme_step {
            steps.push(Step::Readme);
        }
        match (self.include_html_step, self.css_before_html) {
            (true, false) => steps.extend([Step::Html, Step::Css]),
            (true, true) => steps.extend([Step::Css, Step::Html]),
            (false, _) => steps.push(Step::Css),
        }
        steps.push(Step::Js);
        steps
    }
}
