//! State carried through one run of the workflow

use super::choice::{CssChoice, JsChoice};
use crate::templates::Manifest;

/// Where the run currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    AwaitingReadme,
    AwaitingHtml,
    AwaitingCss,
    AwaitingJsFlavor,
    Finalizing,
    Done,
}

/// Choices made so far and the manifest being built
///
/// `None` means the question has not been answered (or is not part of this run).
#[derive(Debug, Clone)]
pub struct WorkflowState {
    pub phase: Phase,
    pub readme: Option<bool>,
    pub html: Option<bool>,
    pub css: Option<CssChoice>,
    pub js: Option<JsChoice>,
    /// Answers given to the JS question, including rejected ones
    pub js_attempts: u32,
    pub manifest: Manifest,
}

impl WorkflowState {
    pub fn new(manifest: Manifest) -> Self {
        Self {
            phase: Phase::Start,
            readme: None,
            html: None,
            css: None,
            js: None,
            js_attempts: 0,
            manifest,
        }
    }

    pub fn enter(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// CSS choice to merge; an unanswered question counts as skipped
    pub fn css_choice(&self) -> CssChoice {
        self.css.unwrap_or(CssChoice::Skip)
    }

    /// JS choice to merge; an unanswered question counts as skipped
    pub fn js_choice(&self) -> JsChoice {
        self.js.unwrap_or(JsChoice::Skip)
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}
