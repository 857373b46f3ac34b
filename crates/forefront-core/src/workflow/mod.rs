//! The scaffolding workflow
//!
//! A run goes: setup -> (README, HTML, CSS in configured order) -> JS flavor ->
//! finalize `package.json` -> "All Finished!". Only the JS question can repeat.

pub mod choice;
pub mod config;
pub mod state;
pub mod steps;

use crate::prompt::Prompter;
use crate::templates::Copier;
use anyhow::Result;
use thiserror::Error;

pub use choice::{affirmative, CssChoice, JsChoice};
pub use config::{Step, WorkflowConfig};
pub use state::{Phase, WorkflowState};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("no valid javascript flavor after {attempts} attempt(s)")]
    AttemptsExhausted { attempts: u32 },
}

/// Run every step against the project directory behind `copier`
///
/// Files written before a failure are left in place.
pub async fn run<P: Prompter + ?Sized>(
    config: &WorkflowConfig,
    copier: &Copier,
    prompter: &mut P,
) -> Result<WorkflowState> {
    let mut state = steps::setup(copier).await?;

    for step in config.steps() {
        match step {
            Step::Readme => steps::readme(&mut state, copier, prompter).await?,
            Step::Html => steps::html(&mut state, copier, prompter).await?,
            Step::Css => steps::css(&mut state, config, copier, prompter).await?,
            Step::Js => steps::js(&mut state, config, copier, prompter).await?,
        }
    }

    steps::finalize(&mut state, copier).await?;
    steps::teardown(&mut state, prompter)?;
    Ok(state)
}
