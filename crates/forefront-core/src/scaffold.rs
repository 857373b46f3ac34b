//! Front-end independent "create a project" flow
//!
//! Resolves the template pack and project directory, runs the workflow and returns
//! its final state. Both the cliclack TUI and the plain line-based mode go through
//! [`create`]; they only differ in the [`Prompter`] they pass in.

use crate::product::ProductConfig;
use crate::prompt::{LinePrompter, Prompter, Tone};
use crate::templates::{version, Copier, PackSource, TemplatePack};
use crate::workflow::{self, WorkflowConfig, WorkflowState};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local template pack to use instead of the bundled one
    pub template_dir: Option<PathBuf>,

    /// Project directory to create (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Which questions to ask and how
    pub workflow: WorkflowConfig,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// A project that was laid out successfully
#[derive(Debug)]
pub struct Created {
    pub project_dir: PathBuf,
    pub state: WorkflowState,
}

/// Lay out a project, asking questions through `prompter`
pub async fn create<C: ProductConfig, P: Prompter + ?Sized>(
    config: &C,
    args: &CreateArgs,
    cli_version: &str,
    prompter: &mut P,
) -> Result<Created> {
    let source = PackSource::resolve(config, args.template_dir.as_deref());
    let pack = TemplatePack::open(source.path()).await?;
    prompter.tell(
        Tone::Whisper,
        &format!("Using templates from {}", pack.root().display()),
    )?;

    let missing = pack.missing_files().await;
    if !missing.is_empty() {
        anyhow::bail!(
            "Template pack {} is missing: {}",
            pack.root().display(),
            missing.join(", ")
        );
    }

    if let Some(warning) =
        version::check_compatibility(cli_version, &pack.manifest().version, config.upgrade_command())
    {
        prompter.tell(Tone::Warn, &warning)?;
    }

    let project_dir = resolve_directory(args.directory.as_deref())?;
    warn_if_not_empty(&project_dir, prompter)?;

    let copier = Copier::new(pack.root(), &project_dir);
    let state = workflow::run(&args.workflow, &copier, prompter).await?;

    Ok(Created { project_dir, state })
}

/// Run with the plain stdin/stdout prompter
pub async fn run_plain<C: ProductConfig>(
    config: &C,
    args: CreateArgs,
    cli_version: &str,
) -> Result<()> {
    let mut prompter = LinePrompter::stdio();
    prompter.banner(&format!("Welcome to {}!", config.display_name()))?;

    let created = if args.yes {
        let mut defaults = crate::prompt::AssumeDefaults::new(prompter);
        let created = create(config, &args, cli_version, &mut defaults).await?;
        prompter = defaults.into_inner();
        created
    } else {
        create(config, &args, cli_version, &mut prompter).await?
    };

    let steps = config.next_steps(&created.project_dir, &created.state);
    if !steps.is_empty() {
        prompter.tell(Tone::Say, "Next steps")?;
        for (i, step) in steps.iter().enumerate() {
            prompter.tell(Tone::Say, &format!("  {}.  {}", i + 1, step))?;
        }
    }

    Ok(())
}

/// Absolute project directory; its parent must already exist
pub fn resolve_directory(directory: Option<&Path>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;

    let path = match directory {
        None => current_dir,
        Some(dir) if dir.as_os_str().is_empty() || dir == Path::new(".") => current_dir,
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current_dir.join(dir),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            anyhow::bail!("Parent directory does not exist: {}", parent.display());
        }
    }

    Ok(path)
}

fn warn_if_not_empty<P: Prompter + ?Sized>(dir: &Path, prompter: &mut P) -> Result<()> {
    if let Ok(entries) = std::fs::read_dir(dir) {
        let count = entries.count();
        if count > 0 {
            prompter.tell(
                Tone::Warn,
                &format!(
                    "Directory has {} existing items, template files will overwrite them",
                    count
                ),
            )?;
        }
    }
    Ok(())
}
