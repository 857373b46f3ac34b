//! Charm-style CLI prompts using cliclack

use crate::product::ProductConfig;
use crate::prompt::{AssumeDefaults, Prompter, Question, Tone};
use crate::scaffold::{self, CreateArgs, Created};
use anyhow::Result;

/// Prompter rendering questions and messages with cliclack
#[derive(Debug, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        let answer: String = cliclack::input(&question.text)
            .placeholder(&question.hint())
            .required(false)
            .interact()?;
        Ok(answer)
    }

    fn tell(&mut self, tone: Tone, message: &str) -> Result<()> {
        match tone {
            Tone::Say => cliclack::log::info(message)?,
            Tone::Affirm => cliclack::log::success(message)?,
            Tone::Whisper => cliclack::log::remark(message)?,
            Tone::Warn => cliclack::log::warning(message)?,
            Tone::Error => cliclack::log::error(message)?,
        }
        Ok(())
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs, cli_version: &str) -> Result<()> {
    cliclack::intro(format!("Welcome to {}!", config.display_name()))?;

    let created = if args.yes {
        cliclack::log::info("Using default answers (--yes)")?;
        let mut prompter = AssumeDefaults::new(ClackPrompter);
        scaffold::create(config, &args, cli_version, &mut prompter).await?
    } else {
        scaffold::create(config, &args, cli_version, &mut ClackPrompter).await?
    };

    print_next_steps(config, &created)?;

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, created: &Created) -> Result<()> {
    let steps = config.next_steps(&created.project_dir, &created.state);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro(format!("Docs: {}", config.docs_url()))?;

    Ok(())
}
