//! Forefront CLI - Scaffolding for static front-end projects built with npm scripts

use anyhow::Result;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use forefront_core::scaffold::{self, CreateArgs};
use forefront_core::{CssChoice, JsChoice, ProductConfig, WorkflowConfig, WorkflowState};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Template pack in the source tree, used when none sits next to the binary
const SOURCE_TEMPLATES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates/forefront");

/// Forefront product configuration
#[derive(Clone)]
pub struct ForefrontConfig;

impl ProductConfig for ForefrontConfig {
    fn name(&self) -> &'static str {
        "forefront"
    }

    fn display_name(&self) -> &'static str {
        "Forefront"
    }

    fn bundled_template_dir(&self) -> PathBuf {
        let beside_binary = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("templates/forefront")));

        match beside_binary {
            Some(dir) if dir.is_dir() => dir,
            _ => PathBuf::from(SOURCE_TEMPLATES),
        }
    }

    fn template_dir_env(&self) -> &'static str {
        "FOREFRONT_TEMPLATE_DIR"
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/forefront-dev/forefront#readme"
    }

    fn cli_description(&self) -> &'static str {
        "Interactive scaffolder for static front-end projects built with npm scripts"
    }

    fn upgrade_command(&self) -> &'static str {
        "cargo install forefront --force"
    }

    fn next_steps(&self, dir: &Path, state: &WorkflowState) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: Install npm dependencies
        steps.push("npm install".to_string());

        // Step 3: Build and serve, or just serve when there is nothing to compile
        if state.css_choice().key().is_some() || state.js_choice().key().is_some() {
            steps.push("npm run develop".to_string());
        } else {
            steps.push("npm run serve".to_string());
        }

        // Step 4: Point at the generated help
        steps.push("Open FOREFRONT_HELP.md for the available npm scripts".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub create: CliCreateArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project in the target directory (the default)
    Create(CliCreateArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Local template pack to use instead of the bundled one
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,

    /// Project directory to create
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// YAML workflow configuration; the flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Don't ask about the README.md template
    #[arg(long = "no-readme")]
    pub no_readme: bool,

    /// Don't ask about the index.html template
    #[arg(long = "no-html")]
    pub no_html: bool,

    /// Ask about SASS before index.html
    #[arg(long = "css-first")]
    pub css_first: bool,

    /// Use this CSS flavor instead of asking
    #[arg(long, value_enum)]
    pub css: Option<CssChoice>,

    /// Use this javascript flavor instead of asking
    #[arg(long, value_enum)]
    pub js: Option<JsChoice>,

    /// Javascript flavor taken on an empty answer
    #[arg(long = "default-js", value_enum)]
    pub default_js: Option<JsChoice>,

    /// Give up after this many invalid javascript answers
    #[arg(long = "max-attempts")]
    pub max_attempts: Option<u32>,

    /// Use plain line-based prompts (automatic when stdin is not a terminal)
    #[arg(long)]
    pub plain: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl CliCreateArgs {
    fn workflow(&self) -> Result<WorkflowConfig> {
        let mut workflow = match &self.config {
            Some(path) => WorkflowConfig::from_yaml_file(path)?,
            None => WorkflowConfig::default(),
        };

        if self.no_readme {
            workflow.include_readme_step = false;
        }
        if self.no_html {
            workflow.include_html_step = false;
        }
        if self.css_first {
            workflow.css_before_html = true;
        }
        if let Some(css) = self.css {
            workflow.css = Some(css);
        }
        if let Some(js) = self.js {
            workflow.js = Some(js);
        }
        if let Some(default_js) = self.default_js {
            workflow.default_js = default_js;
        }
        if let Some(max) = self.max_attempts {
            workflow.max_js_attempts = Some(max);
        }

        Ok(workflow)
    }

    fn into_create_args(self) -> Result<CreateArgs> {
        Ok(CreateArgs {
            workflow: self.workflow()?,
            template_dir: self.template_dir,
            directory: self.directory,
            yes: self.yes,
        })
    }
}

/// Clap command branded with the product's name and description
fn cli_command<C: ProductConfig>(config: &C) -> clap::Command {
    Args::command()
        .name(config.name())
        .bin_name(config.name())
        .about(config.cli_description())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let config = ForefrontConfig;
    let args = Args::from_arg_matches(&cli_command(&config).get_matches())
        .unwrap_or_else(|err| err.exit());

    let cli_args = match args.command {
        Some(Command::Create(create_args)) => create_args,
        None => args.create,
    };
    let plain = cli_args.plain || !std::io::stdin().is_terminal();
    let create_args = cli_args.into_create_args()?;

    let result = if plain {
        scaffold::run_plain(&config, create_args, CLI_VERSION).await
    } else {
        forefront_core::run(&config, create_args, CLI_VERSION).await
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
