//! Individual workflow steps
//!
//! Each step takes the run state explicitly, asks at most one question (the JS step
//! may repeat its question) and performs its file-system effect before returning.

use super::choice::{affirmative, CssChoice, JsChoice};
use super::config::WorkflowConfig;
use super::state::{Phase, WorkflowState};
use super::WorkflowError;
use crate::prompt::{Prompter, Question, Tone};
use crate::templates::{merge_choices, Copier};
use anyhow::Result;

/// Asset directories every project gets, created empty
pub const ASSET_DIRS: [&str; 4] = ["assets/js", "assets/img", "assets/fonts", "assets/css"];

pub const HELP_FILE: &str = "FOREFRONT_HELP.md";
pub const MANIFEST_FILE: &str = "package.json";
pub const README_FILE: &str = "README.md";
pub const HTML_FILE: &str = "index.html";
pub const SCSS_DIR: &str = "src/scss";

/// Create the fixed layout and load the manifest template
pub async fn setup(copier: &Copier) -> Result<WorkflowState> {
    for dir in ASSET_DIRS {
        copier.ensure_dir(dir).await?;
    }
    copier.copy(HELP_FILE, HELP_FILE).await?;

    let manifest = copier.read_manifest(MANIFEST_FILE).await?;
    Ok(WorkflowState::new(manifest))
}

pub async fn readme<P: Prompter + ?Sized>(
    state: &mut WorkflowState,
    copier: &Copier,
    prompter: &mut P,
) -> Result<()> {
    state.enter(Phase::AwaitingReadme);
    let answer = prompter.ask(&Question::new(
        "Would you like to create a README.md template?",
        "y",
    ))?;

    let create = affirmative(&answer);
    if create {
        copier.copy(README_FILE, README_FILE).await?;
        prompter.tell(Tone::Affirm, "Okay, README.md was created!")?;
    } else {
        prompter.tell(Tone::Whisper, "skipping README.md template...")?;
    }
    state.readme = Some(create);
    Ok(())
}

pub async fn html<P: Prompter + ?Sized>(
    state: &mut WorkflowState,
    copier: &Copier,
    prompter: &mut P,
) -> Result<()> {
    state.enter(Phase::AwaitingHtml);
    let answer = prompter.ask(&Question::new(
        "Would you like to create an index.html template?",
        "y",
    ))?;

    let create = affirmative(&answer);
    if create {
        copier.copy(HTML_FILE, HTML_FILE).await?;
        prompter.tell(Tone::Affirm, "Okay, index.html was created!")?;
    } else {
        prompter.tell(Tone::Whisper, "skipping index.html template...")?;
    }
    state.html = Some(create);
    Ok(())
}

/// Ask about SASS, unless the configuration fixes the answer
pub async fn css<P: Prompter + ?Sized>(
    state: &mut WorkflowState,
    config: &WorkflowConfig,
    copier: &Copier,
    prompter: &mut P,
) -> Result<()> {
    state.enter(Phase::AwaitingCss);
    let choice = match config.css {
        Some(fixed) => fixed,
        None => {
            let answer = prompter.ask(&Question::new("Would you like to use SASS?", "y"))?;
            CssChoice::from_affirmative(affirmative(&answer))
        }
    };

    match choice {
        CssChoice::Sass => {
            prompter.tell(Tone::Affirm, "Okay, let's get Sassy!")?;
            copier.ensure_dir(SCSS_DIR).await?;
            copier.copy(SCSS_DIR, SCSS_DIR).await?;
        }
        CssChoice::Skip => {
            prompter.tell(Tone::Whisper, "skipping SASS setup...")?;
        }
    }
    state.css = Some(choice);
    Ok(())
}

/// Ask for the JS flavor until a known one is given, unless the configuration fixes it
pub async fn js<P: Prompter + ?Sized>(
    state: &mut WorkflowState,
    config: &WorkflowConfig,
    copier: &Copier,
    prompter: &mut P,
) -> Result<()> {
    state.enter(Phase::AwaitingJsFlavor);
    let choice = match config.js {
        Some(fixed) => fixed,
        None => ask_js_flavor(state, config, prompter)?,
    };

    match choice {
        JsChoice::Skip => prompter.tell(Tone::Whisper, "skipping JS setup...")?,
        JsChoice::Es6 => prompter.tell(
            Tone::Affirm,
            "EcmaScript6 ... I can see you live on the edge.",
        )?,
        JsChoice::Js => prompter.tell(Tone::Affirm, "Nothing wrong with vanilla JavaScript!")?,
        JsChoice::CoffeeScript => prompter.tell(Tone::Affirm, "Brewing coffeescript...")?,
    }
    if let Some(flavor) = choice.key() {
        copier.ensure_dir(format!("src/{}", flavor)).await?;
    }

    state.js = Some(choice);
    Ok(())
}

fn ask_js_flavor<P: Prompter + ?Sized>(
    state: &mut WorkflowState,
    config: &WorkflowConfig,
    prompter: &mut P,
) -> Result<JsChoice> {
    let question = Question::new(
        format!(
            "What flavour of javascript would you like? [{}]",
            JsChoice::ALL.map(JsChoice::name).join(", ")
        ),
        config.default_js.name(),
    );

    loop {
        let answer = prompter.ask(&question)?;
        state.js_attempts += 1;

        if let Some(choice) = JsChoice::parse(&answer, config.default_js) {
            return Ok(choice);
        }

        prompter.tell(
            Tone::Error,
            &format!("Please select {}.", JsChoice::options_list()),
        )?;

        if let Some(max) = config.max_js_attempts {
            if state.js_attempts >= max {
                return Err(WorkflowError::AttemptsExhausted {
                    attempts: state.js_attempts,
                }
                .into());
            }
        }
    }
}

/// Merge the choices into the manifest and write `package.json`
pub async fn finalize(state: &mut WorkflowState, copier: &Copier) -> Result<()> {
    state.enter(Phase::Finalizing);
    let (css, js) = (state.css_choice(), state.js_choice());
    merge_choices(&mut state.manifest, css, js)?;
    copier.write_manifest(MANIFEST_FILE, &state.manifest).await
}

pub fn teardown<P: Prompter + ?Sized>(state: &mut WorkflowState, prompter: &mut P) -> Result<()> {
    state.enter(Phase::Done);
    prompter.tell(Tone::Say, "All Finished!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::ScriptedPrompter;
    use crate::templates::Manifest;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, TempDir, Copier, WorkflowState) {
        let templates = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        std::fs::write(templates.path().join(README_FILE), "# Readme").unwrap();
        std::fs::create_dir_all(templates.path().join(SCSS_DIR)).unwrap();
        std::fs::write(templates.path().join("src/scss/application.scss"), "").unwrap();

        let copier = Copier::new(templates.path(), project.path());
        let state = WorkflowState::new(
            Manifest::from_json(r#"{ "scripts": {}, "devDependencies": {} }"#).unwrap(),
        );
        (templates, project, copier, state)
    }

    #[tokio::test]
    async fn test_readme_affirmative_answers() {
        for answer in ["", "y", "Y", "yes", "YES"] {
            let (_t, project, copier, mut state) = fixture();
            let mut prompter = ScriptedPrompter::new([answer]);

            readme(&mut state, &copier, &mut prompter).await.unwrap();

            assert_eq!(state.readme, Some(true), "answer {:?}", answer);
            assert!(project.path().join(README_FILE).is_file());
            assert!(prompter.saw(Tone::Affirm, "README.md was created"));
        }
    }

    #[tokio::test]
    async fn test_readme_negative_answer() {
        let (_t, project, copier, mut state) = fixture();
        let mut prompter = ScriptedPrompter::new(["whatever"]);

        readme(&mut state, &copier, &mut prompter).await.unwrap();

        assert_eq!(state.readme, Some(false));
        assert!(!project.path().join(README_FILE).exists());
        assert_eq!(prompter.questions()[0].default, "y");
    }

    #[tokio::test]
    async fn test_css_fixed_choice_asks_nothing() {
        let (_t, project, copier, mut state) = fixture();
        let config = WorkflowConfig {
            css: Some(CssChoice::Sass),
            ..WorkflowConfig::default()
        };
        let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

        css(&mut state, &config, &copier, &mut prompter).await.unwrap();

        assert!(prompter.questions().is_empty());
        assert_eq!(state.css, Some(CssChoice::Sass));
        assert!(project.path().join("src/scss/application.scss").is_file());
    }

    #[tokio::test]
    async fn test_css_declined() {
        let (_t, project, copier, mut state) = fixture();
        let mut prompter = ScriptedPrompter::new(["no"]);

        css(&mut state, &WorkflowConfig::default(), &copier, &mut prompter)
            .await
            .unwrap();

        assert_eq!(state.css, Some(CssChoice::Skip));
        assert!(!project.path().join(SCSS_DIR).exists());
        assert!(prompter.saw(Tone::Whisper, "skipping SASS"));
    }

    #[tokio::test]
    async fn test_js_each_branch() {
        let cases = [
            ("coffeescript", JsChoice::CoffeeScript),
            ("", JsChoice::CoffeeScript),
            ("es6", JsChoice::Es6),
            ("js", JsChoice::Js),
            ("skip", JsChoice::Skip),
        ];
        for (answer, expected) in cases {
            let (_t, project, copier, mut state) = fixture();
            let mut prompter = ScriptedPrompter::new([answer]);

            js(&mut state, &WorkflowConfig::default(), &copier, &mut prompter)
                .await
                .unwrap();

            assert_eq!(state.js, Some(expected));
            assert_eq!(state.js_attempts, 1);
            for flavor in ["coffeescript", "es6", "js"] {
                let dir = project.path().join("src").join(flavor);
                assert_eq!(dir.is_dir(), expected.key() == Some(flavor));
            }
        }
    }

    #[tokio::test]
    async fn test_js_reprompts_on_unknown_answer() {
        let (_t, _project, copier, mut state) = fixture();
        let mut prompter = ScriptedPrompter::new(["ruby", "TypeScript", "es6"]);

        js(&mut state, &WorkflowConfig::default(), &copier, &mut prompter)
            .await
            .unwrap();

        assert_eq!(state.js, Some(JsChoice::Es6));
        assert_eq!(state.js_attempts, 3);
        assert_eq!(prompter.questions().len(), 3);
        assert_eq!(prompter.questions()[0], prompter.questions()[2]);
        assert!(prompter.saw(Tone::Error, r#"Please select "coffeescript", "es6", "js", or "skip"."#));
    }

    #[tokio::test]
    async fn test_js_invalid_answer_leaves_choice_unset() {
        let (_t, _project, copier, mut state) = fixture();
        let mut prompter = ScriptedPrompter::new(["ruby"]);

        let result = js(&mut state, &WorkflowConfig::default(), &copier, &mut prompter).await;

        // The scripted prompter runs dry on the repeated question
        assert!(result.is_err());
        assert_eq!(state.js, None);
        assert_eq!(state.phase, Phase::AwaitingJsFlavor);
        assert_eq!(prompter.questions().len(), 2);
    }

    #[tokio::test]
    async fn test_js_attempt_ceiling() {
        let (_t, project, copier, mut state) = fixture();
        let config = WorkflowConfig {
            max_js_attempts: Some(2),
            ..WorkflowConfig::default()
        };
        let mut prompter = ScriptedPrompter::new(["ruby", "perl", "es6"]);

        let err = js(&mut state, &config, &copier, &mut prompter)
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<WorkflowError>(),
            Some(&WorkflowError::AttemptsExhausted { attempts: 2 })
        );
        assert_eq!(prompter.remaining(), 1);
        assert!(!project.path().join("src/es6").exists());
    }

    #[tokio::test]
    async fn test_js_configured_default() {
        let (_t, _project, copier, mut state) = fixture();
        let config = WorkflowConfig {
            default_js: JsChoice::Es6,
            ..WorkflowConfig::default()
        };
        let mut prompter = ScriptedPrompter::new([""]);

        js(&mut state, &config, &copier, &mut prompter).await.unwrap();

        assert_eq!(state.js, Some(JsChoice::Es6));
        assert_eq!(prompter.questions()[0].hint(), "(default: es6)");
    }

    #[tokio::test]
    async fn test_whitespace_answer_is_not_the_default() {
        let (_t, project, copier, mut state) = fixture();
        let mut prompter = ScriptedPrompter::new(["  "]);

        readme(&mut state, &copier, &mut prompter).await.unwrap();

        assert_eq!(state.readme, Some(false));
        assert!(!project.path().join(README_FILE).exists());
        assert!(prompter.saw(Tone::Whisper, "skipping README.md"));
    }

    #[tokio::test]
    async fn test_js_whitespace_answer_reprompts() {
        let (_t, _project, copier, mut state) = fixture();
        let mut prompter = ScriptedPrompter::new(["  ", ""]);

        js(&mut state, &WorkflowConfig::default(), &copier, &mut prompter)
            .await
            .unwrap();

        assert_eq!(state.js, Some(JsChoice::CoffeeScript));
        assert_eq!(state.js_attempts, 2);
        assert!(prompter.saw(Tone::Error, "Please select"));
    }

    #[tokio::test]
    async fn test_finalize_merges_recorded_choices() {
        let (_t, project, copier, mut state) = fixture();
        state.css = Some(CssChoice::Sass);
        state.js = Some(JsChoice::Es6);

        finalize(&mut state, &copier).await.unwrap();

        assert_eq!(state.phase, Phase::Finalizing);
        assert_eq!(state.manifest.script("build:scripts"), Some("npm run es6"));
        assert_eq!(state.manifest.dev_dependency("babel"), Some("latest"));
        let written =
            Manifest::from_json(&std::fs::read_to_string(project.path().join(MANIFEST_FILE)).unwrap())
                .unwrap();
        assert_eq!(written, state.manifest);
    }
}
