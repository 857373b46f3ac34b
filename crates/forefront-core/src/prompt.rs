//! Question/answer seam between the workflow and whatever front-end drives it
//!
//! The workflow only ever sees a [`Prompter`]: it asks one line-based question at a
//! time and reports progress through toned messages. This module provides the plain
//! stdin/stdout front-end, a defaults-only wrapper for `--yes`, and a scripted
//! prompter that replays canned answers.

use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::VecDeque;
use std::io::{BufRead, StdinLock, Stdout, Write};

/// Tone of a message reported by the workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Neutral narration ("All Finished!")
    Say,
    /// A choice was accepted and acted on
    Affirm,
    /// A step was skipped
    Whisper,
    /// Something the user should look at, the run continues
    Warn,
    /// Invalid input, the same question follows
    Error,
}

/// A single line-based question with the answer used when the reply is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub default: String,
}

impl Question {
    pub fn new(text: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            default: default.into(),
        }
    }

    /// Trailer shown under the question, e.g. `(default: y)`
    pub fn hint(&self) -> String {
        format!("(default: {})", self.default)
    }
}

/// Front-end used by the workflow to ask questions and report progress
pub trait Prompter {
    /// Ask a question and return the raw answer (empty means "take the default")
    fn ask(&mut self, question: &Question) -> Result<String>;

    /// Report a message to the user
    fn tell(&mut self, tone: Tone, message: &str) -> Result<()>;
}

/// Plain line-based prompter over any reader/writer pair
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    /// Prompter reading from stdin and writing to stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print the banner shown before the first question
    pub fn banner(&mut self, title: &str) -> Result<()> {
        writeln!(self.output, "{}", title.white().bold().on_magenta())?;
        Ok(())
    }

    /// Consume the prompter and hand back the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &Question) -> Result<String> {
        writeln!(self.output, "{}", question.text.cyan())?;
        write!(self.output, "{} ", question.hint().cyan())?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer from input")?;
        if read == 0 {
            anyhow::bail!("Input closed before answering: {}", question.text);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn tell(&mut self, tone: Tone, message: &str) -> Result<()> {
        let styled = match tone {
            Tone::Say => message.cyan(),
            Tone::Affirm => message.green(),
            Tone::Whisper => message.dimmed().italic(),
            Tone::Warn => message.yellow(),
            Tone::Error => message.red(),
        };
        writeln!(self.output, "{}", styled)?;
        Ok(())
    }
}

/// Wraps a prompter and answers every question with its default (`--yes` mode)
pub struct AssumeDefaults<P> {
    inner: P,
}

impl<P: Prompter> AssumeDefaults<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Prompter> Prompter for AssumeDefaults<P> {
    fn ask(&mut self, question: &Question) -> Result<String> {
        self.inner.tell(
            Tone::Whisper,
            &format!("{} {}", question.text, question.hint()),
        )?;
        Ok(String::new())
    }

    fn tell(&mut self, tone: Tone, message: &str) -> Result<()> {
        self.inner.tell(tone, message)
    }
}

/// Replays a fixed list of answers and records everything the workflow says
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    questions: Vec<Question>,
    messages: Vec<(Tone, String)>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Questions asked so far, in order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Answers that were never consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Whether a message with this tone containing `needle` was reported
    pub fn saw(&self, tone: Tone, needle: &str) -> bool {
        self.messages
            .iter()
            .any(|(t, m)| *t == tone && m.contains(needle))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        self.questions.push(question.clone());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No scripted answer left for: {}", question.text))
    }

    fn tell(&mut self, tone: Tone, message: &str) -> Result<()> {
        self.messages.push((tone, message.to_string()));
        Ok(())
    }
}
