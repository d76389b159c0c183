//! Interactive console: transcript output, confirm gates and value prompts.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::error::Abort;
use crate::style;

pub const CONTINUE_PROMPT: &str = "(press enter to continue)";

/// Line-oriented console over any reader/writer pair.
///
/// The binary uses stdin/stdout; tests feed scripted answers and capture the
/// transcript in a buffer.
pub struct Console<'a> {
    input: Box<dyn BufRead + 'a>,
    output: Box<dyn Write + 'a>,
}

impl Console<'static> {
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<'a> Console<'a> {
    pub fn new(input: impl BufRead + 'a, output: impl Write + 'a) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("write to console")
    }

    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Print without a newline and flush, for prompts and command echoes.
    pub fn print(&mut self, text: impl Display) -> Result<()> {
        write!(self.output, "{text}").context("write to console")?;
        self.output.flush().context("flush console")
    }

    /// Read one line of input without its line terminator.
    ///
    /// End of input is fatal: every caller is waiting on the operator.
    pub fn read_answer(&mut self) -> Result<String> {
        self.output.flush().context("flush console")?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("read from console")?;
        if n == 0 {
            return Err(Abort::InputClosed.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Confirm gate with a heading only.
    pub fn confirm(&mut self, heading: &str) -> Result<()> {
        self.confirm_with(heading, |_| Ok(()))
    }

    /// Confirm gate: heading, caller-provided body, then block for the operator.
    ///
    /// An answer starting with `q` (after trimming) aborts with [`Abort::Quit`];
    /// any other answer, including an empty one, continues.
    pub fn confirm_with<F>(&mut self, heading: &str, body: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.say(style::heading(&format!("--- {heading} ---")))?;
        self.blank()?;
        body(self)?;
        self.say(style::prompt(CONTINUE_PROMPT))?;
        let answer = self.read_answer()?;
        if is_quit(&answer) {
            debug!(heading, "operator quit at confirm gate");
            return Err(Abort::Quit.into());
        }
        Ok(())
    }

    /// Prompt for a value, showing `current` as the default.
    ///
    /// Returns the trimmed answer, or `None` when the operator just pressed
    /// enter (keeping the default).
    pub fn ask(&mut self, prompt: &str, current: Option<&str>) -> Result<Option<String>> {
        match current {
            Some(value) => self.print(format!("{prompt} (default {value}): "))?,
            None => self.print(format!("{prompt}: "))?,
        }
        let answer = self.read_answer()?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }
}

/// Quit keyword check: covers both `q` and `quit`.
pub fn is_quit(answer: &str) -> bool {
    answer.trim().starts_with('q')
}
