//! Diff display and the confirm-before-write prompt.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::{Command, Stdio};

use colored::control::{self, ShouldColorize};
use colored::Colorize;

use crate::process::CommandSpec;

const PROMPT: &str = "Apply changes? [y/N] ";

/// Where a review happens: a line-oriented input for the answer and an
/// output for the diff and messages.
pub struct Console<R, W> {
    input: R,
    output: W,
    pager: Option<CommandSpec>,
    color: bool,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Standard input/output. On a terminal, diffs are coloured (subject to
    /// `NO_COLOR`/`CLICOLOR`) and shown through `$PAGER` when one is configured.
    pub fn stdio() -> Self {
        let interactive = io::stdout().is_terminal();
        let pager = if interactive {
            std::env::var("PAGER")
                .ok()
                .and_then(|p| CommandSpec::parse(&p))
        } else {
            None
        };
        let color = interactive && ShouldColorize::from_env().should_colorize();
        control::set_override(color);

        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
            pager,
            color,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Plain console: no pager, no colour.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pager: None,
            color: false,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    pub fn show_diff(&mut self, diff: &str) -> io::Result<()> {
        let rendered = if self.color {
            colorize(diff)
        } else {
            diff.to_string()
        };

        if let Some(pager) = &self.pager {
            match page(pager, &rendered) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!(pager = pager.program(), error = %e, "pager failed, printing diff")
                }
            }
        }

        self.output.write_all(rendered.as_bytes())?;
        self.output.flush()
    }

    /// Ask for confirmation. Only `y` or `yes` (any case) accepts; an empty
    /// line, end of input or a read error all decline.
    pub fn confirm(&mut self) -> bool {
        if write!(self.output, "{}", PROMPT)
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => {
                let _ = writeln!(self.output);
                false
            }
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        }
    }
}

fn page(pager: &CommandSpec, text: &str) -> io::Result<()> {
    let mut child = Command::new(pager.program())
        .args(pager.args())
        .stdin(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        // The pager may quit before reading everything.
        let _ = stdin.write_all(text.as_bytes());
    }
    child.wait()?;
    Ok(())
}

fn colorize(diff: &str) -> String {
    diff.split_inclusive('\n')
        .map(|line| {
            let (body, newline) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            let styled = if body.starts_with("+++") || body.starts_with("---") {
                body.bold()
            } else if body.starts_with('+') {
                body.green()
            } else if body.starts_with('-') {
                body.red()
            } else if body.starts_with("@@") {
                body.cyan()
            } else {
                return line.to_string();
            };
            format!("{}{}", styled, newline)
        })
        .collect()
}
