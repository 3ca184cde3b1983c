//! External command invocation.

use std::io::ErrorKind;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{Error, Result};

/// A program plus leading arguments, e.g. `pandoc` or `sh -c cat --`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Split a command line on whitespace. Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Run the command with `args` appended, feeding `input` on stdin, and
    /// return captured stdout. Non-zero exit and a missing executable are errors.
    pub async fn run<S: AsRef<str>>(&self, args: &[S], input: Option<&[u8]>) -> Result<Vec<u8>> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .args(args.iter().map(AsRef::as_ref))
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::debug!(program = %self.program, "running external command");

        let mut child = cmd.spawn().map_err(|e| self.spawn_error(e))?;

        let writer = match (input, child.stdin.take()) {
            (Some(input), Some(mut stdin)) => {
                let input = input.to_vec();
                Some(tokio::spawn(async move {
                    let written = stdin.write_all(&input).await;
                    drop(stdin);
                    written
                }))
            }
            _ => None,
        };

        let output = child.wait_with_output().await?;

        if let Some(writer) = writer {
            match writer.await {
                Ok(Err(e)) if e.kind() != ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("exit code {}", code),
                None => "a signal".to_string(),
            };
            return Err(Error::CommandFailed {
                program: self.program.clone(),
                status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }

    fn spawn_error(&self, e: std::io::Error) -> Error {
        if e.kind() == ErrorKind::NotFound {
            Error::CommandNotFound {
                program: self.program.clone(),
            }
        } else {
            Error::Io(e)
        }
    }
}
