//! Running shell commands with stdout and stderr captured as one stream.

use std::io::Read;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};
use tracing::{debug, error, instrument};

use crate::core::output::split_lines;

/// Captured result of one shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub succeeded: bool,
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    /// Combined stdout/stderr in the order the child wrote it.
    pub output_lines: Vec<String>,
}

impl CommandResult {
    pub fn from_status(status: ExitStatus, raw: &[u8]) -> Self {
        Self {
            succeeded: status.success(),
            code: status.code(),
            output_lines: split_lines(raw),
        }
    }

    pub fn first_line(&self) -> Option<&str> {
        self.output_lines.first().map(String::as_str)
    }
}

/// Abstraction over command execution so tests can script outcomes.
pub trait Shell {
    /// Run `command` through the platform shell inside `workdir`, with `env`
    /// added to the inherited environment. Blocks until the child exits.
    ///
    /// A non-zero exit is reported through [`CommandResult::succeeded`];
    /// `Err` means the command could not be started at all.
    fn run(&self, command: &str, workdir: &Path, env: &[(String, String)])
    -> Result<CommandResult>;
}

/// Shell backed by real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessShell;

impl Shell for ProcessShell {
    #[instrument(skip_all, fields(command = %command, workdir = %workdir.display()))]
    fn run(
        &self,
        command: &str,
        workdir: &Path,
        env: &[(String, String)],
    ) -> Result<CommandResult> {
        let (mut reader, writer) = std::io::pipe().context("create output pipe")?;

        let mut cmd = shell_command(command);
        cmd.current_dir(workdir)
            .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(writer.try_clone().context("clone output pipe")?)
            .stderr(writer);

        debug!("spawning child process");
        let mut child = match cmd.spawn() {
            Ok(c) => c,
            Err(e) => {
                error!(err = %e, "failed to spawn command");
                return Err(e).with_context(|| format!("spawn `{command}`"));
            }
        };
        // The pipe only reaches EOF once every write end is closed, including
        // the copies held by `cmd`.
        drop(cmd);

        let mut raw = Vec::new();
        reader
            .read_to_end(&mut raw)
            .with_context(|| format!("read output of `{command}`"))?;
        let status = child
            .wait()
            .with_context(|| format!("wait for `{command}`"))?;

        debug!(exit_code = ?status.code(), bytes = raw.len(), "command finished");
        Ok(CommandResult::from_status(status, &raw))
    }
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}
