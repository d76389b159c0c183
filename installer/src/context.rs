//! Execution context handed to every task.
//!
//! Holds everything a task body may touch: the console, the shell, the
//! search path, the working-directory handle, the configuration store and the
//! environment exported to child processes.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use crate::core::output::{command_padding, preview, redact};
use crate::error::Abort;
use crate::io::console::Console;
use crate::io::locate::SearchPath;
use crate::io::process::{CommandResult, Shell};
use crate::io::settings::{SettingKey, Settings};
use crate::io::workdir::WorkDir;
use crate::style;

pub struct Context<'a> {
    pub console: Console<'a>,
    shell: &'a dyn Shell,
    pub search_path: SearchPath,
    pub workdir: WorkDir,
    /// Configuration store; loaded by the configuration task.
    pub settings: Settings,
    /// Set when the configuration task accepted a new search index password.
    pub solr_password_changed: bool,
    /// Login name of the operator, mentioned in the generated readme.
    pub login: Option<String>,
    env: Vec<(String, String)>,
    secrets: Vec<String>,
}

impl<'a> Context<'a> {
    pub fn new(
        console: Console<'a>,
        shell: &'a dyn Shell,
        search_path: SearchPath,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            console,
            shell,
            search_path,
            workdir: WorkDir::new(root),
            settings: Settings::default(),
            solr_password_changed: false,
            login: login_from_env(),
            env: Vec::new(),
            secrets: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        self.workdir.root()
    }

    /// Export a variable to every command started from now on.
    pub fn set_env(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.env.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.env.push((key.to_string(), value)),
        }
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Mask `secret` wherever it appears in echoed commands.
    pub fn add_secret(&mut self, secret: impl Into<String>) {
        self.secrets.push(secret.into());
    }

    /// Run a command in the current directory, echoing it, its status and a
    /// preview of its output.
    ///
    /// A non-zero exit is fatal: the output is shown, then
    /// [`Abort::CommandFailed`] is returned.
    pub fn command(&mut self, command: &str, label: Option<&str>) -> Result<CommandResult> {
        if let Some(label) = label {
            self.console.blank()?;
            self.console.say(format!("  {label}:"))?;
        }
        let shown = redact(command, &self.secrets);
        self.print_command(&shown)?;

        let result = match self.shell.run(command, self.workdir.current(), &self.env) {
            Ok(result) => result,
            Err(err) => {
                self.print_status(false)?;
                warn!(command = %shown, "command could not be started");
                return Err(err);
            }
        };

        self.print_status(result.succeeded)?;
        let preview = preview(&result.output_lines);
        for line in preview.shown {
            self.console.say(format!("    {line}"))?;
        }
        if let Some(omitted) = preview.omitted {
            self.console
                .say(style::muted(&format!("    ...{omitted} lines omitted...")))?;
        }
        if !result.output_lines.is_empty() {
            self.console.blank()?;
        }

        if !result.succeeded {
            warn!(command = %shown, code = ?result.code, "command failed");
            return Err(Abort::CommandFailed {
                command: shown,
                code: result.code,
            }
            .into());
        }
        info!(command = %shown, "command succeeded");
        Ok(result)
    }

    /// Run a command quietly and hand back the result, whatever the exit status.
    pub fn probe(&mut self, command: &str) -> Result<CommandResult> {
        self.shell
            .run(command, self.workdir.current(), &self.env)
    }

    /// Echo a command (or check name) padded to the status column.
    pub fn print_command(&mut self, text: &str) -> Result<()> {
        let padding = command_padding(text);
        self.console
            .print(format!("{}{padding}", style::command(&format!("  {text}"))))
    }

    pub fn print_status(&mut self, ok: bool) -> Result<()> {
        let status = if ok {
            style::ok("OK")
        } else {
            style::failed("FAILED")
        };
        self.console.say(format!("[{status}]"))
    }

    /// Configuration prompt for `key`, showing any stored value as the default.
    ///
    /// An empty answer leaves the store untouched and returns `false`; any
    /// other answer is stored trimmed and returns `true`.
    pub fn ask(&mut self, prompt: &str, key: SettingKey) -> Result<bool> {
        let current = self.settings.get(key).map(str::to_string);
        match self.console.ask(prompt, current.as_deref())? {
            Some(value) => {
                self.settings.set(key, value);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn login_from_env() -> Option<String> {
    ["USER", "LOGNAME", "USERNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
}
