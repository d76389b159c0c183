//! Test-only fakes: a scripted shell, stub executables and transcript helpers.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;

use crate::io::process::{CommandResult, Shell};

/// File-system side effect of a scripted command, given its working directory
/// and full command line.
pub type Effect = Box<dyn Fn(&Path, &str) -> io::Result<()>>;

/// One recorded shell invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCall {
    pub command: String,
    pub workdir: PathBuf,
    pub env: Vec<(String, String)>,
}

struct Rule {
    prefix: String,
    succeeded: bool,
    output: Vec<String>,
    effect: Option<Effect>,
}

/// Fake [`Shell`] answering from rules matched by command prefix.
///
/// The first matching rule wins; commands without a rule succeed silently.
/// Every call is recorded.
#[derive(Default)]
pub struct ScriptedShell {
    rules: Vec<Rule>,
    calls: RefCell<Vec<ShellCall>>,
}

impl ScriptedShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed with `output` for commands starting with `prefix`.
    pub fn reply(self, prefix: &str, output: &[&str]) -> Self {
        self.rule(prefix, true, output, None)
    }

    /// Fail with exit code 1 and `output` for commands starting with `prefix`.
    pub fn fail(self, prefix: &str, output: &[&str]) -> Self {
        self.rule(prefix, false, output, None)
    }

    /// Succeed silently after applying `effect`.
    pub fn effect(
        self,
        prefix: &str,
        effect: impl Fn(&Path, &str) -> io::Result<()> + 'static,
    ) -> Self {
        self.rule(prefix, true, &[], Some(Box::new(effect)))
    }

    fn rule(mut self, prefix: &str, succeeded: bool, output: &[&str], effect: Option<Effect>) -> Self {
        self.rules.push(Rule {
            prefix: prefix.to_string(),
            succeeded,
            output: output.iter().map(|s| s.to_string()).collect(),
            effect,
        });
        self
    }

    pub fn calls(&self) -> Vec<ShellCall> {
        self.calls.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.command.clone()).collect()
    }

    /// Shell simulating the external tools of a full installation: clones
    /// create directories, `mvn install` produces the service archive, `tar`
    /// unpacks it, and the Ruby probes report a modern, complete setup.
    pub fn orfeo_world() -> Self {
        Self::new()
            .reply("ruby -e", &["3.2.2"])
            .reply("gem list -i", &["true"])
            .effect("git clone", |cwd, cmd| {
                let dir = cmd.split_whitespace().last().unwrap_or_default();
                fs::create_dir_all(cwd.join(dir).join(".git"))
            })
            .effect("mvn install", |cwd, _| {
                let target = cwd.join("annis-service").join("target");
                fs::create_dir_all(&target)?;
                fs::write(target.join(SERVICE_ARCHIVE), b"archive")
            })
            .effect("tar xfz", |cwd, cmd| {
                let archive = cmd.split_whitespace().last().unwrap_or_default();
                let name = Path::new(archive)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default();
                let dir = crate::core::archive::unpacked_dir_name(name);
                fs::create_dir_all(cwd.join(dir).join("bin"))
            })
    }
}

/// Archive produced by the simulated `mvn install`.
pub const SERVICE_ARCHIVE: &str = "annis-service-3.2.1-distribution.tar.gz";
/// Directory the simulated archive unpacks into.
pub const SERVICE_DIR: &str = "annis-service-3.2.1";

impl Shell for ScriptedShell {
    fn run(&self, command: &str, workdir: &Path, env: &[(String, String)]) -> Result<CommandResult> {
        self.calls.borrow_mut().push(ShellCall {
            command: command.to_string(),
            workdir: workdir.to_path_buf(),
            env: env.to_vec(),
        });
        let Some(rule) = self.rules.iter().find(|r| command.starts_with(&r.prefix)) else {
            return Ok(CommandResult {
                succeeded: true,
                code: Some(0),
                output_lines: Vec::new(),
            });
        };
        if let Some(effect) = &rule.effect {
            effect(workdir, command)?;
        }
        Ok(CommandResult {
            succeeded: rule.succeeded,
            code: Some(if rule.succeeded { 0 } else { 1 }),
            output_lines: rule.output.clone(),
        })
    }
}

/// Temporary directory holding executable stubs named `names`.
#[cfg(unix)]
pub fn fake_bin_dir(names: &[&str]) -> Result<tempfile::TempDir> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir()?;
    for name in names {
        let path = dir.path().join(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n")?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    }
    Ok(dir)
}

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\x1b\\[[0-9;]*m").expect("valid ansi pattern"));

/// Console transcript as plain text, with color codes removed.
pub fn transcript(buf: &[u8]) -> String {
    ANSI.replace_all(&String::from_utf8_lossy(buf), "").to_string()
}

/// Scripted operator input: one answer per line.
pub fn answers(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
