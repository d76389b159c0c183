//! Fatal conditions that stop the installer.
//!
//! Task bodies return these through `anyhow::Error`; the binary downcasts to
//! choose an exit code.

use std::path::PathBuf;

use thiserror::Error;

use crate::exit_codes;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Abort {
    /// Operator typed `q` or `quit` at a confirm gate.
    #[error("installation cancelled")]
    Quit,

    #[error("standard input closed while waiting for an answer")]
    InputClosed,

    #[error("command `{command}` failed ({})", describe_code(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Command {name} not found. Install {package} and try again.")]
    MissingExecutable { name: String, package: String },

    #[error("Confused trying to find the annis-service tarball: expected one in {dir:?}, found {found}")]
    ArchiveCount { dir: PathBuf, found: usize },
}

impl Abort {
    pub fn exit_code(&self) -> i32 {
        match self {
            Abort::Quit => exit_codes::QUIT,
            _ => exit_codes::FAILED,
        }
    }
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Exit code for any error that reached the top-level driver.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Abort>()
        .map_or(exit_codes::FAILED, Abort::exit_code)
}
