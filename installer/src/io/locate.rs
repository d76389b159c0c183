//! Finding executables on the search path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Ordered list of directories searched for executables (the `PATH` value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: OsString,
}

impl SearchPath {
    /// Search path taken from the process environment.
    pub fn from_env() -> Self {
        Self {
            dirs: std::env::var_os("PATH").unwrap_or_default(),
        }
    }

    /// Search path made of the given directories, in order.
    pub fn from_dirs<I, P>(dirs: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let joined = std::env::join_paths(dirs.into_iter().map(|p| p.as_ref().to_path_buf()))?;
        Ok(Self { dirs: joined })
    }

    /// First qualifying candidate for `name`: it must exist, not be a
    /// directory and be executable. Platform executable extensions
    /// (`PATHEXT` on Windows) are tried for each directory.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        match which::which_in(name, Some(&self.dirs), cwd) {
            Ok(path) => {
                debug!(name, path = %path.display(), "executable found");
                Some(path)
            }
            Err(err) => {
                debug!(name, err = %err, "executable not found");
                None
            }
        }
    }
}
