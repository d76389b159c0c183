//! Explicit working-directory handle.
//!
//! The installer walks in and out of repository directories the way a shell
//! script would, but it never changes the process working directory. Commands
//! receive the handle's current directory instead.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDir {
    root: PathBuf,
    current: PathBuf,
}

impl WorkDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            current: root.clone(),
            root,
        }
    }

    /// Installation directory everything is downloaded into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    /// Path relative to the current directory.
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.current.join(rel)
    }

    /// Equivalent of `cd rel`.
    pub fn enter(&mut self, rel: impl AsRef<Path>) {
        self.current = self.current.join(rel);
    }

    /// Equivalent of `cd ..`.
    pub fn up(&mut self) {
        self.current.pop();
    }

    /// Back to the installation directory.
    pub fn reset(&mut self) {
        self.current = self.root.clone();
    }
}
