//! Side-effecting helpers: processes, executable lookup, console, files.

pub mod artifacts;
pub mod console;
pub mod git;
pub mod locate;
pub mod process;
pub mod settings;
pub mod workdir;
