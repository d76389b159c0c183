//! Interactive installer for the Orfeo search portal.
//!
//! Walks an operator through installing the portal's components into one
//! directory: prerequisite checks, building ANNIS, the metadata importer,
//! configuration and the text search app. Every step sits behind a confirm
//! gate, and every external command is echoed with its status and a short
//! preview of its output.
//!
//! - **[`core`]**: Pure logic (output previews, version comparison, password
//!   rules, checklist rendering). No I/O.
//! - **[`io`]**: Console, processes, git, settings file and generated files.
//!   External effects sit behind the [`io::process::Shell`] seam.
//!
//! [`task`] and [`install`] coordinate the [`steps`] through a shared
//! [`context::Context`].

pub mod context;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod install;
pub mod io;
pub mod logging;
pub mod steps;
pub mod style;
pub mod task;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
