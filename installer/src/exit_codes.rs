//! Stable exit codes for the installer binary.

/// Every task ran to the end.
pub const OK: i32 = 0;
/// A command failed, a prerequisite was missing or the installer hit an I/O error.
pub const FAILED: i32 = 1;
/// The operator typed `q`/`quit` at a confirm gate.
pub const QUIT: i32 = 2;
