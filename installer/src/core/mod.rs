//! Pure, deterministic installer logic.
//!
//! Nothing in here touches the filesystem, spawns processes or reads input, so
//! every rule can be tested in isolation.

pub mod archive;
pub mod output;
pub mod password;
pub mod progress;
pub mod version;
