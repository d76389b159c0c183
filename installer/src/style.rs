//! Terminal styling for the interactive transcript.
//!
//! Plain text goes in, styled text comes out. Coloring follows `colored`'s
//! global switch, so `NO_COLOR` and non-color terminals get plain output.

use colored::Colorize;

/// Echoed shell command.
pub fn command(text: &str) -> String {
    text.yellow().to_string()
}

pub fn ok(text: &str) -> String {
    text.bright_blue().bold().to_string()
}

pub fn failed(text: &str) -> String {
    text.red().to_string()
}

/// De-emphasized notes such as the omitted-lines summary.
pub fn muted(text: &str) -> String {
    text.white().dimmed().to_string()
}

/// Confirm gate heading bar.
pub fn heading(text: &str) -> String {
    text.on_blue().to_string()
}

/// Prompt asking the operator to continue.
pub fn prompt(text: &str) -> String {
    text.green().to_string()
}
