//! Layout rules for echoing shell commands and their captured output.

/// Output longer than this is cut down to its first lines plus a summary.
pub const OUTPUT_CUTOFF_LINES: usize = 4;

/// Column the `[OK]`/`[FAILED]` status is aligned to after the echoed command.
pub const COMMAND_COLUMN: usize = 40;

/// What to show of a command's captured output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPreview<'a> {
    pub shown: &'a [String],
    /// Number of lines left out, present once the output reaches the cutoff.
    pub omitted: Option<usize>,
}

pub fn preview(lines: &[String]) -> OutputPreview<'_> {
    if lines.len() < OUTPUT_CUTOFF_LINES {
        return OutputPreview {
            shown: lines,
            omitted: None,
        };
    }
    OutputPreview {
        shown: &lines[..OUTPUT_CUTOFF_LINES],
        omitted: Some(lines.len() - OUTPUT_CUTOFF_LINES),
    }
}

/// Padding placed after a command echo so statuses line up.
pub fn command_padding(command: &str) -> String {
    let width = command.chars().count();
    if width < COMMAND_COLUMN {
        " ".repeat(COMMAND_COLUMN - width)
    } else {
        " ".to_string()
    }
}

/// Mask secrets in `command` with `****`.
///
/// Only whole space-separated arguments and `key=value` values that equal a
/// secret are masked, so a short secret never eats into other words.
pub fn redact(command: &str, secrets: &[String]) -> String {
    let is_secret = |text: &str| secrets.iter().any(|s| !s.is_empty() && s.as_str() == text);
    command
        .split(' ')
        .map(|arg| {
            if is_secret(arg) {
                return "****".to_string();
            }
            match arg.split_once('=') {
                Some((key, value)) if is_secret(value) => format!("{key}=****"),
                _ => arg.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split captured bytes into display lines, dropping line terminators.
pub fn split_lines(raw: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(raw)
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}
