//! Checklist rendering for the task list.

pub const DIVIDER: &str = "======================================================";
pub const DONE_GLYPH: char = '✔';
pub const PENDING_GLYPH: char = '☐';

/// One line of the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem<'a> {
    pub title: &'a str,
    pub completed: bool,
}

/// Render the checklist: blank line, divider, `Tasks:` header, one numbered
/// line per task and a trailing blank line.
pub fn render_checklist(items: &[ChecklistItem<'_>]) -> Vec<String> {
    let mut out = Vec::with_capacity(items.len() + 4);
    out.push(String::new());
    out.push(DIVIDER.to_string());
    out.push("Tasks:".to_string());
    for (i, item) in items.iter().enumerate() {
        let glyph = if item.completed {
            DONE_GLYPH
        } else {
            PENDING_GLYPH
        };
        out.push(format!("{glyph} {}. {}", i + 1, item.title));
    }
    out.push(String::new());
    out
}
