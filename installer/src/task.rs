//! Task registry and sequential runner.
//!
//! Each task moves `pending -> running -> done`. A body returning `Ok(false)`
//! leaves its task pending and the runner moves on; an `Err` stops the run
//! and is returned to the caller.

use anyhow::{Context as _, Result};
use tracing::{debug, info};

use crate::context::Context;
use crate::core::progress::{ChecklistItem, render_checklist};
use crate::io::console::Console;

/// One confirm-gated unit of installer work.
pub trait Task {
    fn title(&self) -> &str;

    /// Shown under the title at the task's confirm gate.
    fn explanation(&self) -> &str;

    /// Do the work. `Ok(true)` marks the task done.
    fn execute(&self, ctx: &mut Context<'_>) -> Result<bool>;
}

struct Entry {
    task: Box<dyn Task>,
    completed: bool,
}

/// Ordered list of tasks with their completion flags.
#[derive(Default)]
pub struct TaskList {
    entries: Vec<Entry>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: impl Task + 'static) {
        self.entries.push(Entry {
            task: Box::new(task),
            completed: false,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.task.title()).collect()
    }

    pub fn completed(&self) -> Vec<bool> {
        self.entries.iter().map(|e| e.completed).collect()
    }

    pub fn all_completed(&self) -> bool {
        self.entries.iter().all(|e| e.completed)
    }

    /// Print the checklist of tasks.
    pub fn render(&self, console: &mut Console<'_>) -> Result<()> {
        let items: Vec<ChecklistItem<'_>> = self
            .entries
            .iter()
            .map(|e| ChecklistItem {
                title: e.task.title(),
                completed: e.completed,
            })
            .collect();
        for line in render_checklist(&items) {
            console.say(line)?;
        }
        Ok(())
    }

    /// Run every task in registration order.
    ///
    /// Each task starts in the installation directory, behind its confirm
    /// gate. The checklist is redrawn after every task.
    pub fn run_all(&mut self, ctx: &mut Context<'_>) -> Result<()> {
        for i in 0..self.entries.len() {
            let entry = &self.entries[i];
            let title = entry.task.title().to_string();

            ctx.workdir.reset();
            let explanation = entry.task.explanation();
            ctx.console
                .confirm_with(&title, |c| c.say(explanation))?;

            debug!(task = %title, "running task");
            let done = entry
                .task
                .execute(ctx)
                .with_context(|| format!("task '{title}'"))?;
            if done {
                info!(task = %title, "task completed");
            } else {
                info!(task = %title, "task left incomplete");
            }
            self.entries[i].completed = done;

            self.render(&mut ctx.console)?;
        }
        ctx.workdir.reset();
        Ok(())
    }
}
