//! Top-level installer flow: welcome gate, every task, closing message.

use anyhow::Result;
use tracing::{info, instrument};

use crate::context::Context;
use crate::task::TaskList;

pub const WELCOME: &str = "Welcome to the Orfeo installer";
pub const ALL_DONE: &str = "All done!";

/// Show the welcome gate with the checklist, then run `tasks` in order.
#[instrument(skip_all, fields(root = %ctx.root().display()))]
pub fn run_installer(ctx: &mut Context<'_>, tasks: &mut TaskList) -> Result<()> {
    let root = ctx.root().display().to_string();
    ctx.console.confirm_with(WELCOME, |c| {
        tasks.render(c)?;
        c.say("This script will attempt to install parts of the Orfeo search portal on your system.")?;
        c.say(format!(
            "Files will be downloaded into the current directory ({root})."
        ))?;
        c.blank()?;
        c.say("At each step you can type q to quit, or just press enter to continue.")?;
        c.say("Some steps take a long time to finish, so please be patient.")
    })?;

    tasks.run_all(ctx)?;

    ctx.console.say(ALL_DONE)?;
    info!(completed = tasks.all_completed(), "installer finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Abort;
    use crate::io::console::Console;
    use crate::io::locate::SearchPath;
    use crate::steps::orfeo_tasks;
    use crate::test_support::{ScriptedShell, transcript};
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn quitting_at_welcome_runs_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let shell = ScriptedShell::orfeo_world();
        let mut out = Vec::new();
        let mut tasks = orfeo_tasks();
        let err = {
            let console = Console::new(Cursor::new("q\n"), &mut out);
            let search = SearchPath::from_dirs(Vec::<PathBuf>::new()).expect("path");
            let mut ctx = Context::new(console, &shell, search, temp.path());
            run_installer(&mut ctx, &mut tasks).unwrap_err()
        };
        assert_eq!(err.downcast_ref::<Abort>(), Some(&Abort::Quit));
        assert!(shell.calls().is_empty());

        let text = transcript(&out);
        assert!(text.contains(&format!("--- {WELCOME} ---")));
        assert!(text.contains("☐ 1. Check Ruby version"));
        assert!(text.contains("☐ 8. Create help files"));
        assert!(text.contains(&temp.path().display().to_string()));
        assert!(!text.contains(ALL_DONE));
    }
}
