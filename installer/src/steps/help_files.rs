//! Generate the restart script and readme for the operator.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::{ANNIS_DIR, ANNIS_HOME, SEARCH_DIR};
use crate::context::Context;
use crate::io::artifacts::{README, RESTART_SCRIPT, readme, restart_script, write_script, write_text};
use crate::task::Task;

const GUI_WAR: &str = "annis-gui/target/annis-gui.war";

pub struct HelpFiles;

impl Task for HelpFiles {
    fn title(&self) -> &str {
        "Create help files"
    }

    fn explanation(&self) -> &str {
        "Create helper script and readme file."
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<bool> {
        let annis_home = ctx
            .env_var(ANNIS_HOME)
            .map(PathBuf::from)
            .context("ANNIS_HOME is unknown, install ANNIS first")?;
        let root = ctx.root().to_path_buf();
        let login = ctx.login.as_deref().unwrap_or("unknown");

        write_script(
            &root.join(RESTART_SCRIPT),
            &restart_script(&annis_home, &root.join(SEARCH_DIR)),
        )?;
        write_text(
            &root.join(README),
            &readme(login, &root.join(ANNIS_DIR).join(GUI_WAR)),
        )?;

        ctx.console
            .say(format!("OK. See {README} for information."))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::console::Console;
    use crate::io::locate::SearchPath;
    use crate::test_support::ScriptedShell;
    use std::fs;
    use std::io::Cursor;

    #[test]
    fn writes_restart_script_and_readme() {
        let temp = tempfile::tempdir().expect("tempdir");
        let shell = ScriptedShell::new();
        let mut out = Vec::new();
        let console = Console::new(Cursor::new(String::new()), &mut out);
        let search = SearchPath::from_dirs(Vec::<PathBuf>::new()).expect("path");
        let mut ctx = Context::new(console, &shell, search, temp.path());
        let home = temp.path().join("annis-service-3.2.1");
        ctx.set_env(ANNIS_HOME, home.display().to_string());
        ctx.login = Some("orfeo".to_string());

        assert!(HelpFiles.execute(&mut ctx).expect("help files"));

        let restart = fs::read_to_string(temp.path().join(RESTART_SCRIPT)).expect("restart");
        assert!(restart.contains(&format!(
            "{}/bin/annis-service-no-security.sh restart",
            home.display()
        )));
        assert!(restart.contains(&format!("cd {}", temp.path().join(SEARCH_DIR).display())));
        let readme = fs::read_to_string(temp.path().join(README)).expect("readme");
        assert!(readme.contains("(orfeo)"));
    }

    #[test]
    fn requires_annis_home() {
        let temp = tempfile::tempdir().expect("tempdir");
        let shell = ScriptedShell::new();
        let mut out = Vec::new();
        let console = Console::new(Cursor::new(String::new()), &mut out);
        let search = SearchPath::from_dirs(Vec::<PathBuf>::new()).expect("path");
        let mut ctx = Context::new(console, &shell, search, temp.path());
        let err = HelpFiles.execute(&mut ctx).unwrap_err();
        assert!(err.to_string().contains("ANNIS_HOME"));
        assert!(!temp.path().join(RESTART_SCRIPT).exists());
    }
}
