//! Build ANNIS from source, unpack the service distribution and start it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use tracing::{debug, info};

use super::{ANNIS_DIR, ANNIS_HOME, ANNIS_REPO};
use crate::context::Context;
use crate::core::archive::{is_archive, single_archive, unpacked_dir_name};
use crate::error::Abort;
use crate::io::artifacts::{ENV_SCRIPT, SERVICE_SCRIPT, env_script, write_text};
use crate::io::git;
use crate::task::Task;

/// Where `mvn install` leaves the service distribution, relative to the root.
const SERVICE_TARGET_DIR: &str = "ANNIS/annis-service/target";

pub struct InstallAnnis;

impl Task for InstallAnnis {
    fn title(&self) -> &str {
        "Install ANNIS"
    }

    fn explanation(&self) -> &str {
        "Now we will try to install ANNIS."
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<bool> {
        let updated = git::sync(ctx, ANNIS_REPO, ANNIS_DIR)?;
        if updated {
            ctx.command("mvn install", Some("Build ANNIS from sources"))?;
        } else {
            ctx.console
                .say("Skipping Maven since nothing has been updated")?;
        }
        ctx.workdir.up();

        let archive = find_service_archive(&ctx.workdir.join(SERVICE_TARGET_DIR))?;
        let archive_name = archive
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("archive name of {}", archive.display()))?
            .to_string();
        let service_name = unpacked_dir_name(&archive_name).to_string();
        let service_dir = ctx.workdir.join(&service_name);
        debug!(archive = %archive_name, service = %service_name, "service archive found");

        if service_dir.is_dir() {
            ctx.console.say(format!(
                "Directory {service_name} exists. It will be left untouched."
            ))?;
            ctx.console.say(
                "Therefore unpacking the new annis-service and starting it are skipped.",
            )?;
            ctx.set_env(ANNIS_HOME, service_dir.display().to_string());
            return Ok(true);
        }

        ctx.command(
            &format!("tar xfz {SERVICE_TARGET_DIR}/{archive_name}"),
            Some("Unpack annis-service installation package"),
        )?;
        ctx.set_env(ANNIS_HOME, service_dir.display().to_string());
        ctx.workdir.enter(&service_name);
        ctx.command(&format!("{SERVICE_SCRIPT} start"), Some("Start annis-service"))?;
        ctx.workdir.up();
        info!(service = %service_dir.display(), "annis-service started");

        let env_path = ctx.workdir.join(ENV_SCRIPT);
        if !env_path.exists() {
            write_text(&env_path, &env_script(&service_dir))?;
            ctx.console.say(format!(
                "Run 'source {ENV_SCRIPT}' before using ANNIS service and admin scripts."
            ))?;
            ctx.console
                .say("Alternatively, copy its contents into ~/.profile.")?;
        }
        Ok(true)
    }
}

/// The single `*.tar.gz` in `dir`. None or several is fatal.
fn find_service_archive(dir: &Path) -> Result<PathBuf> {
    let mut candidates = Vec::new();
    if dir.is_dir() {
        for entry in fs::read_dir(dir).with_context(|| format!("list {}", dir.display()))? {
            let entry = entry.with_context(|| format!("list {}", dir.display()))?;
            let path = entry.path();
            let name_matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_archive);
            if name_matches && path.is_file() {
                candidates.push(path);
            }
        }
    }
    candidates.sort();
    single_archive(candidates).map_err(|found| {
        Abort::ArchiveCount {
            dir: dir.to_path_buf(),
            found,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::console::Console;
    use crate::io::locate::SearchPath;
    use crate::test_support::{SERVICE_ARCHIVE, SERVICE_DIR, ScriptedShell, transcript};
    use std::io::Cursor;

    fn execute(root: &Path, shell: &ScriptedShell) -> (Result<bool>, Option<String>, String) {
        let mut out = Vec::new();
        let (result, home) = {
            let console = Console::new(Cursor::new(String::new()), &mut out);
            let search = SearchPath::from_dirs(Vec::<PathBuf>::new()).expect("path");
            let mut ctx = Context::new(console, shell, search, root);
            let result = InstallAnnis.execute(&mut ctx);
            (result, ctx.env_var(ANNIS_HOME).map(str::to_string))
        };
        (result, home, transcript(&out))
    }

    #[test]
    fn fresh_install_builds_unpacks_and_starts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let shell = ScriptedShell::orfeo_world();
        let (result, home, text) = execute(temp.path(), &shell);
        assert!(result.expect("install"));

        let service_dir = temp.path().join(SERVICE_DIR);
        assert_eq!(home, Some(service_dir.display().to_string()));
        assert_eq!(
            shell.commands(),
            vec![
                format!("git clone {ANNIS_REPO} ANNIS"),
                "mvn install".to_string(),
                format!("tar xfz ANNIS/annis-service/target/{SERVICE_ARCHIVE}"),
                "bin/annis-service-no-security.sh start".to_string(),
            ]
        );
        let calls = shell.calls();
        assert_eq!(calls[1].workdir, temp.path().join("ANNIS"));
        assert_eq!(calls[3].workdir, service_dir);
        assert_eq!(
            calls[3].env,
            vec![(ANNIS_HOME.to_string(), service_dir.display().to_string())]
        );

        let env = fs::read_to_string(temp.path().join(ENV_SCRIPT)).expect("settings.sh");
        assert!(env.contains(&format!("export ANNIS_HOME={}", service_dir.display())));
        assert!(text.contains("Run 'source settings.sh'"));
    }

    #[test]
    fn unchanged_checkout_skips_maven_and_keeps_existing_service() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join(SERVICE_TARGET_DIR);
        fs::create_dir_all(&target).expect("mkdir");
        fs::write(target.join(SERVICE_ARCHIVE), b"archive").expect("archive");
        fs::create_dir(temp.path().join(SERVICE_DIR)).expect("service dir");

        let shell = ScriptedShell::orfeo_world().reply("git pull", &["Already up to date."]);
        let (result, home, text) = execute(temp.path(), &shell);
        assert!(result.expect("install"));
        assert_eq!(shell.commands(), vec!["git pull".to_string()]);
        assert!(text.contains("Skipping Maven since nothing has been updated"));
        assert!(text.contains(&format!("Directory {SERVICE_DIR} exists.")));
        assert_eq!(
            home,
            Some(temp.path().join(SERVICE_DIR).display().to_string())
        );
        assert!(!temp.path().join(ENV_SCRIPT).exists());
    }

    #[test]
    fn missing_archive_is_fatal() {
        let temp = tempfile::tempdir().expect("tempdir");
        let shell = ScriptedShell::new();
        let (result, _, _) = execute(temp.path(), &shell);
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Abort>(),
            Some(Abort::ArchiveCount { found: 0, .. })
        ));
    }

    #[test]
    fn several_archives_are_fatal() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join(SERVICE_TARGET_DIR);
        fs::create_dir_all(&target).expect("mkdir");
        fs::write(target.join("a-distribution.tar.gz"), b"a").expect("a");
        fs::write(target.join("b-distribution.tar.gz"), b"b").expect("b");
        fs::write(target.join("notes.txt"), b"c").expect("c");

        let err = find_service_archive(&target).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Abort>(),
            Some(Abort::ArchiveCount { found: 2, .. })
        ));
    }

    #[test]
    fn existing_env_script_is_kept() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join(ENV_SCRIPT), "custom\n").expect("write");
        let shell = ScriptedShell::orfeo_world();
        let (result, _, _) = execute(temp.path(), &shell);
        assert!(result.expect("install"));
        let env = fs::read_to_string(temp.path().join(ENV_SCRIPT)).expect("read");
        assert_eq!(env, "custom\n");
    }
}
