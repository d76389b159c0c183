//! Collect the settings shared by the importer and the text search app.

use anyhow::Result;
use tracing::info;

use crate::context::Context;
use crate::io::settings::{SETTINGS_FILE, SettingKey, Settings, load_settings, write_settings};
use crate::task::Task;

pub const PASSWORD_RULE: &str =
    "The password must be non-empty and cannot contain commas, quotes or whitespace.";

pub struct Configure;

impl Task for Configure {
    fn title(&self) -> &str {
        "Set configuration parameters"
    }

    fn explanation(&self) -> &str {
        "These parameters affect both the importer and the text search app"
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<bool> {
        let path = ctx.root().join(SETTINGS_FILE);
        let mut changed = match load_settings(&path)? {
            Some(settings) => {
                ctx.settings = settings;
                false
            }
            None => {
                ctx.settings = Settings::with_defaults();
                true
            }
        };

        ctx.console
            .say("First, you must specify a password for Solr.")?;
        loop {
            let answered = ctx.ask("Enter password to use for Solr", SettingKey::SolrPassword)?;
            if ctx.settings.has_valid_password() {
                if answered {
                    changed = true;
                    ctx.solr_password_changed = true;
                }
                break;
            }
            ctx.console.say(PASSWORD_RULE)?;
        }
        if let Some(password) = ctx.settings.get(SettingKey::SolrPassword).map(str::to_string) {
            ctx.add_secret(password);
        }

        ctx.console.say(
            "You can now set some default values. These are useful but not mandatory at this stage.",
        )?;
        ctx.console
            .say("If unsure, leave the parameter unchanged.")?;

        changed |= ctx.ask("Enter base URL of ANNIS", SettingKey::AnnisUrl)?;
        changed |= ctx.ask(
            "Enter base URL where the sample pages are hosted",
            SettingKey::SamplesUrl,
        )?;
        changed |= ctx.ask("Enter base URL of Solr", SettingKey::Solr)?;

        if changed && !ctx.settings.is_empty() {
            write_settings(&path, &ctx.settings)?;
            info!(path = %path.display(), "settings saved");
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::console::Console;
    use crate::io::locate::SearchPath;
    use crate::io::settings::DEFAULT_SOLR_URL;
    use crate::test_support::{ScriptedShell, answers, transcript};
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    struct Outcome {
        settings: Settings,
        password_changed: bool,
        transcript: String,
    }

    fn execute(root: &Path, input: &str) -> Outcome {
        let shell = ScriptedShell::new();
        let mut out = Vec::new();
        let (settings, password_changed) = {
            let console = Console::new(Cursor::new(input.to_string()), &mut out);
            let search = SearchPath::from_dirs(Vec::<PathBuf>::new()).expect("path");
            let mut ctx = Context::new(console, &shell, search, root);
            assert!(Configure.execute(&mut ctx).expect("configure"));
            (ctx.settings.clone(), ctx.solr_password_changed)
        };
        Outcome {
            settings,
            password_changed,
            transcript: transcript(&out),
        }
    }

    fn settings_path(root: &Path) -> PathBuf {
        root.join(SETTINGS_FILE)
    }

    #[test]
    fn first_run_writes_password_and_default_solr() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("orfeo-importer")).expect("mkdir");
        let outcome = execute(temp.path(), &answers(&["s3cret", "", "", ""]));

        assert!(outcome.password_changed);
        assert_eq!(outcome.settings.get(SettingKey::SolrPassword), Some("s3cret"));
        let contents = fs::read_to_string(settings_path(temp.path())).expect("settings");
        assert!(contents.contains(":solr_pwd: s3cret"));
        assert!(contents.contains(&format!(":solr: {DEFAULT_SOLR_URL}")));
    }

    #[test]
    fn invalid_passwords_are_rejected_until_valid() {
        let temp = tempfile::tempdir().expect("tempdir");
        let outcome = execute(
            temp.path(),
            &answers(&["", "two words", "a,b", "it's", "say\"hi\"", "s3cret", "", "", ""]),
        );
        assert_eq!(outcome.transcript.matches(PASSWORD_RULE).count(), 5);
        assert_eq!(outcome.settings.get(SettingKey::SolrPassword), Some("s3cret"));
    }

    #[test]
    fn unchanged_existing_settings_are_not_rewritten() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = settings_path(temp.path());
        let mut existing = Settings::with_defaults();
        existing.set(SettingKey::SolrPassword, "old");
        existing.set(SettingKey::AnnisUrl, "http://annis");
        write_settings(&path, &existing).expect("write");
        let before = fs::read_to_string(&path).expect("read");

        let outcome = execute(temp.path(), &answers(&["", "", "", ""]));
        assert!(!outcome.password_changed);
        assert_eq!(outcome.settings, existing);
        assert!(outcome.transcript.contains("(default http://annis)"));
        assert_eq!(fs::read_to_string(&path).expect("read"), before);
    }

    #[test]
    fn changed_url_rewrites_file_without_touching_password_flag() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = settings_path(temp.path());
        let mut existing = Settings::with_defaults();
        existing.set(SettingKey::SolrPassword, "old");
        write_settings(&path, &existing).expect("write");

        let outcome = execute(temp.path(), &answers(&["", "http://annis.example/annis", "", ""]));
        assert!(!outcome.password_changed);
        let contents = fs::read_to_string(&path).expect("read");
        assert!(contents.contains(":annis_url: http://annis.example/annis"));
        assert!(contents.contains(":solr_pwd: old"));
    }
}
