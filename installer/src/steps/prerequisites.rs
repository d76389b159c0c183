//! Prerequisite checks: Ruby runtime, gems and build tools.

use anyhow::Result;
use tracing::debug;

use crate::context::Context;
use crate::core::version::meets_minimum;
use crate::error::Abort;
use crate::task::Task;

const MIN_RUBY: &str = "1.9.3-p0";
const RUBY_VERSION_PROBE: &str = "ruby -e \"print RUBY_VERSION\"";

/// Gems the importer and search app need before `bundle` can take over.
const REQUIRED_GEMS: [&str; 4] = ["rsolr", "rubyzip", "bundler", "rake"];

/// Executables that must be on the search path, with what provides them.
const REQUIRED_BINARIES: [(&str, &str); 3] = [
    ("git", "Git"),
    ("javac", "Java Development Kit"),
    ("mvn", "Apache Maven"),
];

pub struct CheckRubyVersion;

impl Task for CheckRubyVersion {
    fn title(&self) -> &str {
        "Check Ruby version"
    }

    fn explanation(&self) -> &str {
        "This is just a simple version check."
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<bool> {
        ctx.print_command("Check Ruby version")?;
        let probe = ctx.probe(RUBY_VERSION_PROBE)?;
        let version = probe
            .first_line()
            .filter(|_| probe.succeeded)
            .map(|v| v.trim().to_string());
        debug!(version = ?version, "ruby version probed");

        if let Some(v) = &version
            && meets_minimum(v, MIN_RUBY)
        {
            ctx.print_status(true)?;
            return Ok(true);
        }

        ctx.print_status(false)?;
        ctx.console.blank()?;
        let found = version.unwrap_or_else(|| "not available".to_string());
        ctx.console
            .confirm_with(&format!("Ruby {MIN_RUBY} is required."), |c| {
                c.say(format!("Your ruby version is {found}."))?;
                c.say("The installer will continue, but problems are to be expected.")
            })?;
        Ok(false)
    }
}

pub struct CheckRubyGems;

impl Task for CheckRubyGems {
    fn title(&self) -> &str {
        "Check Ruby gems"
    }

    fn explanation(&self) -> &str {
        "This stage will check the required gems are installed."
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<bool> {
        for gem in REQUIRED_GEMS {
            ctx.print_command(gem)?;
            let probe = ctx.probe(&format!("gem list -i \"^{gem}$\""))?;
            let found = probe.succeeded && probe.first_line().is_some_and(|l| l.trim() == "true");
            ctx.print_status(found)?;
            if found {
                continue;
            }
            ctx.console.blank()?;
            ctx.console
                .say(format!("  No worries. Trying to install {gem}..."))?;
            ctx.console.blank()?;
            ctx.console
                .say("  If the following command fails, it's probably because you cannot")?;
            ctx.console
                .say("  install gems with your user credentials. If that happens, run")?;
            ctx.console
                .say("  the command again with sudo and then restart the installer.")?;
            ctx.command(
                &format!("gem install {gem}"),
                Some(&format!("Install missing gem '{gem}'")),
            )?;
        }
        Ok(true)
    }
}

pub struct CheckBinaries;

impl Task for CheckBinaries {
    fn title(&self) -> &str {
        "Check installed binaries"
    }

    fn explanation(&self) -> &str {
        "This stage will check all the required binaries are installed."
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<bool> {
        ctx.console.say("  Check for required binaries:")?;
        for (name, package) in REQUIRED_BINARIES {
            ctx.print_command(name)?;
            let found = ctx.search_path.locate(name).is_some();
            ctx.print_status(found)?;
            if !found {
                return Err(Abort::MissingExecutable {
                    name: name.to_string(),
                    package: package.to_string(),
                }
                .into());
            }
        }
        Ok(true)
    }
}
