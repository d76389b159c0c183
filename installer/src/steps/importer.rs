//! Install the metadata module and the Orfeo importer.

use anyhow::Result;

use super::{IMPORTER_DIR, IMPORTER_REPO, METADATA_DIR, METADATA_REPO, SKIP_RAKE};
use crate::context::Context;
use crate::io::git;
use crate::task::Task;

pub struct InstallImporter;

impl Task for InstallImporter {
    fn title(&self) -> &str {
        "Install importer"
    }

    fn explanation(&self) -> &str {
        "We will try to install the Orfeo importer and its dependencies."
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<bool> {
        if git::sync(ctx, METADATA_REPO, METADATA_DIR)? {
            ctx.command("bundle install", Some("Ensure dependencies are installed"))?;
            ctx.command(
                "bundle exec rake install",
                Some("Ensure the metadata module is installed"),
            )?;
        } else {
            ctx.console.say(SKIP_RAKE)?;
        }
        ctx.workdir.up();

        git::sync(ctx, IMPORTER_REPO, IMPORTER_DIR)?;
        ctx.workdir.up();
        Ok(true)
    }
}
