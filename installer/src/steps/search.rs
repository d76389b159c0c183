//! Install or refresh the Orfeo text search app and its Solr index.

use anyhow::{Result, anyhow};
use tracing::info;

use super::{SEARCH_DIR, SEARCH_REPO, SKIP_RAKE};
use crate::context::Context;
use crate::io::git;
use crate::io::settings::{SETTINGS_FILE, SettingKey, write_settings};
use crate::task::Task;

pub struct InstallSearch;

impl Task for InstallSearch {
    fn title(&self) -> &str {
        "Install search app"
    }

    fn explanation(&self) -> &str {
        "We will try to install the Orfeo text search app and its dependencies."
    }

    fn execute(&self, ctx: &mut Context<'_>) -> Result<bool> {
        let updated = git::sync(ctx, SEARCH_REPO, SEARCH_DIR)?;
        if !updated && !ctx.solr_password_changed {
            ctx.console.say(SKIP_RAKE)?;
            ctx.workdir.up();
            return Ok(true);
        }

        ctx.console.confirm_with("Solr index will be reset!", |c| {
            c.say("Changes in the code or settings require that the Solr index be recreated.")?;
            c.say("This means that ALL INDEXED DATA WILL BE REMOVED. You will need to index")?;
            c.say("everything again afterwards. If you do not want to clear the index at this")?;
            c.say("time, quit now (type q).")
        })?;

        ctx.console.say(
            "If the production search app is deployed in a non-root directory (such as /search),",
        )?;
        ctx.console
            .say("it is needed for asset path setup. Otherwise leave this blank.")?;
        if ctx.ask("URL path to text search app (if not root)", SettingKey::SearchRoot)? {
            let path = ctx.root().join(SETTINGS_FILE);
            write_settings(&path, &ctx.settings)?;
            info!(path = %path.display(), "search root saved");
        }

        let root_arg = ctx
            .settings
            .get(SettingKey::SearchRoot)
            .map(|root| format!(" ORFEO_SEARCH_ROOT={root}"))
            .unwrap_or_default();
        let password = ctx
            .settings
            .get(SettingKey::SolrPassword)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("no Solr password configured"))?;

        ctx.command("bundle install", Some("Ensure dependencies are installed"))?;
        ctx.command(
            "bundle exec rake db:migrate jetty:stop jetty:clean",
            Some("Set up the search app"),
        )?;
        ctx.command(
            "bundle exec rake jetty:start jetty:stop",
            Some("Start and stop Jetty (to refresh webapp directory)"),
        )?;
        ctx.command(
            "bundle exec rake db:migrate RAILS_ENV=production",
            Some("Perform migrations for production"),
        )?;
        ctx.command(
            &format!("bundle exec rake assets:precompile RAILS_ENV=production{root_arg}"),
            Some("Precompile assets for production"),
        )?;
        ctx.command(
            &format!("bundle exec rake orfeo:update password={password}"),
            Some("Set up the metadata model and authentication"),
        )?;
        ctx.command("bundle exec rake jetty:start", Some("Restart Jetty"))?;
        ctx.command(
            "touch tmp/restart.txt",
            Some("Tell Passenger to reload the Ruby app"),
        )?;

        ctx.workdir.up();
        Ok(true)
    }
}
