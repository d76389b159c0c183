//! Repository sync: clone when absent, pull when present.
//!
//! Goes through the context's shell like every other command so the operator
//! sees each git invocation and its outcome.

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use tracing::{debug, instrument};

use crate::context::Context;

/// `git pull` prints `Already up to date.` (older versions hyphenate it).
static UP_TO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*Already up[- ]to[- ]date").expect("valid up-to-date pattern")
});

/// True when the first line of `git pull` output says nothing changed.
pub fn is_up_to_date(first_line: &str) -> bool {
    UP_TO_DATE.is_match(first_line)
}

/// Bring `dir` (relative to the current directory) up to date with `url`.
///
/// Clones when the directory is missing, otherwise pulls. Afterwards the
/// context's working directory is inside `dir`; the caller steps back out.
/// Returns whether anything changed; a fresh clone always counts as changed.
#[instrument(skip_all, fields(url = %url, dir = %dir))]
pub fn sync(ctx: &mut Context<'_>, url: &str, dir: &str) -> Result<bool> {
    if ctx.workdir.join(dir).is_dir() {
        ctx.workdir.enter(dir);
        let result = ctx.command(
            "git pull",
            Some(&format!("Update the existing git files in {dir}")),
        )?;
        let updated = !result.first_line().is_some_and(is_up_to_date);
        debug!(updated, "pulled existing repository");
        return Ok(updated);
    }

    ctx.command(
        &format!("git clone {url} {dir}"),
        Some(&format!("Download files from {url} to directory {dir}")),
    )?;
    ctx.workdir.enter(dir);
    debug!("cloned repository");
    Ok(true)
}
