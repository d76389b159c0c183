use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;

use installer::context::Context;
use installer::error::{Abort, exit_code_for};
use installer::exit_codes;
use installer::install::run_installer;
use installer::io::console::Console;
use installer::io::locate::SearchPath;
use installer::io::process::ProcessShell;
use installer::logging;
use installer::steps::orfeo_tasks;

#[derive(Parser)]
#[command(
    name = "orfeo-install",
    version,
    about = "Interactive installer for the Orfeo search portal"
)]
struct Cli {
    /// Directory to install into.
    #[arg(long, default_value = ".")]
    dir: PathBuf,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        let code = exit_code_for(&err);
        if !matches!(err.downcast_ref::<Abort>(), Some(Abort::Quit)) {
            eprintln!("{:#}", err);
        }
        std::process::exit(code);
    }
    std::process::exit(exit_codes::OK);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = cli
        .dir
        .canonicalize()
        .with_context(|| format!("resolve installation directory {}", cli.dir.display()))?;

    let shell = ProcessShell;
    let mut ctx = Context::new(Console::stdio(), &shell, SearchPath::from_env(), root);
    let mut tasks = orfeo_tasks();
    run_installer(&mut ctx, &mut tasks)
}
