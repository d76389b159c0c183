//! The Orfeo installation steps, in the order they run.

mod annis;
mod configure;
mod help_files;
mod importer;
mod prerequisites;
mod search;

pub use annis::InstallAnnis;
pub use configure::Configure;
pub use help_files::HelpFiles;
pub use importer::InstallImporter;
pub use prerequisites::{CheckBinaries, CheckRubyGems, CheckRubyVersion};
pub use search::InstallSearch;

use crate::task::TaskList;

pub const ANNIS_REPO: &str = "https://github.com/orfeo-treebank/ANNIS.git";
pub const METADATA_REPO: &str = "https://github.com/orfeo-treebank/orfeo-metadata.git";
pub const IMPORTER_REPO: &str = "https://github.com/orfeo-treebank/orfeo-importer";
pub const SEARCH_REPO: &str = "https://github.com/orfeo-treebank/orfeo-search";

pub const ANNIS_DIR: &str = "ANNIS";
pub const METADATA_DIR: &str = "orfeo-metadata";
pub const IMPORTER_DIR: &str = "orfeo-importer";
pub const SEARCH_DIR: &str = "orfeo-search";

/// Variable pointing at the unpacked ANNIS service, exported to later commands.
pub const ANNIS_HOME: &str = "ANNIS_HOME";

const SKIP_RAKE: &str = "Skipping rake since nothing has been updated";

/// Every installation step, in order.
pub fn orfeo_tasks() -> TaskList {
    let mut tasks = TaskList::new();
    tasks.push(CheckRubyVersion);
    tasks.push(CheckRubyGems);
    tasks.push(CheckBinaries);
    tasks.push(InstallAnnis);
    tasks.push(InstallImporter);
    tasks.push(Configure);
    tasks.push(InstallSearch);
    tasks.push(HelpFiles);
    tasks
}
