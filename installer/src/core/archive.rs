//! Naming rules for the ANNIS service distribution archive.

use std::path::PathBuf;

pub const ARCHIVE_EXTENSION: &str = ".tar.gz";
pub const DISTRIBUTION_SUFFIX: &str = "-distribution.tar.gz";

/// Directory an archive unpacks into: its file name without the distribution suffix.
pub fn unpacked_dir_name(archive_file_name: &str) -> &str {
    archive_file_name
        .strip_suffix(DISTRIBUTION_SUFFIX)
        .unwrap_or(archive_file_name)
}

pub fn is_archive(file_name: &str) -> bool {
    file_name.ends_with(ARCHIVE_EXTENSION)
}

/// Exactly one candidate is acceptable; otherwise returns how many were found.
pub fn single_archive(mut candidates: Vec<PathBuf>) -> Result<PathBuf, usize> {
    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        n => Err(n),
    }
}
