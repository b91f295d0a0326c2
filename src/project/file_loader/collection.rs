//! Directory traversal for script files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::parsing::has_extension;
use crate::project::LoadError;

/// Extensions picked up when none are configured.
pub const SCRIPT_EXTENSIONS: &[&str] = &["vbs", "vba", "bas", "cls"];

/// Recursively collect script files under `dir`, sorted by path.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    collect_file_paths_with(dir, SCRIPT_EXTENSIONS)
}

/// Recursively collect files under `dir` whose extension is one of
/// `extensions` (case-insensitive), sorted by path.
pub fn collect_file_paths_with<S: AsRef<str>>(
    dir: &Path,
    extensions: &[S],
) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| LoadError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            paths.push(entry.into_path());
        }
    }

    tracing::debug!(dir = %dir.display(), files = paths.len(), "collected script files");
    Ok(paths)
}
