use std::path::{Path, PathBuf};

use hippo::application::deploy::MANIFEST_DIR;
use hippo::config::CONFIG_FILE_NAME;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `hippo.yaml`
/// - `deployment_files/`
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(CONFIG_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(MANIFEST_DIR).is_dir() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}

/// `-C` when given, otherwise discovered from the current directory
pub(crate) fn resolve_project_root(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(root) => Ok(root),
        None => Ok(discover_project_root(&std::env::current_dir()?)),
    }
}
