//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "facet";
const APPLICATION: &str = "facet";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/facet` or `~/.cache/facet`
/// - macOS: `~/Library/Caches/dev.facet.facet`
/// - Windows: `C:\Users\<User>\AppData\Local\facet\facet\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the default log file path.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("facet.log"))
}
