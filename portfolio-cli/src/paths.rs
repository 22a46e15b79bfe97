//! Where the CLI keeps its files.
//!
//! XDG directories on Linux, the platform conventions elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "portfolio";
const APPLICATION: &str = "portfolio";

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept besides the latest one.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Stored preferences (the theme).
///
/// - Linux: `~/.local/share/portfolio/preferences.json`
/// - macOS: `~/Library/Application Support/dev.portfolio.portfolio/preferences.json`
pub fn preferences_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("preferences.json"))
}

/// Page configuration read when `--config` is not given.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
}

fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous run's log under its timestamp and prune old
/// archives. Call before opening the new log.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{stamp}.log")));
    }

    prune_logs(&cache, MAX_OLD_LOGS);
}

/// Delete the oldest archived logs in `dir` until at most `keep` remain.
fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    if archived.len() <= keep {
        return;
    }
    archived.sort_by_key(|entry| entry.metadata().and_then(|m| m.modified()).ok());
    for entry in &archived[..archived.len() - keep] {
        let _ = fs::remove_file(entry.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_keeps_latest_and_newest_archives() {
        let dir = std::env::temp_dir().join(format!("portfolio-logs-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        for name in ["a.log", "b.log", "c.log", LATEST_LOG, "notes.txt"] {
            fs::write(dir.join(name), name).unwrap();
        }

        prune_logs(&dir, 1);

        let mut left: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(left.len(), 3);
        assert!(left.contains(&LATEST_LOG.to_string()));
        assert!(left.contains(&"notes.txt".to_string()));

        fs::remove_dir_all(&dir).unwrap();
    }
}
