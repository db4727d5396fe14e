//! Platform-specific directory paths and log file rotation.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::settings::LogSettings;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "signup";
const APPLICATION: &str = "signup-demo";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory holding the demo's logs.
///
/// - Linux: `$XDG_CACHE_HOME/signup-demo` or `~/.cache/signup-demo`
/// - macOS: `~/Library/Caches/dev.signup.signup-demo`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of `signup.json`, holding form and log settings.
///
/// - Linux: `$XDG_CONFIG_HOME/signup-demo/signup.json`
/// - macOS: `~/Library/Application Support/dev.signup.signup-demo/signup.json`
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("signup.json"))
}

/// The current log file and its timestamped archives in one directory.
///
/// Archives are named `<stem>-<YYYYmmdd_HHMMSS>.log`, so name order is
/// age order.
#[derive(Debug, Clone)]
pub struct LogFiles {
    dir: PathBuf,
    file_name: String,
    keep: usize,
}

impl LogFiles {
    pub fn new(dir: impl Into<PathBuf>, settings: &LogSettings) -> Self {
        Self {
            dir: dir.into(),
            file_name: settings.file_name.clone(),
            keep: settings.keep,
        }
    }

    /// Path the running demo writes to.
    pub fn current(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    fn stem(&self) -> &str {
        Path::new(&self.file_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("log")
    }

    /// Archive the current log under a timestamped name, then drop
    /// archives beyond the retention count.
    pub fn rotate(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let current = self.current();
        if current.exists() {
            let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            fs::rename(
                &current,
                self.dir.join(format!("{}-{}.log", self.stem(), timestamp)),
            )?;
        }
        self.prune()
    }

    /// Archived logs, oldest first.
    pub fn archives(&self) -> io::Result<Vec<PathBuf>> {
        let prefix = format!("{}-", self.stem());
        let mut archives: Vec<PathBuf> = fs::read_dir(&self.dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix) && n.ends_with(".log"))
            })
            .collect();
        archives.sort();
        Ok(archives)
    }

    fn prune(&self) -> io::Result<()> {
        let archives = self.archives()?;
        let excess = archives.len().saturating_sub(self.keep);
        for path in &archives[..excess] {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("signup-demo-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn settings(keep: usize) -> LogSettings {
        LogSettings {
            keep,
            ..LogSettings::default()
        }
    }

    #[test]
    fn test_rotate_archives_current_log() {
        let dir = scratch_dir("rotate");
        let logs = LogFiles::new(&dir, &settings(5));
        fs::write(logs.current(), "old run").unwrap();

        logs.rotate().unwrap();
        assert!(!logs.current().exists());
        let archives = logs.archives().unwrap();
        assert_eq!(archives.len(), 1);
        assert_eq!(fs::read_to_string(&archives[0]).unwrap(), "old run");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_rotate_keeps_newest_archives() {
        let dir = scratch_dir("prune");
        for stamp in ["20240101_000000", "20240102_000000", "20240103_000000"] {
            fs::write(dir.join(format!("latest-{stamp}.log")), stamp).unwrap();
        }
        fs::write(dir.join("other.log"), "unrelated").unwrap();

        let logs = LogFiles::new(&dir, &settings(2));
        logs.rotate().unwrap();

        let names: Vec<String> = logs
            .archives()
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_string))
            .collect();
        assert_eq!(names, vec!["latest-20240102_000000.log", "latest-20240103_000000.log"]);
        assert!(dir.join("other.log").exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
