//! Demo-only settings, read from the `log` section of `signup.json`.

use std::path::Path;

use serde::Deserialize;
use simplelog::LevelFilter;

/// Log file naming, retention and level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Name of the log file written by the running demo.
    pub file_name: String,
    /// Archived logs kept after rotation.
    pub keep: usize,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file_name: "latest.log".to_string(),
            keep: 25,
            level: "debug".to_string(),
        }
    }
}

impl LogSettings {
    /// Parsed level; unknown names fall back to debug.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::Debug)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DemoSettings {
    log: LogSettings,
}

/// Read the log section of the config file. Missing or unreadable files
/// give the defaults; the form section is loaded separately.
pub fn load_log_settings(path: Option<&Path>) -> LogSettings {
    path.and_then(|p| std::fs::read_to_string(p).ok())
        .and_then(|json| serde_json::from_str::<DemoSettings>(&json).ok())
        .map(|s| s.log)
        .unwrap_or_default()
}
