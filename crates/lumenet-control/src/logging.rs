//! Logging configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Where and how much to log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    pub level: String,
    pub console_output: bool,
    pub file_output: bool,
    pub log_dir: PathBuf,
    /// Log files kept in `log_dir`, including the current one
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console_output: true,
            file_output: false,
            log_dir: PathBuf::from("logs"),
            max_files: 10,
        }
    }
}

impl LogConfig {
    const FILE_PREFIX: &'static str = "lumenet-";
    const FILE_SUFFIX: &'static str = ".log";

    /// Parse `level`, falling back to INFO
    pub fn parse_level(&self) -> LevelFilter {
        self.level.parse().unwrap_or(LevelFilter::INFO)
    }

    pub fn ensure_log_directory(&self) -> io::Result<()> {
        fs::create_dir_all(&self.log_dir)
    }

    /// Log file for this process
    pub fn current_log_path(&self) -> PathBuf {
        self.log_dir.join(format!(
            "{}{}{}",
            Self::FILE_PREFIX,
            std::process::id(),
            Self::FILE_SUFFIX
        ))
    }

    /// Delete the oldest log files so that a new one keeps the total at
    /// `max_files`. Returns the number of files removed.
    pub fn cleanup_old_logs(&self) -> io::Result<usize> {
        let mut logs = Vec::new();
        for entry in fs::read_dir(&self.log_dir)? {
            let entry = entry?;
            if !is_log_file(&entry.path()) {
                continue;
            }
            let modified = entry.metadata()?.modified()?;
            logs.push((modified, entry.path()));
        }

        let keep = self.max_files.saturating_sub(1);
        if logs.len() <= keep {
            return Ok(0);
        }

        logs.sort();
        let excess = logs.len() - keep;
        for (_, path) in logs.iter().take(excess) {
            fs::remove_file(path)?;
        }

        Ok(excess)
    }
}

fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| {
            name.starts_with(LogConfig::FILE_PREFIX) && name.ends_with(LogConfig::FILE_SUFFIX)
        })
}
