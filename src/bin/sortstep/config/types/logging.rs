use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DEFAULT_LOG_ROTATE_KEEP, DEFAULT_LOG_ROTATE_SIZE};

/// Where and how much sortstep logs. `RUST_LOG` overrides `level`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file; defaults to `sortstep.log` in the data logs directory
    pub path: Option<PathBuf>,
    /// Bytes written before the file is rotated
    pub rotate_size: u64,
    /// Rotated files kept next to the live one
    pub rotate_keep: usize,
}

impl LoggingConfig {
    pub fn log_file(&self, default: &Path) -> PathBuf {
        self.path.clone().unwrap_or_else(|| default.to_path_buf())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            path: None,
            rotate_size: DEFAULT_LOG_ROTATE_SIZE,
            rotate_keep: DEFAULT_LOG_ROTATE_KEEP,
        }
    }
}
