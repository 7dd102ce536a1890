//! Runtime configuration resolved from CLI flags and environment.
//!
//! # Invariants
//! - `data_dir` and `log_dir` are absolute once resolved.
//! - The core never sees raw env values, only these resolved paths.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    /// Resolves `data_dir` against the working directory and fills defaults.
    pub fn resolve(data_dir: &Path, log_level: Option<&str>) -> Result<Self> {
        let data_dir = std::path::absolute(data_dir)
            .with_context(|| format!("cannot resolve data directory `{}`", data_dir.display()))?;
        let log_dir = data_dir.join(LOG_DIR_NAME);
        let log_level = log_level
            .map(str::to_string)
            .unwrap_or_else(|| todo_core::default_log_level().to_string());

        Ok(Self {
            data_dir,
            log_dir,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use std::path::Path;

    #[test]
    fn relative_data_dir_becomes_absolute() {
        let config = AppConfig::resolve(Path::new("data"), None).unwrap();
        assert!(config.data_dir.is_absolute());
        assert!(config.data_dir.ends_with("data"));
        assert_eq!(config.log_dir, config.data_dir.join("logs"));
        assert_eq!(config.log_level, todo_core::default_log_level());
    }

    #[test]
    fn explicit_log_level_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::resolve(dir.path(), Some("warn")).unwrap();
        assert_eq!(config.data_dir, dir.path());
        assert_eq!(config.log_level, "warn");
    }
}
