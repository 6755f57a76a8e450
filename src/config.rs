//! Configuration for taskpad
//!
//! Config never touches task semantics; it only tunes the ambient surface
//! (color, log location).

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ANSI color on the interactive surface
    pub color: bool,

    /// Directory for log files
    #[serde(rename = "log-dir")]
    pub log_dir: PathBuf,
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskpad")
        .join("logs")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain: explicit path, then
    /// `.taskpad.yml` in the cwd, then the user config dir, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".taskpad.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("taskpad").join("taskpad.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_enable_color() {
        let config = Config::default();
        assert!(config.color);
        assert!(config.log_dir.ends_with("taskpad/logs"));
    }

    #[test]
    fn load_from_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("taskpad.yml");
        fs::write(&path, "color: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.color);
        // unset fields fall back to defaults
        assert_eq!(config.log_dir, default_log_dir());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let path = PathBuf::from("/nonexistent/taskpad.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "color: [not a bool\n").unwrap();

        assert!(Config::load(Some(&path)).is_err());
    }
}
