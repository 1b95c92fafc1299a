use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory named files are saved to and loaded from.
    pub data_dir: PathBuf,

    // Logging
    pub log_dir: PathBuf,
    pub log_file: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            log_dir: PathBuf::from("logs"),
            log_file: "workforce.log".to_string(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            data_dir: lookup("WORKFORCE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            log_dir: lookup("WORKFORCE_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file: lookup("WORKFORCE_LOG_FILE").unwrap_or(defaults.log_file),
            log_level: lookup("WORKFORCE_LOG_LEVEL")
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
