//! Runtime settings read from the environment.
//!
//! `main` loads a `.env` file first, so every value here can also come from
//! there. Command-line flags override what is read.

use std::path::PathBuf;

pub const DEFAULT_PROGRESS_FILE: &str = "netfun-progress.json";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the score snapshot is kept (`NETFUN_PROGRESS_FILE`).
    pub progress_file: PathBuf,
    /// log4rs YAML file (`NETFUN_LOG_CONFIG`).
    pub log_config: PathBuf,
    /// Colored output (`NETFUN_COLOR`).
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            progress_file: PathBuf::from(DEFAULT_PROGRESS_FILE),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            color: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or empty keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let default = Config::default();
        let config = Config {
            progress_file: get("NETFUN_PROGRESS_FILE")
                .map(PathBuf::from)
                .unwrap_or(default.progress_file),
            log_config: get("NETFUN_LOG_CONFIG")
                .map(PathBuf::from)
                .unwrap_or(default.log_config),
            color: get("NETFUN_COLOR")
                .map(|v| parse_switch(&v))
                .unwrap_or(default.color),
        };
        log::debug!("config: {config:?}");
        config
    }
}

fn parse_switch(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
