// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::warn;

use super::defaults::*;
use super::{ANALYSIS_DIR_ENV, CONFIG_ENV};
use crate::consts::DEFAULT_CONFIG_FILE;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_paths")]
    pub paths: Paths,
    #[serde(default = "default_logging")]
    pub logging: Logging,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Paths {
    #[serde(default = "default_analysis_dir")]
    pub analysis_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Logging {
    /// `tracing-subscriber` EnvFilter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: default_paths(),
            logging: default_logging(),
        }
    }
}

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Some(dir) = std::env::var_os(ANALYSIS_DIR_ENV).filter(|d| !d.is_empty()) {
            self.paths.analysis_dir = PathBuf::from(dir);
        }
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Global config, resolved once on first use
pub fn load() -> &'static Config {
    CONFIG.get_or_init(resolve)
}

/// Read the config file named by the environment (or the default file),
/// fall back to built-in defaults, then apply env overrides. Not cached.
pub fn resolve() -> Config {
    let config_path =
        std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config_path = Path::new(&config_path);

    let mut conf = if config_path.exists() {
        load_from(config_path).unwrap_or_else(|e| {
            warn!("{e}, using built-in defaults");
            Config::default()
        })
    } else {
        Config::default()
    };

    conf.apply_env_overrides();
    conf
}

/// Parse one TOML file, without env overrides.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Toml {
        path: path.to_path_buf(),
        source,
    })
}
