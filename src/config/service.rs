//! Configuration service for loading and caching application config.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::ConfigError;

use super::types::AppConfig;
use super::validation::validate_config;

/// Global config instance, set once at startup.
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("stackcalc"))
}

/// Path of the default config file, `~/.config/stackcalc/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    toml::from_str(&content).map_err(ConfigError::ParseFailed)
}

/// Load application config from the default location.
///
/// Returns `None` if the config file doesn't exist.
/// Logs warning and returns `None` if reading or parsing fails.
fn load_app_config() -> Option<AppConfig> {
    let config_path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!(%e, "Using default config");
            return None;
        }
    };

    if !config_path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", config_path);
        return None;
    }

    match read_config(&config_path) {
        Ok(config) => {
            tracing::info!("Loaded app config from {:?}", config_path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} at {:?}, using defaults", e, config_path);
            None
        }
    }
}

/// Initialize config (call once at startup).
///
/// An explicit path must exist and parse, and must be the first config
/// loaded; the default location falls back to defaults on any problem.
/// Validation warnings are logged either way.
pub fn init_config(explicit: Option<&Path>) -> Result<&'static AppConfig, ConfigError> {
    let loaded = match explicit {
        Some(path) => {
            let config = read_config(path)?;
            tracing::info!("Loaded app config from {:?}", path);
            config
        }
        None => load_app_config().unwrap_or_default(),
    };

    for warning in validate_config(&loaded) {
        tracing::warn!("Config validation: {} - {}", warning.field, warning.message);
    }

    if CONFIG.set(loaded).is_err() {
        if let Some(path) = explicit {
            tracing::warn!("Config already initialized, ignoring {:?}", path);
            return Err(ConfigError::AlreadyInitialized(path.to_path_buf()));
        }
        tracing::debug!("Config already initialized, keeping the first one");
    }
    Ok(config())
}

/// Get the global app config, loading it from the default location on first use.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| load_app_config().unwrap_or_default())
}
