//! Board configuration loading.
//!
//! Lookup order: the file named by `WORK_ORDER_BOARD_CONFIG`, then
//! `board.toml` in the platform config directory, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::BoardConfig;

pub const CONFIG_ENV_VAR: &str = "WORK_ORDER_BOARD_CONFIG";
pub const CONFIG_FILE_NAME: &str = "board.toml";
pub const DATA_FILE_NAME: &str = "work_orders.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "WorkOrderBoard", "WorkOrderBoard")
}

/// `board.toml` inside the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Board JSON inside the platform data directory, or the working directory
/// when no home directory can be determined.
pub fn default_data_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

/// Resolve and load the configuration.
pub fn load_config() -> Result<BoardConfig> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(anyhow!(
                "{} points at {}, which does not exist",
                CONFIG_ENV_VAR,
                path.display()
            ));
        }
        return load_config_from(&path);
    }

    match default_config_path() {
        Some(path) => load_config_from(&path),
        None => {
            log::warn!("No config directory available, using default board settings");
            Ok(BoardConfig::default())
        }
    }
}

/// Load configuration from `path`. A missing file yields the defaults;
/// malformed or invalid contents are an error.
pub fn load_config_from(path: &Path) -> Result<BoardConfig> {
    if !path.exists() {
        log::debug!("No config at {}, using defaults", path.display());
        return Ok(BoardConfig::default());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: BoardConfig = toml::from_str(&data)
        .with_context(|| format!("Failed to parse config at {}", path.display()))?;
    config
        .validate()
        .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;

    log::info!("Loaded board config from {}", path.display());
    Ok(config)
}
