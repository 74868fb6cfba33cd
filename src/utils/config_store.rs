//! ConfigStore - Local Configuration Storage
//!
//! The shell config lives in `<config dir>/app-shell/shell.toml`. A missing
//! file is not an error: the defaults are used instead.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};
use crate::domain::config::ShellConfig;
use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_DIR_NAME).ok_or_else(|| Error::Invalid {
        message: "could not determine home directory".to_string(),
    })
}

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.config_dir().to_path_buf();
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Get the directory for rolling log files, creating it if needed
pub fn log_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_local_dir().join("logs");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Path of the default config file
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the config from the default location
pub fn load_config() -> Result<ShellConfig> {
    load_config_from(&config_path()?)
}

/// Save the config to the default location
pub fn save_config(config: &ShellConfig) -> Result<()> {
    save_config_to(&config_path()?, config)
}

/// Load and validate a TOML config file
pub fn load_config_from(path: &Path) -> Result<ShellConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "No config file, using defaults");
        return Ok(ShellConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: ShellConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Validate and write a TOML config file
pub fn save_config_to(path: &Path, config: &ShellConfig) -> Result<()> {
    config.validate()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
