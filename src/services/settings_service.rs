use crate::models::settings::Settings;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "KickLookup";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Get the app config directory (works consistently in dev and release)
pub fn get_app_data_dir() -> Result<PathBuf> {
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join(APP_DIR_NAME));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join(APP_DIR_NAME));
    }

    // Last resort: next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return Ok(exe_dir.join("data"));
        }
    }

    Err(anyhow::anyhow!("Could not determine app data directory"))
}

pub fn default_settings_path() -> Result<PathBuf> {
    Ok(get_app_data_dir()?.join(SETTINGS_FILE_NAME))
}

/// Load settings from `path`, falling back to defaults when the file is missing.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!("[Settings] No settings at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;

    debug!("[Settings] Loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings, but never fail startup over a broken file.
pub fn load_settings_or_default(path: &Path) -> Settings {
    load_settings(path).unwrap_or_else(|e| {
        warn!("[Settings] {:#}; using defaults", e);
        Settings::default()
    })
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }
    }

    let json = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write settings file {}", path.display()))?;

    Ok(())
}
