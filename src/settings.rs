use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Category map file; the built-in lists are used when unset.
    #[serde(default)]
    pub categories_path: Option<String>,
    /// Skip unparsable rows instead of failing the load.
    #[serde(default)]
    pub lenient: bool,
}

pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("budgetcheck")
}

pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn default_categories_path() -> PathBuf {
    config_dir().join("categories.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// Missing or unreadable settings fall back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }
    let content = std::fs::read_to_string(path).unwrap_or_default();
    serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!("ignoring unreadable settings at {}: {e}", path.display());
        Settings::default()
    })
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    save_settings_to(settings, &settings_path())
}

pub fn save_settings_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| BudgetError::Settings(e.to_string()))?;
    std::fs::write(path, format!("{json}\n"))?;
    tracing::info!("wrote settings to {}", path.display());
    Ok(())
}

pub fn shellexpand_path(path: &str) -> String {
    if path.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
