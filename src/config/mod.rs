//! Configuration module for search-filter-rs
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use crate::error::{Result, SearchError};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "SEARCH_FILTER_SETTINGS_PATH";

/// Load settings, overlay the environment and validate them
///
/// An explicit path must exist. Otherwise the first file found among
/// [`SETTINGS_PATH_ENV`] and [`default_paths`] is used, falling back to
/// defaults (which then still need credentials from the environment).
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(SearchError::configuration(format!(
                    "settings file not found: {}",
                    path.display()
                )));
            }
            info!("Loading settings from: {}", path.display());
            Settings::from_file(path)?
        }
        None => discover()?,
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn discover() -> Result<Settings> {
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            return Settings::from_file(&path);
        }
    }

    for path in default_paths() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            return Settings::from_file(&path);
        }
    }

    info!("No settings file found, using defaults");
    Ok(Settings::default())
}

/// Candidate settings locations, in lookup order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("search-filter-rs/settings.yml"));
    }
    paths
}
