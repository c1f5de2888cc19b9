//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{DocError, Result};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(DocError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| DocError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| DocError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

fn config_error(path: &Path, message: impl std::fmt::Display) -> DocError {
    DocError::config_error(format!("{} in config file: {}", message, path.display()))
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(scan_path) = &settings.scan_path {
        if scan_path.as_os_str().is_empty() {
            return Err(config_error(path, "Invalid empty scan_path"));
        }
    }

    if let Some(output_dir) = &settings.output_dir {
        if output_dir.as_os_str().is_empty() {
            return Err(config_error(path, "Invalid empty output_dir"));
        }
    }

    if let Some(package) = &settings.package {
        if package.trim().is_empty() {
            return Err(config_error(path, "Invalid empty package"));
        }
    }

    if let Some(patterns) = &settings.exclude_patterns {
        for pattern in patterns {
            if pattern.is_empty() {
                return Err(config_error(path, "Empty exclude pattern"));
            }
            glob::Pattern::new(pattern)
                .map_err(|e| config_error(path, format!("Invalid exclude pattern '{}': {}", pattern, e)))?;
        }
    }

    if settings.max_depth == Some(0) {
        return Err(config_error(path, "Invalid max_depth 0 (must be at least 1)"));
    }

    if settings.jobs == Some(0) {
        return Err(config_error(path, "Invalid jobs 0 (must be at least 1)"));
    }

    if settings.watch_interval_secs == Some(0) {
        return Err(config_error(path, "Invalid watch_interval_secs 0 (must be at least 1)"));
    }

    Ok(())
}

/// Candidate configuration files, in lookup order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("gopherdoc").join("config.toml"));
    }

    locations
}

/// Load the first existing configuration file among `locations`
pub fn find_config_in(locations: &[PathBuf]) -> Result<Option<PartialSettings>> {
    match locations.iter().find(|path| path.is_file()) {
        Some(path) => {
            log::debug!("Using configuration file {}", path.display());
            parse_config_file(path).map(Some)
        }
        None => Ok(None),
    }
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    find_config_in(&default_config_locations())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(DocError::io_error)?;
    }

    fs::write(path, include_str!("default_config.toml")).map_err(DocError::io_error)?;

    Ok(())
}
