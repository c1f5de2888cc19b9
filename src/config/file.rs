//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{DocError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".gopherdoc.toml";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20,
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(DocError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
///
/// Reads `<PREFIX>_SCAN_PATH`, `_PACKAGE`, `_OUTPUT_DIR`, `_OUTPUT_FORMAT`,
/// `_INCLUDE_PRIVATE`, `_INCLUDE_TEST_FILES`, `_EXCLUDE` (comma separated),
/// `_MAX_DEPTH`, `_FOLLOW_LINKS`, `_PARALLEL`, `_JOBS`, `_QUIET`, `_VERBOSE`,
/// `_USE_COLORS`, `_SHOW_PROGRESS`, `_WATCH` and `_WATCH_INTERVAL`.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10,
        }
    }

    /// Set the priority for this configuration source
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key))
            .ok()
            .filter(|v| !v.trim().is_empty())
    }

    fn parsed<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        let raw = self.var(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring {}_{}: cannot parse '{}'", self.prefix, key, raw);
                None
            }
        }
    }

    fn flag(&self, key: &str) -> Option<bool> {
        let raw = self.var(key)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => {
                log::warn!("Ignoring {}_{}: expected a boolean, got '{}'", self.prefix, key, raw);
                None
            }
        }
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        Ok(PartialSettings {
            scan_path: self.var("SCAN_PATH").map(PathBuf::from),
            package: self.var("PACKAGE"),
            output_dir: self.var("OUTPUT_DIR").map(PathBuf::from),
            output_format: self.parsed("OUTPUT_FORMAT"),
            include_private: self.flag("INCLUDE_PRIVATE"),
            include_test_files: self.flag("INCLUDE_TEST_FILES"),
            exclude_patterns: self.var("EXCLUDE").map(|exclude| {
                exclude
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
            max_depth: self.parsed("MAX_DEPTH"),
            follow_links: self.flag("FOLLOW_LINKS"),
            parallel: self.flag("PARALLEL"),
            jobs: self.parsed("JOBS"),
            quiet: self.flag("QUIET"),
            verbose: self.flag("VERBOSE"),
            use_colors: self.flag("USE_COLORS"),
            show_progress: self.flag("SHOW_PROGRESS"),
            watch: self.flag("WATCH"),
            watch_interval_secs: self.parsed("WATCH_INTERVAL"),
        })
    }

    fn is_available(&self) -> bool {
        let prefix = format!("{}_", self.prefix);
        std::env::vars().any(|(key, _)| key.starts_with(&prefix))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
