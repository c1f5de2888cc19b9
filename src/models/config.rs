//! Configuration-related data structures

use crate::error::DocError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for gopherdoc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Root directory to scan for Go packages
    pub scan_path: PathBuf,

    /// Document only this sub-directory of `scan_path`
    pub package: Option<String>,

    /// Directory receiving one documentation file per package
    pub output_dir: PathBuf,

    /// Output format (markdown, json)
    pub output_format: OutputFormat,

    /// Whether unexported items appear in rendered output
    pub include_private: bool,

    /// Whether `_test.go` files are parsed
    pub include_test_files: bool,

    /// Patterns to exclude from scanning
    pub exclude_patterns: Vec<String>,

    /// Maximum directory depth to traverse
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links during directory traversal
    pub follow_links: bool,

    /// Whether to use parallel processing
    pub parallel: bool,

    /// Worker threads for parallel processing
    pub jobs: Option<usize>,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in terminal output
    pub use_colors: bool,

    /// Whether to show progress bars
    pub show_progress: bool,

    /// Regenerate periodically until interrupted
    pub watch: bool,

    /// Seconds between regenerations in watch mode
    pub watch_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scan_path: PathBuf::from("."),
            package: None,
            output_dir: PathBuf::from("./docs"),
            output_format: OutputFormat::Markdown,
            include_private: false,
            include_test_files: false,
            exclude_patterns: vec![
                "vendor".to_string(),
                ".git".to_string(),
                "testdata".to_string(),
            ],
            max_depth: None,
            follow_links: false,
            parallel: true,
            jobs: None,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
            watch: false,
            watch_interval_secs: 30,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown reference page
    #[default]
    Markdown,
    /// JSON dump of the package model
    Json,
}

impl OutputFormat {
    /// File extension used for generated files
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(DocError::invalid_output_format(s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSettings {
    pub scan_path: Option<PathBuf>,
    pub package: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub include_private: Option<bool>,
    pub include_test_files: Option<bool>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: Option<bool>,
    pub parallel: Option<bool>,
    pub jobs: Option<usize>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
    pub watch: Option<bool>,
    pub watch_interval_secs: Option<u64>,
}

macro_rules! merge_fields {
    ($target:expr, $other:expr, $($field:ident),+ $(,)?) => {
        $(
            if $other.$field.is_some() {
                $target.$field = $other.$field;
            }
        )+
    };
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        merge_fields!(
            self,
            other,
            scan_path,
            package,
            output_dir,
            output_format,
            include_private,
            include_test_files,
            exclude_patterns,
            max_depth,
            follow_links,
            parallel,
            jobs,
            quiet,
            verbose,
            use_colors,
            show_progress,
            watch,
            watch_interval_secs,
        );
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let defaults = Settings::default();
        let this = self.clone();

        Settings {
            scan_path: this.scan_path.unwrap_or(defaults.scan_path),
            package: this.package.or(defaults.package),
            output_dir: this.output_dir.unwrap_or(defaults.output_dir),
            output_format: this.output_format.unwrap_or(defaults.output_format),
            include_private: this.include_private.unwrap_or(defaults.include_private),
            include_test_files: this.include_test_files.unwrap_or(defaults.include_test_files),
            exclude_patterns: this.exclude_patterns.unwrap_or(defaults.exclude_patterns),
            max_depth: this.max_depth.or(defaults.max_depth),
            follow_links: this.follow_links.unwrap_or(defaults.follow_links),
            parallel: this.parallel.unwrap_or(defaults.parallel),
            jobs: this.jobs.or(defaults.jobs),
            quiet: this.quiet.unwrap_or(defaults.quiet),
            verbose: this.verbose.unwrap_or(defaults.verbose),
            use_colors: this.use_colors.unwrap_or(defaults.use_colors),
            show_progress: this.show_progress.unwrap_or(defaults.show_progress),
            watch: this.watch.unwrap_or(defaults.watch),
            watch_interval_secs: this.watch_interval_secs.unwrap_or(defaults.watch_interval_secs),
        }
    }
}
