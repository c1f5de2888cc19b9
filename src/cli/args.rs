//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// gopherdoc - documentation generator for Go packages
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gopherdoc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate Markdown or JSON documentation for Go packages")]
#[command(long_about = "gopherdoc scans a directory tree for Go packages, extracts their declarations \
(functions, methods, types, fields, constants and variables) together with doc comments and \
embedded examples, and writes one reference document per package.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Document every package under the current directory into ./docs
    gopherdoc

    # Document a specific module
    gopherdoc --path ./my-module --output-dir ./site/api

    # Document a single package of a module
    gopherdoc --path ./my-module --package internal/store

Output Options:
    # Emit the JSON model instead of Markdown
    gopherdoc --format json

    # Include unexported identifiers
    gopherdoc --include-private

Walking Options:
    # Skip generated code and limit the depth
    gopherdoc --exclude 'gen*' --max-depth 3

    # Use four worker threads, or none at all
    gopherdoc --jobs 4
    gopherdoc --no-parallel

Configuration:
    # Use a specific configuration file
    gopherdoc --config ./gopherdoc.toml

    # Create a default configuration file
    gopherdoc --init

Watching:
    # Regenerate every 10 seconds until interrupted
    gopherdoc --watch --watch-interval 10
")]
pub struct Args {
    /// Root directory to scan
    #[arg(short, long, value_name = "PATH", help = "Directory to scan for Go packages (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Document a single package directory
    #[arg(long, value_name = "DIR", help = "Document only this sub-directory of the scan path (e.g., --package internal/store)")]
    pub package: Option<String>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", help = "Directory receiving one document per package (defaults to ./docs)")]
    pub output_dir: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(short, long, value_enum, help = "Document format: 'markdown' for reference pages, 'json' for the raw package model")]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .gopherdoc.toml in the current directory)")]
    pub config: Option<PathBuf>,

    /// Show unexported identifiers
    #[arg(long, help = "Include unexported functions, types, constants and variables in the output")]
    pub include_private: bool,

    /// Parse test files
    #[arg(long = "include-tests", help = "Parse _test.go files as part of each package")]
    pub include_tests: bool,

    /// Exclude directories matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns for directories to exclude (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Maximum depth for directory traversal
    #[arg(long, value_name = "DEPTH", help = "Maximum directory depth to traverse from the scan path")]
    pub max_depth: Option<usize>,

    /// Follow symbolic links during directory traversal
    #[arg(long, help = "Follow symbolic links during directory traversal")]
    pub follow_links: bool,

    /// Disable parallel processing
    #[arg(long, help = "Document packages one at a time")]
    pub no_parallel: bool,

    /// Worker threads
    #[arg(short, long, value_name = "N", help = "Number of worker threads for parallel processing (defaults to the number of CPUs)")]
    pub jobs: Option<usize>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (only errors are printed)")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show detailed progress, the merged settings and every generated file")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_colors: bool,

    /// Disable progress bars
    #[arg(long, help = "Disable progress bars (useful for CI environments or when redirecting output)")]
    pub no_progress: bool,

    /// Regenerate periodically
    #[arg(short, long, help = "Regenerate the documentation periodically until interrupted")]
    pub watch: bool,

    /// Seconds between regenerations
    #[arg(long, value_name = "SECONDS", help = "Seconds between regenerations in watch mode (defaults to 30)")]
    pub watch_interval: Option<u64>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.gopherdoc.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Markdown reference page
    #[value(alias = "md")]
    Markdown,
    /// JSON package model
    Json,
}

impl From<OutputFormat> for crate::models::config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => crate::models::config::OutputFormat::Markdown,
            OutputFormat::Json => crate::models::config::OutputFormat::Json,
        }
    }
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = Args::try_parse_from([
            "gopherdoc",
            "-p",
            "./module",
            "--package",
            "internal/store",
            "-o",
            "site",
            "-f",
            "json",
            "-e",
            "gen*",
            "-e",
            "mocks",
            "--include-private",
            "--include-tests",
            "-j",
            "3",
            "--watch",
            "--watch-interval",
            "5",
        ])
        .unwrap();

        assert_eq!(args.path, Some(PathBuf::from("./module")));
        assert_eq!(args.package.as_deref(), Some("internal/store"));
        assert_eq!(args.output_dir, Some(PathBuf::from("site")));
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(args.exclude, vec!["gen*", "mocks"]);
        assert!(args.include_private);
        assert!(args.include_tests);
        assert_eq!(args.jobs, Some(3));
        assert!(args.watch);
        assert_eq!(args.watch_interval, Some(5));
        assert!(!args.init);
    }

    #[test]
    fn test_defaults_leave_settings_untouched() {
        let args = Args::try_parse_from(["gopherdoc"]).unwrap();
        assert_eq!(args.format, None);
        assert!(args.exclude.is_empty());
        assert!(!args.no_parallel);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Args::try_parse_from(["gopherdoc", "--format", "html"]).is_err());
        let md = Args::try_parse_from(["gopherdoc", "--format", "md"]).unwrap();
        assert_eq!(md.format, Some(OutputFormat::Markdown));
    }
}
