//! Command-line argument configuration source

use std::path::PathBuf;

use super::ConfigSource;
use crate::cli::args::Args;
use crate::error::Result;
use crate::models::config::{OutputFormat, PartialSettings};

/// Command-line argument configuration source
#[derive(Debug)]
pub struct CliConfig {
    args: CliArgs,
    name: String,
    priority: u8,
}

/// Command-line arguments relevant to settings
///
/// Flags only override lower layers when set; an absent flag leaves the
/// file or environment value in place.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub path: Option<PathBuf>,
    pub package: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub output_format: Option<OutputFormat>,
    pub include_private: bool,
    pub include_tests: bool,
    pub exclude: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub no_parallel: bool,
    pub jobs: Option<usize>,
    pub quiet: bool,
    pub verbose: bool,
    pub no_colors: bool,
    pub no_progress: bool,
    pub watch: bool,
    pub watch_interval: Option<u64>,
    pub config: Option<PathBuf>,
}

impl From<&Args> for CliArgs {
    fn from(args: &Args) -> Self {
        Self {
            path: args.path.clone(),
            package: args.package.clone(),
            output_dir: args.output_dir.clone(),
            output_format: args.format.map(OutputFormat::from),
            include_private: args.include_private,
            include_tests: args.include_tests,
            exclude: if args.exclude.is_empty() {
                None
            } else {
                Some(args.exclude.clone())
            },
            max_depth: args.max_depth,
            follow_links: args.follow_links,
            no_parallel: args.no_parallel,
            jobs: args.jobs,
            quiet: args.quiet,
            verbose: args.verbose,
            no_colors: args.no_colors,
            no_progress: args.no_progress,
            watch: args.watch,
            watch_interval: args.watch_interval,
            config: args.config.clone(),
        }
    }
}

impl CliConfig {
    /// Create a new CLI configuration source
    pub fn new(args: CliArgs) -> Self {
        Self {
            args,
            name: "command-line arguments".to_string(),
            priority: 30,
        }
    }

    /// Create a CLI configuration source from Args
    pub fn from_args(args: &Args) -> Self {
        Self::new(CliArgs::from(args))
    }

    /// Get the config file path if specified
    pub fn config_path(&self) -> Option<&PathBuf> {
        self.args.config.as_ref()
    }
}

fn set_if(flag: bool, value: bool) -> Option<bool> {
    flag.then_some(value)
}

impl ConfigSource for CliConfig {
    fn load(&self) -> Result<PartialSettings> {
        let args = &self.args;

        Ok(PartialSettings {
            scan_path: args.path.clone(),
            package: args.package.clone(),
            output_dir: args.output_dir.clone(),
            output_format: args.output_format,
            include_private: set_if(args.include_private, true),
            include_test_files: set_if(args.include_tests, true),
            exclude_patterns: args.exclude.clone(),
            max_depth: args.max_depth,
            follow_links: set_if(args.follow_links, true),
            parallel: set_if(args.no_parallel, false),
            jobs: args.jobs,
            quiet: set_if(args.quiet, true),
            verbose: set_if(args.verbose, true),
            use_colors: set_if(args.no_colors, false),
            show_progress: set_if(args.no_progress, false),
            watch: set_if(args.watch, true),
            watch_interval_secs: args.watch_interval,
        })
    }

    fn is_available(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}
