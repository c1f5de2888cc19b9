//! Command implementations

use super::Args;
use crate::config::{self, file::DEFAULT_CONFIG_FILE, CliArgs, FileConfig};
use crate::core::{ParallelWalker, Walker};
use crate::error::{try_with_recovery, DocError, ErrorSeverity, Result};
use crate::models::{
    analysis::BatchReport,
    config::{OutputFormat, Settings},
};
use crate::output::{
    create_progress_callback, create_writer, format_report_json, format_report_text,
    ProgressReporter,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Document packages under the configured directory
    Generate(Args),
    /// Initialize a default configuration file
    Init,
}

/// Process exit code for a severity (warnings do not fail the run)
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Warning => 0,
        ErrorSeverity::Error => 1,
        ErrorSeverity::Critical => 2,
    }
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }
        Command::Generate(args)
    }

    /// Execute the command, returning the report of the last batch
    pub fn execute(&self) -> Result<Option<BatchReport>> {
        match self {
            Command::Init => {
                init_config(&PathBuf::from(DEFAULT_CONFIG_FILE))?;
                Ok(None)
            }
            Command::Generate(args) => {
                self.validate()?;
                let settings = config::load_config(CliArgs::from(args))?;

                if !settings.quiet {
                    println!("{} v{} - Go package documentation", crate::NAME, crate::VERSION);
                    println!("Scanning path: {}", settings.scan_path.display());
                    println!("Output: {} ({})", settings.output_dir.display(), settings.output_format);
                    if settings.verbose {
                        println!("Settings: {:#?}", settings);
                    }
                }

                let mut report = run_batch(&settings)?;
                print_summary(&report, &settings)?;

                while settings.watch {
                    log::info!("Waiting {}s before regenerating", settings.watch_interval_secs);
                    std::thread::sleep(Duration::from_secs(settings.watch_interval_secs));
                    // A failed re-run keeps the previous report and the loop alive
                    if let Some(next) = try_with_recovery(|| run_batch(&settings))? {
                        report = next;
                        print_summary(&report, &settings)?;
                    }
                }

                Ok(Some(report))
            }
        }
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        match self {
            Command::Generate(args) => {
                if let Some(path) = &args.path {
                    if !path.exists() {
                        return Err(DocError::invalid_path(path));
                    }
                }

                if let Some(config_path) = &args.config {
                    if !config_path.exists() {
                        return Err(DocError::ConfigNotFound {
                            path: config_path.clone(),
                        });
                    }
                }

                Ok(())
            }
            Command::Init => Ok(()),
        }
    }

    /// Run the command and map the outcome to a process exit code
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(Some(report)) => report.worst_severity().map(exit_code).unwrap_or(0),
            Ok(None) => 0,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                exit_code(err.severity())
            }
        }
    }
}

/// Write a default configuration file unless one already exists
pub fn init_config(path: &Path) -> Result<bool> {
    if path.exists() {
        println!("Configuration file already exists at: {}", path.display());
        println!("To overwrite it, delete the file first and run this command again.");
        return Ok(false);
    }

    FileConfig::with_path(path).create_default()?;

    println!("Created default configuration file at: {}", path.display());
    println!("\nExample configuration options:");
    println!("  - scan_path: Directory to scan for Go packages");
    println!("  - output_dir: Where one document per package is written");
    println!("  - output_format: markdown or json");
    println!("  - include_private: Show unexported identifiers");
    println!("  - exclude_patterns: Patterns for directories to skip");

    Ok(true)
}

/// Run one documentation batch with the walker the settings ask for
pub fn run_batch(settings: &Settings) -> Result<BatchReport> {
    let show_progress = !settings.quiet && settings.show_progress;
    let reporter = Arc::new(if show_progress {
        ProgressReporter::new(settings.quiet, settings.verbose)
    } else {
        ProgressReporter::hidden(settings.verbose)
    });
    reporter.start(0, &format!("Scanning {}", settings.scan_path.display()));

    let report = if settings.parallel {
        log::debug!(
            "Documenting in parallel with {} threads",
            settings.jobs.unwrap_or_else(num_cpus::get)
        );
        ParallelWalker::new(settings.clone()).run_with_progress(create_progress_callback(reporter.clone()))
    } else {
        Walker::new(settings.clone()).run_with_progress(create_progress_callback(reporter.clone()))
    };

    match &report {
        Ok(report) => reporter.finish(&format!("Documented {} packages", report.packages.len())),
        Err(err) => reporter.finish(&format!("Aborted: {}", err)),
    }

    report
}

fn print_summary(report: &BatchReport, settings: &Settings) -> Result<()> {
    if settings.quiet {
        for error in report.errors.iter().filter(|e| e.severity != ErrorSeverity::Warning) {
            eprintln!("{}: {}: {}", error.severity, error.path.display(), error.error);
        }
        return Ok(());
    }

    let summary = match settings.output_format {
        OutputFormat::Json => format_report_json(report)?,
        OutputFormat::Markdown => format_report_text(report, settings.use_colors, settings.verbose),
    };
    create_writer(None::<&Path>).write(&format!("{}\n", summary))
}
