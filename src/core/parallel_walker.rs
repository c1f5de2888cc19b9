//! Parallel directory walking functionality
//!
//! Discovery is shared with the sequential walker; the per-package work
//! (load, analyse, render, write) fans out over rayon.

use crate::core::generator::DocGenerator;
use crate::core::parallel::{build_pool, parallel_process_with_progress, ProgressUpdate};
use crate::core::walker::{discover_package_dirs, record_discovery};
use crate::error::{handle_error, Result};
use crate::models::{analysis::BatchReport, config::Settings};
use crate::parsers::{DeclarationLoader, GoLoader};
use std::time::Instant;

/// Parallel walker documenting packages concurrently
pub struct ParallelWalker<L: DeclarationLoader = GoLoader> {
    settings: Settings,
    generator: DocGenerator<L>,
}

impl ParallelWalker<GoLoader> {
    /// Create a new parallel walker with the given settings
    pub fn new(settings: Settings) -> Self {
        let generator = DocGenerator::from_settings(&settings);
        Self::with_generator(settings, generator)
    }
}

impl<L: DeclarationLoader> ParallelWalker<L> {
    pub fn with_generator(settings: Settings, generator: DocGenerator<L>) -> Self {
        Self { settings, generator }
    }

    /// Document every discovered package using parallel processing
    pub fn run(&self) -> Result<BatchReport> {
        self.run_with_progress(|_| {})
    }

    /// Document every discovered package, reporting each completion
    pub fn run_with_progress<F>(&self, progress_fn: F) -> Result<BatchReport>
    where
        F: Fn(ProgressUpdate) + Send + Sync,
    {
        let start_time = Instant::now();
        let mut report = BatchReport::new();

        progress_fn(ProgressUpdate::new(
            0,
            0,
            format!("Scanning directory: {}", self.settings.scan_path.display()),
        ));
        let discovery = discover_package_dirs(&self.settings)?;
        record_discovery(&mut report, &discovery);

        let process = || {
            parallel_process_with_progress(
                &discovery.dirs,
                |dir| (self.generator.generate(dir), dir.display().to_string()),
                &progress_fn,
            )
        };

        let outcomes = match build_pool(self.settings.jobs)? {
            Some(pool) => {
                log::debug!("Using a pool of {} threads", pool.current_num_threads());
                pool.install(process)
            }
            None => process(),
        };

        for (dir, outcome) in discovery.dirs.iter().zip(outcomes) {
            match outcome {
                Ok(documented) => report.add_package(documented),
                Err(err) => {
                    report.add_error(dir.clone(), &err);
                    if let Some(critical) = handle_error(err) {
                        return Err(critical);
                    }
                }
            }
        }

        report.set_duration(start_time.elapsed());
        report.finalize();

        Ok(report)
    }

    /// Get the current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
