//! Progress reporting functionality
//!
//! This module provides progress reporting for long-running operations
//! with support for quiet and verbose modes.

use crate::core::parallel::ProgressUpdate;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use parking_lot::Mutex;
use std::sync::Arc;

/// Progress reporter for batch documentation runs
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    main_progress_bar: Option<ProgressBar>,
    message_bar: Option<ProgressBar>,
    current_operation: Mutex<String>,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self::with_target(quiet, verbose, ProgressDrawTarget::stderr())
    }

    /// Create a reporter that draws nowhere, for tests and non-tty runs
    pub fn hidden(verbose: bool) -> Self {
        Self::with_target(false, verbose, ProgressDrawTarget::hidden())
    }

    fn with_target(quiet: bool, verbose: bool, target: ProgressDrawTarget) -> Self {
        let multi_progress = MultiProgress::with_draw_target(target);

        // Don't create progress bars in quiet mode
        let (main_progress_bar, message_bar) = if quiet {
            (None, None)
        } else {
            let main_bar = multi_progress.add(ProgressBar::new(0));
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            {
                main_bar.set_style(style.progress_chars("#>-"));
            }

            let msg_bar = multi_progress.add(ProgressBar::new(1));
            if let Ok(style) = ProgressStyle::default_bar().template("{wide_msg}") {
                msg_bar.set_style(style);
            }

            (Some(main_bar), Some(msg_bar))
        };

        Self {
            quiet,
            verbose,
            main_progress_bar,
            message_bar,
            current_operation: Mutex::new(String::new()),
        }
    }

    /// Start a new progress operation
    pub fn start(&self, total: usize, operation: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.main_progress_bar {
            bar.reset();
            bar.set_length(total as u64);
            bar.set_position(0);
            bar.set_message(operation.to_string());
        }

        if let Some(msg_bar) = &self.message_bar {
            msg_bar.set_message(operation.to_string());
        }

        *self.current_operation.lock() = operation.to_string();

        if self.verbose {
            log::info!("Starting: {}", operation);
        }
    }

    /// Update progress
    pub fn update(&self, current: usize, total: usize, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.main_progress_bar {
            bar.set_length(total as u64);
            bar.set_position(current as u64);

            if message != *self.current_operation.lock() {
                if let Some(msg_bar) = &self.message_bar {
                    msg_bar.set_message(message.to_string());
                }
            }
        }

        if self.verbose {
            log::info!("[{}/{}] {}", current, total, message);
        }
    }

    /// Update progress from a ProgressUpdate
    pub fn update_from(&self, progress: ProgressUpdate) {
        self.update(progress.current, progress.total, &progress.message);
    }

    /// Finish the progress operation
    pub fn finish(&self, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(bar) = &self.main_progress_bar {
            bar.finish_with_message(message.to_string());
        }

        if let Some(msg_bar) = &self.message_bar {
            msg_bar.finish_with_message(message.to_string());
        }

        if self.verbose {
            log::info!("Finished: {}", message);
        }
    }

    /// Current position and length of the main bar
    pub fn position(&self) -> Option<(u64, u64)> {
        self.main_progress_bar
            .as_ref()
            .map(|bar| (bar.position(), bar.length().unwrap_or(0)))
    }
}

/// Create a progress callback function that updates a ProgressReporter
pub fn create_progress_callback(reporter: Arc<ProgressReporter>) -> impl Fn(ProgressUpdate) + Send + Sync {
    move |progress: ProgressUpdate| {
        reporter.update_from(progress);
    }
}
