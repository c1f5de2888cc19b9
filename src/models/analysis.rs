//! Batch result structures

use crate::error::{DocError, ErrorSeverity};
use crate::models::package::PackageInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One package whose documentation was written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentedPackage {
    pub name: String,
    pub dir: PathBuf,
    pub output: PathBuf,
    pub functions: usize,
    pub types: usize,
    pub exported: usize,
}

impl DocumentedPackage {
    pub fn new(pkg: &PackageInfo, output: PathBuf) -> Self {
        Self {
            name: pkg.name.clone(),
            dir: pkg.path.clone(),
            output,
            functions: pkg.functions.len(),
            types: pkg.types.len(),
            exported: pkg.exported_count(),
        }
    }
}

/// A directory that failed to document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    pub path: PathBuf,
    pub error: String,
    pub severity: ErrorSeverity,
}

/// Outcome of documenting every discovered directory once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub packages: Vec<DocumentedPackage>,
    /// Directories without a documentable package
    pub skipped: Vec<PathBuf>,
    pub errors: Vec<BatchError>,
    pub directories_scanned: usize,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchReport {
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
            skipped: Vec::new(),
            errors: Vec::new(),
            directories_scanned: 0,
            started_at: Utc::now(),
            duration: Duration::ZERO,
        }
    }

    pub fn add_package(&mut self, package: DocumentedPackage) {
        self.packages.push(package);
    }

    pub fn add_skipped(&mut self, dir: PathBuf) {
        self.skipped.push(dir);
    }

    /// Record a failure; skip-level errors go to `skipped` instead
    pub fn add_error(&mut self, path: PathBuf, error: &DocError) {
        if error.is_skip() {
            self.add_skipped(path);
            return;
        }

        self.errors.push(BatchError {
            path,
            error: error.user_message(),
            severity: error.severity(),
        });
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Sort every list by directory so parallel runs report like sequential ones
    pub fn finalize(&mut self) {
        self.packages.sort_by(|a, b| a.dir.cmp(&b.dir));
        self.skipped.sort();
        self.errors.sort_by(|a, b| a.path.cmp(&b.path));
    }

    /// Worst severity seen, if anything failed
    pub fn worst_severity(&self) -> Option<ErrorSeverity> {
        let mut worst = None;
        for error in &self.errors {
            worst = match (worst, error.severity) {
                (_, ErrorSeverity::Critical) => Some(ErrorSeverity::Critical),
                (Some(ErrorSeverity::Critical), _) => worst,
                (_, ErrorSeverity::Error) => Some(ErrorSeverity::Error),
                (None, severity) => Some(severity),
                (current, _) => current,
            };
        }
        worst
    }
}
