//! Directory walking functionality
//!
//! Discovery of Go package directories under the scan path, plus the
//! sequential batch driver that documents each of them in turn.

use crate::core::generator::DocGenerator;
use crate::core::parallel::ProgressUpdate;
use crate::error::{handle_error, DocError, Result, ResultExt};
use crate::models::{analysis::BatchReport, config::Settings};
use crate::parsers::{DeclarationLoader, GoLoader};
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into
pub const SKIPPED_DIRS: [&str; 3] = ["vendor", ".git", "testdata"];

const TEST_DIR_SUFFIX: &str = "_test";

/// Package directories found under a scan path
#[derive(Debug, Default)]
pub struct Discovery {
    /// Sorted directories holding at least one non-test `.go` file
    pub dirs: Vec<PathBuf>,
    /// Directories that could not be read, with the reason
    pub errors: Vec<(PathBuf, DocError)>,
    /// Directories visited; skipped and excluded ones are pruned before counting
    pub scanned: usize,
}

/// Compile exclude patterns into glob patterns
pub fn compile_exclude_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(DocError::from))
        .collect()
}

/// Check if a path matches any exclude pattern, by name or by full path
pub fn is_excluded(path: &Path, patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    patterns
        .iter()
        .any(|pattern| pattern.matches(&name) || pattern.matches(&path_str))
}

fn is_skipped_name(name: &str) -> bool {
    SKIPPED_DIRS.contains(&name) || name.ends_with(TEST_DIR_SUFFIX)
}

/// Whether `dir` directly contains a non-test `.go` file
pub fn has_go_sources(dir: &Path) -> Result<bool> {
    let entries = fs::read_dir(dir).with_file_context(dir)?;

    Ok(entries.filter_map(|entry| entry.ok()).any(|entry| {
        let name = entry.file_name();
        let name = name.to_string_lossy();
        name.ends_with(".go")
            && !name.ends_with("_test.go")
            && entry.file_type().map(|t| t.is_file()).unwrap_or(false)
    }))
}

/// Find every documentable package directory for the given settings
///
/// A missing scan path or an invalid exclude pattern fails the whole call;
/// unreadable directories are recorded and skipped.
pub fn discover_package_dirs(settings: &Settings) -> Result<Discovery> {
    if !settings.scan_path.exists() {
        return Err(DocError::invalid_path(&settings.scan_path));
    }

    if let Some(package) = &settings.package {
        let dir = settings.scan_path.join(package);
        if !dir.is_dir() {
            return Err(DocError::invalid_path(dir));
        }
        return Ok(Discovery {
            dirs: vec![dir],
            errors: Vec::new(),
            scanned: 1,
        });
    }

    let patterns = compile_exclude_patterns(&settings.exclude_patterns)?;
    let mut discovery = Discovery::default();

    let mut walker = WalkDir::new(&settings.scan_path)
        .follow_links(settings.follow_links)
        .sort_by_file_name();
    if let Some(max_depth) = settings.max_depth {
        walker = walker.max_depth(max_depth);
    }

    let entries = walker
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !should_skip(entry, &patterns));

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| settings.scan_path.clone());
                let error = match err.io_error().map(|e| e.kind()) {
                    Some(std::io::ErrorKind::PermissionDenied) => DocError::permission_denied(&path),
                    _ => DocError::directory_traversal_error(&path, err.to_string()),
                };
                log::warn!("{}", error);
                discovery.errors.push((path, error));
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }
        discovery.scanned += 1;

        match has_go_sources(entry.path()) {
            Ok(true) => discovery.dirs.push(entry.into_path()),
            Ok(false) => {}
            Err(err) => discovery.errors.push((entry.into_path(), err)),
        }
    }

    discovery.dirs.sort();
    log::debug!(
        "Discovered {} package directories in {} scanned under {}",
        discovery.dirs.len(),
        discovery.scanned,
        settings.scan_path.display()
    );

    Ok(discovery)
}

fn should_skip(entry: &DirEntry, patterns: &[Pattern]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    is_skipped_name(&name) || is_excluded(entry.path(), patterns)
}

/// Sequential walker documenting one directory after another
pub struct Walker<L: DeclarationLoader = GoLoader> {
    settings: Settings,
    generator: DocGenerator<L>,
}

impl Walker<GoLoader> {
    /// Create a new walker with the given settings
    pub fn new(settings: Settings) -> Self {
        let generator = DocGenerator::from_settings(&settings);
        Self::with_generator(settings, generator)
    }
}

impl<L: DeclarationLoader> Walker<L> {
    pub fn with_generator(settings: Settings, generator: DocGenerator<L>) -> Self {
        Self { settings, generator }
    }

    /// Document every discovered package
    pub fn run(&self) -> Result<BatchReport> {
        self.run_with_progress(|_| {})
    }

    /// Document every discovered package, reporting after each directory
    pub fn run_with_progress<F>(&self, progress_fn: F) -> Result<BatchReport>
    where
        F: Fn(ProgressUpdate),
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

        let total = discovery.dirs.len();
        for (i, dir) in discovery.dirs.into_iter().enumerate() {
            match self.generator.generate(&dir) {
                Ok(documented) => report.add_package(documented),
                Err(err) => {
                    report.add_error(dir.clone(), &err);
                    if let Some(critical) = handle_error(err) {
                        return Err(critical);
                    }
                }
            }
            progress_fn(ProgressUpdate::new(i + 1, total, dir.display().to_string()));
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

pub(crate) fn record_discovery(report: &mut BatchReport, discovery: &Discovery) {
    report.directories_scanned = discovery.scanned;
    for (path, err) in &discovery.errors {
        report.add_error(path.clone(), err);
    }
}
