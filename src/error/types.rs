//! Error types and definitions for gopherdoc
//!
//! Loading a directory can fail in exactly two analysis-specific ways
//! (`Load` and `NoPackageFound`). Everything else here belongs to the
//! surrounding configuration, traversal and output layers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for gopherdoc operations
#[derive(Debug, Error)]
pub enum DocError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// The loader could not read or parse a package directory
    #[error("Failed to load package in {path}: {message}")]
    Load {
        path: PathBuf,
        message: String,
    },

    /// Directory holds no analysable, non-test package
    #[error("No Go package found in {path}")]
    NoPackageFound {
        path: PathBuf,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
    },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied {
        path: PathBuf,
    },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath {
        path: PathBuf,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound {
        path: PathBuf,
    },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Unknown output format name
    #[error("Invalid output format: {format}")]
    InvalidOutputFormat {
        format: String,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Rendering a package model failed
    #[error("Render error for package {package}: {message}")]
    Render {
        package: String,
        message: String,
    },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal {
        path: PathBuf,
        message: String,
    },

    /// Generic analysis failure carrying context
    #[error("Analysis error: {message}")]
    Analysis {
        message: String,
    },

    /// Parallel execution error
    #[error("Parallel execution error: {message}")]
    ParallelExecution {
        message: String,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl DocError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A directory without a package is a skip, not a failure
            DocError::NoPackageFound { .. } => ErrorSeverity::Warning,
            DocError::PermissionDenied { .. } => ErrorSeverity::Warning,

            DocError::Config { .. } => ErrorSeverity::Critical,
            DocError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            DocError::ConfigRead { .. } => ErrorSeverity::Critical,
            DocError::ConfigParse { .. } => ErrorSeverity::Critical,
            DocError::InvalidOutputFormat { .. } => ErrorSeverity::Critical,
            DocError::StdoutWrite { .. } => ErrorSeverity::Critical,
            DocError::ParallelExecution { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Check if this error only means "nothing to document here"
    pub fn is_skip(&self) -> bool {
        matches!(self, DocError::NoPackageFound { .. })
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            DocError::PermissionDenied { path, .. } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            DocError::Io { source, .. } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            DocError::Load { path, message, .. } => {
                format!("Could not load Go sources in '{}': {}. Fix the source or exclude the directory.", path.display(), message)
            }
            DocError::NoPackageFound { path, .. } => {
                format!("No documentable Go package in '{}'. Skipping directory.", path.display())
            }
            DocError::InvalidPath { path, .. } => {
                format!("Invalid path: '{}'. Please provide a valid directory path.", path.display())
            }
            DocError::ConfigNotFound { path, .. } => {
                format!("Configuration file not found at '{}'. Create a config file or use command line options.", path.display())
            }
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        DocError::Io {
            source,
        }
    }

    /// Create a loader error for a directory
    pub fn load_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DocError::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a "no package" error for a directory
    pub fn no_package_found(path: impl Into<PathBuf>) -> Self {
        DocError::NoPackageFound {
            path: path.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        DocError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        DocError::PermissionDenied {
            path: path.into(),
        }
    }

    /// Create an unknown output format error
    pub fn invalid_output_format(format: impl Into<String>) -> Self {
        DocError::InvalidOutputFormat {
            format: format.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        DocError::InvalidPath {
            path: path.into(),
        }
    }

    /// Create a render error
    pub fn render_error(package: impl Into<String>, message: impl Into<String>) -> Self {
        DocError::Render {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DocError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for DocError {
    fn from(err: std::io::Error) -> Self {
        DocError::io_error(err)
    }
}

impl From<glob::PatternError> for DocError {
    fn from(err: glob::PatternError) -> Self {
        DocError::GlobPattern {
            source: err,
        }
    }
}

impl From<serde_json::Error> for DocError {
    fn from(err: serde_json::Error) -> Self {
        DocError::JsonSerialize {
            source: err,
        }
    }
}

/// Result type alias for gopherdoc operations
pub type Result<T> = std::result::Result<T, DocError>;
