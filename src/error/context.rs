//! Error context utilities for gopherdoc
//!
//! Helpers for attaching context to foreign errors and for deciding, by
//! severity, whether a failure stops the run or is only reported.

use std::path::Path;
use crate::error::{DocError, ErrorSeverity, Result};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;

    /// Add file context to an error
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| DocError::Analysis {
            message: format!("{}: {}", context(), err),
        })
    }

    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| {
            let err_ref: &(dyn std::error::Error + 'static) = &err;
            if let Some(io_err) = err_ref.downcast_ref::<std::io::Error>() {
                if io_err.kind() == std::io::ErrorKind::PermissionDenied {
                    return DocError::permission_denied(path.as_ref());
                }
            }

            DocError::directory_traversal_error(path.as_ref(), err.to_string())
        })
    }
}

/// Handle an error based on its severity
///
/// - Warning: Log the error and return None
/// - Error: Log the error and return None
/// - Critical: Log the error and return Some(error)
pub fn handle_error(err: DocError) -> Option<DocError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            log::warn!("{}", message);
            None
        }
        ErrorSeverity::Error => {
            log::error!("{}", message);
            None
        }
        ErrorSeverity::Critical => {
            log::error!("critical: {}", message);
            Some(err)
        }
    }
}

/// Try to run a function and handle any errors based on their severity
///
/// Returns Ok(Some(T)) if the function succeeds, Ok(None) for a logged
/// non-critical failure, and Err for a critical one.
pub fn try_with_recovery<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(err) => match handle_error(err) {
            Some(critical_err) => Err(critical_err),
            None => Ok(None),
        },
    }
}

/// Extension trait for Option to convert to Result with a custom error
pub trait OptionExt<T> {
    /// Convert Option to Result with a custom error
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> DocError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_error<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> DocError,
    {
        self.ok_or_else(err_fn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_with_context() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));

        let with_context = result.with_context(|| "Failed to read config");

        match with_context {
            Err(DocError::Analysis { message, .. }) => {
                assert!(message.contains("Failed to read config"));
                assert!(message.contains("file not found"));
            }
            other => panic!("Expected Analysis error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_file_context() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::NotFound, "file not found"));

        match result.with_file_context("test/path") {
            Err(DocError::DirectoryTraversal { path, .. }) => {
                assert_eq!(path.to_string_lossy(), "test/path");
            }
            other => panic!("Expected DirectoryTraversal error, got {:?}", other),
        }
    }

    #[test]
    fn test_with_file_context_permission_denied() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));

        match result.with_file_context("test/path") {
            Err(DocError::PermissionDenied { path, .. }) => {
                assert_eq!(path.to_string_lossy(), "test/path");
            }
            other => panic!("Expected PermissionDenied error, got {:?}", other),
        }
    }

    #[test]
    fn test_try_with_recovery_swallows_skips() {
        let recovered: Result<Option<()>> =
            try_with_recovery(|| Err(DocError::no_package_found("pkg")));
        assert!(matches!(recovered, Ok(None)));

        let critical: Result<Option<()>> =
            try_with_recovery(|| Err(DocError::config_error("bad")));
        assert!(critical.is_err());
    }

    #[test]
    fn test_option_ext() {
        let none: Option<i32> = None;
        let result = none.ok_or_error(|| DocError::config_error("Missing value"));

        if let Err(DocError::Config { message, .. }) = result {
            assert_eq!(message, "Missing value");
        } else {
            panic!("Expected Config error");
        }

        let some = Some(42);
        let result = some.ok_or_error(|| DocError::config_error("Missing value"));
        assert_eq!(result.unwrap(), 42);
    }
}
