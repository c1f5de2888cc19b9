//! gopherdoc - documentation models and pages for Go packages
//!
//! This library loads the declarations of a Go package directory, builds a
//! serializable model of its exported API (functions, methods, types,
//! fields, constants, variables and doc examples) and renders it as
//! Markdown or JSON, one document per package.

pub mod cli;
pub mod config;
pub mod core;
pub mod enhance;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use crate::core::{DocGenerator, PackageAnalyser, ParallelWalker, Walker};
pub use error::{handle_error, try_with_recovery, DocError, ErrorSeverity, OptionExt, Result, ResultExt};
pub use models::{
    analysis::{BatchReport, DocumentedPackage},
    config::{OutputFormat, Settings},
    package::{FunctionInfo, PackageInfo, TypeInfo},
};
pub use parsers::{DeclarationLoader, GoLoader};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
