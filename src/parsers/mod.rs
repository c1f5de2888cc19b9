//! Source loading for Go package directories
//!
//! A [`DeclarationLoader`] turns one directory into the typed declaration
//! model from [`crate::models::syntax`]. The tree-sitter backed [`GoLoader`]
//! is the default; tests and callers may plug in their own.

pub mod comments;
pub mod go_loader;

pub use go_loader::GoLoader;

use crate::error::Result;
use crate::models::syntax::Declaration;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Everything a loader recovers from one package directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedPackage {
    pub name: String,
    /// Raw package doc comment text
    pub doc: String,
    /// Top-level declarations in file then source order
    pub declarations: Vec<Declaration>,
    pub imports: BTreeSet<String>,
    /// Files that contributed to the selected package
    pub files: Vec<PathBuf>,
}

/// Produces the declaration model for a package directory
pub trait DeclarationLoader: Send + Sync {
    /// Load the package in `dir`
    ///
    /// Fails with `NoPackageFound` when only test-suffixed packages (or none)
    /// are present, and with `Load` when a file cannot be read or parsed.
    fn load(&self, dir: &Path) -> Result<LoadedPackage>;
}
