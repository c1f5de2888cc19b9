//! Per-directory documentation pipeline: analyse, enhance, render, write

use crate::core::analyzer::PackageAnalyser;
use crate::enhance::{enhance_package, Enhancer};
use crate::error::{DocError, Result};
use crate::models::analysis::DocumentedPackage;
use crate::models::config::Settings;
use crate::output::{create_renderer, FileWriter, OutputWriter, Renderer};
use crate::parsers::{DeclarationLoader, GoLoader};
use std::path::{Path, PathBuf};

type SharedEnhancer = Box<dyn Enhancer + Send + Sync>;

/// Documents one package directory at a time
pub struct DocGenerator<L: DeclarationLoader = GoLoader> {
    analyser: PackageAnalyser<L>,
    renderer: Box<dyn Renderer>,
    output_dir: PathBuf,
    enhancer: Option<SharedEnhancer>,
    generate_examples: bool,
}

impl DocGenerator<GoLoader> {
    /// Generator configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            PackageAnalyser::go(settings.include_test_files),
            create_renderer(settings.output_format, settings.include_private),
            settings.output_dir.clone(),
        )
    }
}

impl<L: DeclarationLoader> DocGenerator<L> {
    pub fn new(analyser: PackageAnalyser<L>, renderer: Box<dyn Renderer>, output_dir: PathBuf) -> Self {
        Self {
            analyser,
            renderer,
            output_dir,
            enhancer: None,
            generate_examples: false,
        }
    }

    /// Run an enhancer over each model before rendering
    pub fn with_enhancer(mut self, enhancer: SharedEnhancer, generate_examples: bool) -> Self {
        self.enhancer = Some(enhancer);
        self.generate_examples = generate_examples;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Where the document for package `name` is written
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", name, self.renderer.extension()))
    }

    /// Document the package in `dir`
    pub fn generate(&self, dir: &Path) -> Result<DocumentedPackage> {
        let mut pkg = self.analyser.analyse_package(dir)?;

        if let Some(enhancer) = &self.enhancer {
            enhance_package(&mut pkg, enhancer.as_ref(), self.generate_examples);
        }

        let content = self
            .renderer
            .render(&pkg)
            .map_err(|e| match e {
                DocError::Render { .. } => e,
                other => DocError::render_error(&pkg.name, other.to_string()),
            })?;

        let output = self.output_path(&pkg.name);
        FileWriter::new(&output).write(&content)?;
        log::info!("Wrote {} for {}", output.display(), dir.display());

        Ok(DocumentedPackage::new(&pkg, output))
    }
}
