//! Rendering and writing of generated documentation

mod formatters;
mod markdown;
mod progress;
mod writers;

pub use self::formatters::{format_report_json, format_report_text};
pub use self::markdown::MarkdownRenderer;
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::package::PackageInfo;

/// Turns a finished package model into document text
pub trait Renderer: Send + Sync {
    fn render(&self, pkg: &PackageInfo) -> Result<String>;

    /// File extension of the produced document, without the dot
    fn extension(&self) -> &'static str;
}

/// JSON dump of the package model
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, pkg: &PackageInfo) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(pkg)?
        } else {
            serde_json::to_string(pkg)?
        };
        Ok(json)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Create a renderer based on the output format
pub fn create_renderer(format: OutputFormat, include_private: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownRenderer::new(include_private)),
        OutputFormat::Json => Box::new(JsonRenderer::new(true)),
    }
}
