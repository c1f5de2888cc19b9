//! Core functionality: declaration extraction, package analysis and the
//! batch walkers that drive documentation generation

pub mod analyzer;
pub mod declarations;
pub mod doc_text;
pub mod examples;
pub mod fields;
pub mod generator;
pub mod parallel;
pub mod parallel_walker;
pub mod signature;
pub mod type_text;
pub mod walker;

pub use analyzer::{build_model, PackageAnalyser};
pub use doc_text::{is_exported, normalize_doc};
pub use examples::mine_examples;
pub use generator::DocGenerator;
pub use parallel_walker::ParallelWalker;
pub use signature::function_signature;
pub use type_text::type_to_string;
pub use walker::{discover_package_dirs, Walker};
