//! Optional rewriting of thin descriptions by an external text service
//!
//! An [`Enhancer`] is only asked about entries whose description is short,
//! and it can only replace descriptions or add examples where none exist.
//! Nothing already in the model is removed or reordered.

use crate::error::Result;
use crate::models::package::{ExampleInfo, FunctionInfo, PackageInfo, TypeInfo};

/// Package descriptions shorter than this (in bytes) may be replaced
pub const PACKAGE_DESCRIPTION_THRESHOLD: usize = 50;

/// Function and type descriptions shorter than this (in bytes) may be replaced
pub const ITEM_DESCRIPTION_THRESHOLD: usize = 20;

pub const GENERATED_EXAMPLE_NAME: &str = "Basic Usage";
pub const GENERATED_EXAMPLE_DOC: &str = "Basic usage example";

/// A source of generated documentation text
///
/// `Ok(None)` and empty strings both mean "no suggestion".
pub trait Enhancer {
    fn package_description(&self, pkg: &PackageInfo) -> Result<Option<String>>;
    fn function_description(&self, func: &FunctionInfo) -> Result<Option<String>>;
    fn type_description(&self, ty: &TypeInfo) -> Result<Option<String>>;
    fn package_example(&self, pkg: &PackageInfo) -> Result<Option<String>>;
    fn function_example(&self, func: &FunctionInfo, pkg: &PackageInfo) -> Result<Option<String>>;
}

/// Counts of what an enhancement pass changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnhanceStats {
    pub descriptions: usize,
    pub examples: usize,
    pub failures: usize,
}

/// Apply an enhancer to a finished model
pub fn enhance_package<E: Enhancer + ?Sized>(
    pkg: &mut PackageInfo,
    enhancer: &E,
    generate_examples: bool,
) -> EnhanceStats {
    let mut stats = EnhanceStats::default();

    if pkg.description.len() < PACKAGE_DESCRIPTION_THRESHOLD {
        if let Some(text) = suggestion(enhancer.package_description(pkg), &mut stats, &pkg.name) {
            pkg.description = text;
            stats.descriptions += 1;
        }
    }

    for i in 0..pkg.functions.len() {
        if pkg.functions[i].description.len() >= ITEM_DESCRIPTION_THRESHOLD {
            continue;
        }
        let answer = enhancer.function_description(&pkg.functions[i]);
        if let Some(text) = suggestion(answer, &mut stats, &pkg.functions[i].name) {
            pkg.functions[i].description = text;
            stats.descriptions += 1;
        }
    }

    for i in 0..pkg.types.len() {
        if pkg.types[i].description.len() >= ITEM_DESCRIPTION_THRESHOLD {
            continue;
        }
        let answer = enhancer.type_description(&pkg.types[i]);
        if let Some(text) = suggestion(answer, &mut stats, &pkg.types[i].name) {
            pkg.types[i].description = text;
            stats.descriptions += 1;
        }
    }

    if generate_examples {
        add_examples(pkg, enhancer, &mut stats);
    }

    log::info!(
        "Enhanced {}: {} descriptions, {} examples, {} failed requests",
        pkg.name,
        stats.descriptions,
        stats.examples,
        stats.failures
    );

    stats
}

fn add_examples<E: Enhancer + ?Sized>(pkg: &mut PackageInfo, enhancer: &E, stats: &mut EnhanceStats) {
    if pkg.examples.is_empty() {
        if let Some(code) = suggestion(enhancer.package_example(pkg), stats, &pkg.name) {
            pkg.examples.push(ExampleInfo {
                name: GENERATED_EXAMPLE_NAME.to_string(),
                code,
                doc: GENERATED_EXAMPLE_DOC.to_string(),
            });
            stats.examples += 1;
        }
    }

    for i in 0..pkg.functions.len() {
        let func = &pkg.functions[i];
        if !func.examples.is_empty() || !func.is_exported {
            continue;
        }
        let answer = enhancer.function_example(func, pkg);
        if let Some(code) = suggestion(answer, stats, &pkg.functions[i].name) {
            pkg.functions[i].examples.push(code);
            stats.examples += 1;
        }
    }
}

fn suggestion(answer: Result<Option<String>>, stats: &mut EnhanceStats, subject: &str) -> Option<String> {
    match answer {
        Ok(Some(text)) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Ok(None) => None,
        Err(err) => {
            log::warn!("Enhancement for {} failed: {}", subject, err);
            stats.failures += 1;
            None
        }
    }
}
