//! Package analysis
//!
//! Turns one directory into a [`PackageInfo`] by running a declaration loader
//! and lowering every declaration it returns. Once the loader succeeds the
//! rest of the pass cannot fail.

use crate::core::declarations::{extract_constants, extract_function, extract_type, extract_variables};
use crate::core::doc_text::normalize_doc;
use crate::core::examples::mine_examples;
use crate::error::Result;
use crate::models::package::{ExampleInfo, FunctionInfo, PackageInfo};
use crate::models::syntax::{Declaration, FuncDecl};
use crate::parsers::{DeclarationLoader, GoLoader, LoadedPackage};
use std::path::Path;

/// Builds package models from directories
#[derive(Debug, Clone, Default)]
pub struct PackageAnalyser<L: DeclarationLoader = GoLoader> {
    loader: L,
}

impl PackageAnalyser<GoLoader> {
    /// Analyser backed by the tree-sitter Go loader
    pub fn go(include_test_files: bool) -> Self {
        Self::new(GoLoader::new(include_test_files))
    }
}

impl<L: DeclarationLoader> PackageAnalyser<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Load and analyse the package in `dir`
    ///
    /// Returns a complete model, or the loader's `NoPackageFound` or `Load`
    /// error.
    pub fn analyse_package(&self, dir: &Path) -> Result<PackageInfo> {
        let loaded = self.loader.load(dir)?;
        Ok(build_model(dir, loaded))
    }
}

/// Assemble the model for an already loaded package
///
/// Function order is free functions, then the methods of each type in type
/// declaration order, then methods whose receiver type is not declared here.
pub fn build_model(dir: &Path, loaded: LoadedPackage) -> PackageInfo {
    let mut pkg = PackageInfo::new(loaded.name, dir);
    pkg.description = normalize_doc(&loaded.doc);
    pkg.imports = loaded.imports;
    pkg.examples = package_examples(&loaded.doc, &pkg.description);

    let mut methods: Vec<(String, FuncDecl)> = Vec::new();

    for decl in loaded.declarations {
        match decl {
            Declaration::Function(func) => match func.receiver_type_name().map(str::to_string) {
                Some(receiver) => methods.push((receiver, func)),
                None if func.is_method() => methods.push((String::new(), func)),
                None => pkg.functions.push(extract_function(&func)),
            },
            Declaration::Type(ty) => pkg.types.push(extract_type(&ty)),
            Declaration::Const(group) => pkg.constants.extend(extract_constants(&group)),
            Declaration::Var(group) => pkg.variables.extend(extract_variables(&group)),
        }
    }

    let mut taken = vec![false; methods.len()];
    for ty in &mut pkg.types {
        for (i, (receiver, func)) in methods.iter().enumerate() {
            if taken[i] || *receiver != ty.name {
                continue;
            }
            taken[i] = true;
            ty.methods.push(func.name.clone());
            pkg.functions.push(method_info(func, receiver));
        }
    }

    let orphans: Vec<FunctionInfo> = methods
        .iter()
        .zip(&taken)
        .filter(|(_, taken)| !**taken)
        .map(|((receiver, func), _)| method_info(func, receiver))
        .collect();
    if !orphans.is_empty() {
        log::debug!(
            "{} methods in {} have receivers declared elsewhere",
            orphans.len(),
            pkg.name
        );
    }
    pkg.functions.extend(orphans);

    log::debug!(
        "Analysed package {}: {} functions, {} types, {} constants, {} variables",
        pkg.name,
        pkg.functions.len(),
        pkg.types.len(),
        pkg.constants.len(),
        pkg.variables.len()
    );

    pkg
}

fn method_info(func: &FuncDecl, receiver: &str) -> FunctionInfo {
    let mut info = extract_function(func);
    info.is_method = true;
    if !receiver.is_empty() {
        info.receiver = Some(receiver.to_string());
    }
    info
}

fn package_examples(doc: &str, description: &str) -> Vec<ExampleInfo> {
    mine_examples(doc)
        .enumerate()
        .map(|(i, code)| ExampleInfo {
            name: if i == 0 {
                "Example".to_string()
            } else {
                format!("Example {}", i + 1)
            },
            code,
            doc: description.to_string(),
        })
        .collect()
}
