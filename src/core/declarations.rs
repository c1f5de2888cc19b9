//! Lowering of single declarations into model entries

use crate::core::doc_text::{is_exported, normalize_doc};
use crate::core::examples::mine_examples;
use crate::core::fields::{extract_fields, extract_parameters, extract_returns};
use crate::core::signature::function_signature;
use crate::core::type_text::type_to_string;
use crate::models::package::{ConstantInfo, FunctionInfo, TypeInfo, TypeKind, VariableInfo};
use crate::models::syntax::{FuncDecl, TypeDecl, TypeExpr, ValueExpr, ValueGroup};

/// Placeholder for a value expression that is neither a literal nor a name
pub const OPAQUE_VALUE: &str = "...";

/// Build the model entry for a function or method
///
/// Signature, parameters and returns stay empty when the declaration carries
/// no function type.
pub fn extract_function(decl: &FuncDecl) -> FunctionInfo {
    let mut info = FunctionInfo {
        name: decl.name.clone(),
        description: normalize_doc(&decl.doc),
        examples: mine_examples(&decl.doc).collect(),
        is_exported: is_exported(&decl.name),
        is_method: decl.is_method(),
        receiver: decl.receiver_type_name().map(str::to_string),
        ..Default::default()
    };

    if let Some(ty) = &decl.ty {
        info.signature = function_signature(decl);
        info.parameters = extract_parameters(&ty.params);
        info.returns = extract_returns(ty.results.as_deref());
    }

    info
}

/// Build the model entry for a type; method names are attached by the caller
pub fn extract_type(decl: &TypeDecl) -> TypeInfo {
    let kind = type_kind(&decl.ty);
    let fields = match &decl.ty {
        TypeExpr::Struct { fields } => extract_fields(fields),
        _ => Vec::new(),
    };

    TypeInfo {
        name: decl.name.clone(),
        kind,
        description: normalize_doc(&decl.doc),
        fields,
        methods: Vec::new(),
        is_exported: is_exported(&decl.name),
    }
}

/// Classify the outer shape of a declared type
pub fn type_kind(expr: &TypeExpr) -> TypeKind {
    match expr {
        TypeExpr::Struct { .. } => TypeKind::Struct,
        TypeExpr::Interface { .. } => TypeKind::Interface,
        TypeExpr::Array { .. } => TypeKind::Array,
        TypeExpr::Map { .. } => TypeKind::Map,
        TypeExpr::Chan { .. } => TypeKind::Channel,
        TypeExpr::Func(_) => TypeKind::Function,
        _ => TypeKind::Alias,
    }
}

/// One entry per name across every spec of a `const` group
///
/// The name at position `i` takes the value at position `i` of its own spec
/// and nothing else; a missing position gives `None`.
pub fn extract_constants(group: &ValueGroup) -> Vec<ConstantInfo> {
    let description = normalize_doc(&group.doc);
    let mut constants = Vec::new();

    for spec in &group.specs {
        let type_text = spec.ty.as_ref().map(type_to_string).unwrap_or_default();

        for (i, name) in spec.names.iter().enumerate() {
            constants.push(ConstantInfo {
                name: name.clone(),
                type_text: type_text.clone(),
                value: spec.values.get(i).map(value_to_string),
                description: description.clone(),
                is_exported: is_exported(name),
            });
        }
    }

    constants
}

/// One entry per name across every spec of a `var` group
pub fn extract_variables(group: &ValueGroup) -> Vec<VariableInfo> {
    let description = normalize_doc(&group.doc);

    group
        .specs
        .iter()
        .flat_map(|spec| {
            let type_text = spec.ty.as_ref().map(type_to_string).unwrap_or_default();
            let description = description.clone();
            spec.names.iter().map(move |name| VariableInfo {
                name: name.clone(),
                type_text: type_text.clone(),
                description: description.clone(),
                is_exported: is_exported(name),
            })
        })
        .collect()
}

/// Literal text, identifier name, or `...` for anything else
pub fn value_to_string(value: &ValueExpr) -> String {
    match value {
        ValueExpr::Literal(text) | ValueExpr::Ident(text) => text.clone(),
        ValueExpr::Other(_) => OPAQUE_VALUE.to_string(),
    }
}
