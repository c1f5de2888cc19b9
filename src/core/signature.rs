//! Signature text for functions and methods

use crate::core::fields::expand_names;
use crate::core::type_text::type_to_string;
use crate::models::syntax::{FieldGroup, FuncDecl, FuncType};

/// Rebuild `func (recv) Name(params) results` from a declaration
///
/// Output depends on the declaration alone, so two calls on equal input give
/// byte-identical text.
pub fn function_signature(decl: &FuncDecl) -> String {
    let mut signature = String::from("func ");

    if let Some(receiver) = &decl.receiver {
        signature.push('(');
        signature.push_str(&receiver_text(receiver));
        signature.push_str(") ");
    }

    signature.push_str(&decl.name);

    let empty = FuncType::default();
    let ty = decl.ty.as_ref().unwrap_or(&empty);

    signature.push('(');
    signature.push_str(&field_list(&ty.params));
    signature.push(')');

    if let Some(results) = results_text(ty.results.as_deref()) {
        signature.push(' ');
        signature.push_str(&results);
    }

    signature
}

/// `name type` entries joined by `, `, anonymous entries as the bare type
pub fn field_list(groups: &[FieldGroup]) -> String {
    expand_names(groups)
        .map(|(name, type_text)| {
            if name.is_empty() {
                type_text
            } else {
                format!("{} {}", name, type_text)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn receiver_text(receiver: &FieldGroup) -> String {
    let type_text = type_to_string(&receiver.ty);
    match receiver.names.first() {
        Some(name) if !name.is_empty() => format!("{} {}", name, type_text),
        _ => type_text,
    }
}

fn results_text(results: Option<&[FieldGroup]>) -> Option<String> {
    let results = results?;

    if let [single] = results {
        if single.names.is_empty() {
            return Some(type_to_string(&single.ty));
        }
    }

    Some(format!("({})", field_list(results)))
}
