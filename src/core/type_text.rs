//! Canonical text for type expressions

use crate::models::syntax::TypeExpr;

/// Placeholder for shapes without a canonical rendering
pub const UNKNOWN_TYPE: &str = "unknown";

/// Placeholder used for every interface literal
pub const INTERFACE_TYPE: &str = "interface{}";

/// Render a type expression
///
/// Total and never empty: shapes outside the rendered set (channels,
/// function types, struct literals, instantiated generics, variadics) come
/// out as `unknown` so the loss is visible in the output.
pub fn type_to_string(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Ident(name) if !name.is_empty() => name.clone(),
        TypeExpr::Pointer(inner) => format!("*{}", type_to_string(inner)),
        TypeExpr::Array { elem, .. } => format!("[]{}", type_to_string(elem)),
        TypeExpr::Map { key, value } => {
            format!("map[{}]{}", type_to_string(key), type_to_string(value))
        }
        TypeExpr::Qualified { package, name } if !package.is_empty() && !name.is_empty() => {
            format!("{}.{}", package, name)
        }
        // Method sets are not rendered inline
        TypeExpr::Interface { .. } => INTERFACE_TYPE.to_string(),
        _ => UNKNOWN_TYPE.to_string(),
    }
}
