//! Per-name expansion of grouped fields, parameters and results

use crate::core::doc_text::normalize_doc;
use crate::core::type_text::type_to_string;
use crate::models::package::{FieldInfo, ParamInfo, ReturnInfo};
use crate::models::syntax::FieldGroup;

/// Struct fields in declaration order
///
/// `a, b int` gives two entries; a group without names is one embedded
/// field with an empty name. Tags are copied verbatim.
pub fn extract_fields(groups: &[FieldGroup]) -> Vec<FieldInfo> {
    let mut fields = Vec::new();

    for group in groups {
        let type_text = type_to_string(&group.ty);
        let tag = group.tag.clone().unwrap_or_default();
        let description = field_description(group);

        if group.names.is_empty() {
            fields.push(FieldInfo {
                name: String::new(),
                type_text,
                tag,
                description,
            });
        } else {
            for name in &group.names {
                fields.push(FieldInfo {
                    name: name.clone(),
                    type_text: type_text.clone(),
                    tag: tag.clone(),
                    description: description.clone(),
                });
            }
        }
    }

    fields
}

/// Parameters in declaration order, anonymous ones with an empty name
pub fn extract_parameters(groups: &[FieldGroup]) -> Vec<ParamInfo> {
    expand_names(groups)
        .map(|(name, type_text)| ParamInfo { name, type_text })
        .collect()
}

/// Results in declaration order
pub fn extract_returns(groups: Option<&[FieldGroup]>) -> Vec<ReturnInfo> {
    let Some(groups) = groups else {
        return Vec::new();
    };

    expand_names(groups)
        .map(|(_, type_text)| ReturnInfo {
            type_text,
            description: None,
        })
        .collect()
}

/// `(name, type text)` per declared name, one unnamed entry per anonymous group
pub(crate) fn expand_names(groups: &[FieldGroup]) -> impl Iterator<Item = (String, String)> + '_ {
    groups.iter().flat_map(|group| {
        let type_text = type_to_string(&group.ty);
        let names = if group.names.is_empty() {
            vec![String::new()]
        } else {
            group.names.clone()
        };
        names.into_iter().map(move |name| (name, type_text.clone()))
    })
}

fn field_description(group: &FieldGroup) -> String {
    let doc = normalize_doc(&group.doc);
    if doc.is_empty() {
        normalize_doc(&group.line_comment)
    } else {
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::syntax::TypeExpr;

    #[test]
    fn test_named_and_embedded_fields() {
        let groups = vec![
            FieldGroup::named("name", TypeExpr::ident("string")),
            FieldGroup::anonymous(TypeExpr::ident("Reader")),
        ];

        let fields = extract_fields(&groups);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "name");
        assert_eq!(fields[0].type_text, "string");
        assert_eq!(fields[1].name, "");
        assert_eq!(fields[1].type_text, "Reader");
        assert!(fields[1].is_embedded());
    }

    #[test]
    fn test_grouped_field_names_share_type_and_tag() {
        let groups = vec![FieldGroup::new(
            vec!["X".to_string(), "Y".to_string()],
            TypeExpr::ident("float64"),
        )
        .with_tag("`json:\"coord\"`")];

        let fields = extract_fields(&groups);

        assert_eq!(fields.len(), 2);
        assert!(fields.iter().all(|f| f.type_text == "float64"));
        assert!(fields.iter().all(|f| f.tag == "`json:\"coord\"`"));
        assert_eq!(fields[1].name, "Y");
    }

    #[test]
    fn test_field_description_prefers_doc_over_line_comment() {
        let mut documented = FieldGroup::named("Timeout", TypeExpr::qualified("time", "Duration"));
        documented.doc = "Timeout bounds each request.\n".to_string();
        documented.line_comment = "ignored".to_string();

        let mut commented = FieldGroup::named("retries", TypeExpr::ident("int"));
        commented.line_comment = "  how often to retry ".to_string();

        let fields = extract_fields(&[documented, commented]);

        assert_eq!(fields[0].description, "Timeout bounds each request.");
        assert_eq!(fields[1].description, "how often to retry");
    }

    #[test]
    fn test_parameters_expand_per_name() {
        let groups = vec![
            FieldGroup::new(vec!["a".to_string(), "b".to_string()], TypeExpr::ident("int")),
            FieldGroup::anonymous(TypeExpr::pointer(TypeExpr::ident("Options"))),
        ];

        let params = extract_parameters(&groups);

        assert_eq!(params.len(), 3);
        assert_eq!((params[0].name.as_str(), params[0].type_text.as_str()), ("a", "int"));
        assert_eq!((params[1].name.as_str(), params[1].type_text.as_str()), ("b", "int"));
        assert_eq!((params[2].name.as_str(), params[2].type_text.as_str()), ("", "*Options"));
    }

    #[test]
    fn test_returns() {
        assert!(extract_returns(None).is_empty());
        assert!(extract_returns(Some(&[])).is_empty());

        let groups = vec![
            FieldGroup::new(vec!["n".to_string(), "m".to_string()], TypeExpr::ident("int")),
            FieldGroup::named("err", TypeExpr::ident("error")),
        ];
        let returns = extract_returns(Some(&groups));

        assert_eq!(returns.len(), 3);
        assert_eq!(returns[2].type_text, "error");
        assert!(returns.iter().all(|r| r.description.is_none()));
    }
}
