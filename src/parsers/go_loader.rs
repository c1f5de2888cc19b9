//! Tree-sitter based loader for Go package directories

use crate::error::{DocError, OptionExt, Result};
use crate::models::syntax::{
    ChanDir, Declaration, FieldGroup, FuncDecl, FuncType, TypeDecl, TypeExpr, ValueExpr,
    ValueGroup, ValueSpec,
};
use crate::parsers::comments::{attach_comments, node_text};
use crate::parsers::{DeclarationLoader, LoadedPackage};
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

const GO_EXTENSION: &str = "go";
const TEST_FILE_SUFFIX: &str = "_test.go";
const TEST_PACKAGE_SUFFIX: &str = "_test";

/// Loads `.go` files of a single directory with tree-sitter-go
#[derive(Debug, Clone, Default)]
pub struct GoLoader {
    /// Parse `_test.go` files too
    pub include_test_files: bool,
}

/// What one file contributes before package selection
#[derive(Debug)]
struct FileUnit {
    path: PathBuf,
    package: String,
    doc: String,
    declarations: Vec<Declaration>,
    imports: Vec<String>,
}

impl GoLoader {
    pub fn new(include_test_files: bool) -> Self {
        Self { include_test_files }
    }

    /// Go source files of `dir` in file-name order
    pub fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| DocError::load_error(dir, e.to_string()))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_go_file(path, self.include_test_files))
            .collect();
        files.sort();

        Ok(files)
    }
}

impl DeclarationLoader for GoLoader {
    fn load(&self, dir: &Path) -> Result<LoadedPackage> {
        let files = self.source_files(dir)?;
        log::debug!("Loading {} Go files from {}", files.len(), dir.display());

        let mut units = Vec::with_capacity(files.len());
        for path in files {
            let source = fs::read_to_string(&path)
                .map_err(|e| DocError::load_error(&path, e.to_string()))?;
            units.push(parse_unit(&path, &source)?);
        }

        let selected = units
            .iter()
            .map(|u| u.package.as_str())
            .find(|name| !name.is_empty() && !name.ends_with(TEST_PACKAGE_SUFFIX))
            .map(str::to_string)
            .ok_or_error(|| DocError::no_package_found(dir))?;

        let mut package = LoadedPackage {
            name: selected.clone(),
            ..Default::default()
        };
        let mut docs = Vec::new();

        for unit in units.into_iter().filter(|u| u.package == selected) {
            if !unit.doc.is_empty() {
                docs.push(unit.doc);
            }
            package.declarations.extend(unit.declarations);
            package.imports.extend(unit.imports);
            package.files.push(unit.path);
        }
        package.doc = docs.join("\n");

        log::debug!(
            "Package {} in {}: {} declarations, {} imports",
            package.name,
            dir.display(),
            package.declarations.len(),
            package.imports.len()
        );

        Ok(package)
    }
}

fn is_go_file(path: &Path, include_test_files: bool) -> bool {
    let is_go = path.extension().and_then(|e| e.to_str()) == Some(GO_EXTENSION);
    let is_test = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(TEST_FILE_SUFFIX));
    is_go && (include_test_files || !is_test)
}

fn parse_tree(path: &Path, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| DocError::load_error(path, format!("failed to load Go grammar: {}", e)))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| DocError::load_error(path, "parser produced no tree"))?;

    if tree.root_node().has_error() {
        let line = first_error(tree.root_node())
            .map(|n| n.start_position().row + 1)
            .unwrap_or(1);
        return Err(DocError::load_error(path, format!("syntax error at line {}", line)));
    }

    Ok(tree)
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    children
        .into_iter()
        .filter(|child| child.has_error())
        .find_map(first_error)
}

fn parse_unit(path: &Path, source: &str) -> Result<FileUnit> {
    let tree = parse_tree(path, source)?;
    let root = tree.root_node();

    let mut unit = FileUnit {
        path: path.to_path_buf(),
        package: String::new(),
        doc: String::new(),
        declarations: Vec::new(),
        imports: Vec::new(),
    };

    for item in attach_comments(root, source) {
        let node = item.node;
        match node.kind() {
            "package_clause" => {
                unit.package = first_named_of_kind(node, "package_identifier")
                    .map(|n| node_text(&n, source).to_string())
                    .unwrap_or_default();
                unit.doc = item.doc;
            }
            "import_declaration" => collect_imports(node, source, &mut unit.imports),
            "function_declaration" | "method_declaration" => {
                unit.declarations
                    .push(Declaration::Function(lower_function(node, source, item.doc)));
            }
            "type_declaration" => lower_type_declaration(node, source, &item.doc, &mut unit.declarations),
            "const_declaration" => unit.declarations.push(Declaration::Const(ValueGroup {
                doc: item.doc,
                specs: lower_value_specs(node, source, "const_spec"),
            })),
            "var_declaration" => unit.declarations.push(Declaration::Var(ValueGroup {
                doc: item.doc,
                specs: lower_value_specs(node, source, "var_spec"),
            })),
            _ => {}
        }
    }

    Ok(unit)
}

fn collect_imports(node: Node<'_>, source: &str, imports: &mut Vec<String>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => {
                if let Some(path) = child.child_by_field_name("path") {
                    let path = node_text(&path, source).trim_matches(|c| c == '"' || c == '`');
                    imports.push(path.to_string());
                }
            }
            "import_spec_list" => collect_imports(child, source, imports),
            _ => {}
        }
    }
}

fn lower_function(node: Node<'_>, source: &str, doc: String) -> FuncDecl {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default();

    let receiver = node
        .child_by_field_name("receiver")
        .and_then(|list| lower_parameters(list, source).into_iter().next());

    let ty = node
        .child_by_field_name("parameters")
        .map(|_| lower_func_type(node, source));

    FuncDecl {
        name,
        doc,
        receiver,
        ty,
    }
}

fn lower_func_type(node: Node<'_>, source: &str) -> FuncType {
    let params = node
        .child_by_field_name("parameters")
        .map(|list| lower_parameters(list, source))
        .unwrap_or_default();

    let results = node.child_by_field_name("result").map(|result| {
        if result.kind() == "parameter_list" {
            lower_parameters(result, source)
        } else {
            vec![FieldGroup::anonymous(lower_type(result, source))]
        }
    });

    FuncType { params, results }
}

fn lower_parameters(list: Node<'_>, source: &str) -> Vec<FieldGroup> {
    let mut groups = Vec::new();
    let mut cursor = list.walk();

    for param in list.named_children(&mut cursor) {
        match param.kind() {
            "parameter_declaration" => {
                let ty = field_type(param, "type", source);
                groups.push(FieldGroup::new(field_names(param, source), ty));
            }
            "variadic_parameter_declaration" => {
                let ty = TypeExpr::Variadic(Box::new(field_type(param, "type", source)));
                groups.push(FieldGroup::new(field_names(param, source), ty));
            }
            _ => {}
        }
    }

    groups
}

fn lower_type_declaration(node: Node<'_>, source: &str, group_doc: &str, out: &mut Vec<Declaration>) {
    for spec in attach_comments(node, source) {
        let is_alias = match spec.node.kind() {
            "type_spec" => false,
            "type_alias" => true,
            _ => continue,
        };

        let name = spec
            .node
            .child_by_field_name("name")
            .map(|n| node_text(&n, source).to_string())
            .unwrap_or_default();

        let doc = if spec.doc.is_empty() {
            group_doc.to_string()
        } else {
            spec.doc
        };

        out.push(Declaration::Type(TypeDecl {
            name,
            doc,
            ty: field_type(spec.node, "type", source),
            is_alias,
        }));
    }
}

fn lower_value_specs(node: Node<'_>, source: &str, spec_kind: &str) -> Vec<ValueSpec> {
    let mut specs = Vec::new();
    let mut cursor = node.walk();

    for child in node.named_children(&mut cursor) {
        if child.kind() == spec_kind {
            let values = child
                .child_by_field_name("value")
                .map(|list| {
                    let mut list_cursor = list.walk();
                    list.named_children(&mut list_cursor)
                        .filter(|n| n.kind() != "comment")
                        .map(|n| lower_value(n, source))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();

            specs.push(ValueSpec {
                names: field_names(child, source),
                ty: child.child_by_field_name("type").map(|t| lower_type(t, source)),
                values,
            });
        } else if child.kind().ends_with("_spec_list") {
            specs.extend(lower_value_specs(child, source, spec_kind));
        }
    }

    specs
}

fn lower_value(node: Node<'_>, source: &str) -> ValueExpr {
    let text = node_text(&node, source).to_string();
    match node.kind() {
        "int_literal" | "float_literal" | "imaginary_literal" | "rune_literal"
        | "interpreted_string_literal" | "raw_string_literal" => ValueExpr::Literal(text),
        "identifier" | "true" | "false" | "nil" | "iota" => ValueExpr::Ident(text),
        _ => ValueExpr::Other(text),
    }
}

/// Lower a type node into a [`TypeExpr`]
pub(crate) fn lower_type(node: Node<'_>, source: &str) -> TypeExpr {
    match node.kind() {
        "type_identifier" | "identifier" => TypeExpr::Ident(node_text(&node, source).to_string()),
        "pointer_type" => TypeExpr::Pointer(Box::new(
            node.named_child(0)
                .map(|inner| lower_type(inner, source))
                .unwrap_or_else(|| TypeExpr::Other(String::new())),
        )),
        "slice_type" => TypeExpr::Array {
            len: None,
            elem: Box::new(field_type(node, "element", source)),
        },
        "array_type" => TypeExpr::Array {
            len: node
                .child_by_field_name("length")
                .map(|n| node_text(&n, source).to_string()),
            elem: Box::new(field_type(node, "element", source)),
        },
        "implicit_length_array_type" => TypeExpr::Array {
            len: Some("...".to_string()),
            elem: Box::new(field_type(node, "element", source)),
        },
        "map_type" => TypeExpr::Map {
            key: Box::new(field_type(node, "key", source)),
            value: Box::new(field_type(node, "value", source)),
        },
        "qualified_type" => TypeExpr::Qualified {
            package: field_text(node, "package", source),
            name: field_text(node, "name", source),
        },
        "interface_type" => TypeExpr::Interface {
            elements: interface_elements(node, source),
        },
        "struct_type" => TypeExpr::Struct {
            fields: first_named_of_kind(node, "field_declaration_list")
                .map(|list| lower_fields(list, source))
                .unwrap_or_default(),
        },
        "channel_type" => TypeExpr::Chan {
            dir: channel_direction(node),
            elem: Box::new(field_type(node, "value", source)),
        },
        "function_type" => TypeExpr::Func(lower_func_type(node, source)),
        "generic_type" => TypeExpr::Generic {
            base: Box::new(field_type(node, "type", source)),
            args: node
                .child_by_field_name("type_arguments")
                .map(|args| type_arguments(args, source))
                .unwrap_or_default(),
        },
        "parenthesized_type" => node
            .named_child(0)
            .map(|inner| lower_type(inner, source))
            .unwrap_or_else(|| TypeExpr::Other(node_text(&node, source).to_string())),
        _ => TypeExpr::Other(node_text(&node, source).to_string()),
    }
}

fn lower_fields(list: Node<'_>, source: &str) -> Vec<FieldGroup> {
    attach_comments(list, source)
        .into_iter()
        .filter(|item| item.node.kind() == "field_declaration")
        .map(|item| {
            let node = item.node;
            let names = field_names(node, source);
            let mut ty = field_type(node, "type", source);

            if names.is_empty() && has_anonymous_child(node, "*") {
                ty = TypeExpr::pointer(ty);
            }

            FieldGroup {
                names,
                ty,
                tag: node
                    .child_by_field_name("tag")
                    .map(|t| node_text(&t, source).to_string()),
                doc: item.doc,
                line_comment: item.line_comment,
            }
        })
        .collect()
}

fn interface_elements(node: Node<'_>, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter_map(|elem| match elem.kind() {
            "method_elem" | "method_spec" => elem
                .child_by_field_name("name")
                .map(|n| node_text(&n, source).to_string()),
            "comment" => None,
            _ => Some(node_text(&elem, source).to_string()),
        })
        .collect()
}

fn type_arguments(node: Node<'_>, source: &str) -> Vec<TypeExpr> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|arg| arg.kind() != "comment")
        .map(|arg| match (arg.kind(), arg.named_child_count()) {
            ("type_elem", 1) => arg
                .named_child(0)
                .map(|inner| lower_type(inner, source))
                .unwrap_or_else(|| TypeExpr::Other(String::new())),
            _ => lower_type(arg, source),
        })
        .collect()
}

fn channel_direction(node: Node<'_>) -> ChanDir {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|c| !c.is_named())
        .map(|c| c.kind())
        .collect();

    match tokens.as_slice() {
        ["<-", "chan", ..] => ChanDir::Recv,
        ["chan", "<-", ..] => ChanDir::Send,
        _ => ChanDir::Both,
    }
}

fn field_type(node: Node<'_>, field: &str, source: &str) -> TypeExpr {
    node.child_by_field_name(field)
        .map(|n| lower_type(n, source))
        .unwrap_or_else(|| TypeExpr::Other(String::new()))
}

fn field_text(node: Node<'_>, field: &str, source: &str) -> String {
    node.child_by_field_name(field)
        .map(|n| node_text(&n, source).to_string())
        .unwrap_or_default()
}

/// Identifiers recorded under the `name` field, in order
fn field_names(node: Node<'_>, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.children_by_field_name("name", &mut cursor)
        .filter(|n| n.is_named() && n.kind() != "comment")
        .map(|n| node_text(&n, source).to_string())
        .collect()
}

fn first_named_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

fn has_anonymous_child(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| !c.is_named() && c.kind() == kind);
    found
}
