//! Markdown reference pages

use super::Renderer;
use crate::error::Result;
use crate::models::package::{ConstantInfo, FunctionInfo, PackageInfo, TypeInfo, VariableInfo};
use std::fmt::Write as _;

/// Renders one package as a Markdown document
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer {
    /// Show unexported items too
    pub include_private: bool,
}

impl MarkdownRenderer {
    pub fn new(include_private: bool) -> Self {
        Self { include_private }
    }

    fn visible(&self, exported: bool) -> bool {
        exported || self.include_private
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, pkg: &PackageInfo) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "# {}\n", pkg.name);
        if !pkg.description.is_empty() {
            let _ = writeln!(out, "{}\n", pkg.description);
        }

        let _ = writeln!(out, "## Installation\n");
        let _ = writeln!(out, "```bash\ngo get {}\n```\n", import_path(pkg));

        if !pkg.examples.is_empty() {
            let _ = writeln!(out, "## Usage\n");
            for example in &pkg.examples {
                write_code_block(&mut out, &example.code);
            }
        }

        let functions: Vec<_> = pkg.functions.iter().filter(|f| self.visible(f.is_exported)).collect();
        let types: Vec<_> = pkg.types.iter().filter(|t| self.visible(t.is_exported)).collect();
        let constants: Vec<_> = pkg.constants.iter().filter(|c| self.visible(c.is_exported)).collect();
        let variables: Vec<_> = pkg.variables.iter().filter(|v| self.visible(v.is_exported)).collect();

        if functions.is_empty() && types.is_empty() && constants.is_empty() && variables.is_empty() {
            return Ok(out);
        }

        let _ = writeln!(out, "## API Reference\n");

        if !functions.is_empty() {
            let _ = writeln!(out, "### Functions\n");
            for func in functions {
                write_function(&mut out, func);
            }
        }

        if !types.is_empty() {
            let _ = writeln!(out, "### Types\n");
            for ty in types {
                write_type(&mut out, ty);
            }
        }

        if !constants.is_empty() {
            let _ = writeln!(out, "### Constants\n");
            write_constants(&mut out, &constants);
        }

        if !variables.is_empty() {
            let _ = writeln!(out, "### Variables\n");
            write_variables(&mut out, &variables);
        }

        Ok(out)
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}

fn import_path(pkg: &PackageInfo) -> String {
    let path = pkg.path.to_string_lossy().replace('\\', "/");
    let trimmed = path.trim_start_matches("./").trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        pkg.name.clone()
    } else {
        trimmed.to_string()
    }
}

fn write_code_block(out: &mut String, code: &str) {
    let _ = writeln!(out, "```go\n{}\n```\n", code.trim_end());
}

fn write_function(out: &mut String, func: &FunctionInfo) {
    let heading = match &func.receiver {
        Some(receiver) => format!("{}.{}", receiver, func.name),
        None => func.name.clone(),
    };
    let _ = writeln!(out, "#### {}\n", heading);
    if !func.signature.is_empty() {
        write_code_block(out, &func.signature);
    }
    if !func.description.is_empty() {
        let _ = writeln!(out, "{}\n", func.description);
    }

    if !func.parameters.is_empty() {
        let _ = writeln!(out, "**Parameters:**\n");
        for param in &func.parameters {
            if param.name.is_empty() {
                let _ = writeln!(out, "- ({})", param.type_text);
            } else {
                let _ = writeln!(out, "- `{}` ({})", param.name, param.type_text);
            }
        }
        out.push('\n');
    }

    if !func.returns.is_empty() {
        let _ = writeln!(out, "**Returns:**\n");
        for ret in &func.returns {
            match &ret.description {
                Some(desc) if !desc.is_empty() => {
                    let _ = writeln!(out, "- {} - {}", ret.type_text, desc);
                }
                _ => {
                    let _ = writeln!(out, "- {}", ret.type_text);
                }
            }
        }
        out.push('\n');
    }

    if !func.examples.is_empty() {
        let _ = writeln!(out, "**Example:**\n");
        for example in &func.examples {
            write_code_block(out, example);
        }
    }
}

fn write_type(out: &mut String, ty: &TypeInfo) {
    let _ = writeln!(out, "#### {}\n", ty.name);
    write_code_block(out, &format!("type {} {}", ty.name, ty.kind));
    if !ty.description.is_empty() {
        let _ = writeln!(out, "{}\n", ty.description);
    }

    if !ty.fields.is_empty() {
        let _ = writeln!(out, "**Fields:**\n");
        for field in &ty.fields {
            let name = if field.is_embedded() {
                "(embedded)".to_string()
            } else {
                format!("`{}`", field.name)
            };
            let _ = write!(out, "- {} {}", name, field.type_text);
            if !field.tag.is_empty() {
                let _ = write!(out, " {}", field.tag);
            }
            if !field.description.is_empty() {
                let _ = write!(out, " - {}", field.description);
            }
            out.push('\n');
        }
        out.push('\n');
    }

    if !ty.methods.is_empty() {
        let _ = writeln!(out, "**Methods:**\n");
        for method in &ty.methods {
            let anchor = format!("{}{}", ty.name, method).to_lowercase();
            let _ = writeln!(out, "- [{}](#{})", method, anchor);
        }
        out.push('\n');
    }
}

fn write_constants(out: &mut String, constants: &[&ConstantInfo]) {
    let _ = writeln!(out, "| Name | Type | Value | Description |");
    let _ = writeln!(out, "|------|------|-------|-------------|");
    for constant in constants {
        let _ = writeln!(
            out,
            "| `{}` | {} | {} | {} |",
            constant.name,
            constant.type_text,
            constant.value.as_deref().map(table_cell).unwrap_or_default(),
            table_cell(&constant.description)
        );
    }
    out.push('\n');
}

fn write_variables(out: &mut String, variables: &[&VariableInfo]) {
    let _ = writeln!(out, "| Name | Type | Description |");
    let _ = writeln!(out, "|------|------|-------------|");
    for variable in variables {
        let _ = writeln!(
            out,
            "| `{}` | {} | {} |",
            variable.name,
            variable.type_text,
            table_cell(&variable.description)
        );
    }
    out.push('\n');
}

fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
