//! Documentation model produced for one Go package
//!
//! Field names are part of the serialized interface consumed by renderers
//! and enhancers, so they are fixed here with serde attributes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

/// Everything extracted from a single package directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub path: PathBuf,
    pub description: String,
    pub functions: Vec<FunctionInfo>,
    pub types: Vec<TypeInfo>,
    pub constants: Vec<ConstantInfo>,
    pub variables: Vec<VariableInfo>,
    pub examples: Vec<ExampleInfo>,
    pub imports: BTreeSet<String>,
}

impl PackageInfo {
    /// Create an empty model for a package
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    /// Look up a type by name
    pub fn find_type(&self, name: &str) -> Option<&TypeInfo> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Look up a free function or method by name
    ///
    /// When a receiver is given only methods on that receiver match.
    pub fn find_function(&self, name: &str, receiver: Option<&str>) -> Option<&FunctionInfo> {
        self.functions
            .iter()
            .find(|f| f.name == name && f.receiver.as_deref() == receiver)
    }

    /// All methods declared on the given receiver type, in model order
    pub fn methods_of<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a FunctionInfo> + 'a {
        self.functions
            .iter()
            .filter(move |f| f.is_method && f.receiver.as_deref() == Some(type_name))
    }

    /// Number of exported top-level items
    pub fn exported_count(&self) -> usize {
        self.functions.iter().filter(|f| f.is_exported).count()
            + self.types.iter().filter(|t| t.is_exported).count()
            + self.constants.iter().filter(|c| c.is_exported).count()
            + self.variables.iter().filter(|v| v.is_exported).count()
    }
}

/// A free function or a method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionInfo {
    pub name: String,
    pub signature: String,
    pub description: String,
    pub parameters: Vec<ParamInfo>,
    pub returns: Vec<ReturnInfo>,
    pub examples: Vec<String>,
    pub is_exported: bool,
    pub is_method: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
}

/// Outer shape of a declared type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Struct,
    Interface,
    Array,
    Map,
    Channel,
    Function,
    #[default]
    Alias,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Array => "array",
            TypeKind::Map => "map",
            TypeKind::Channel => "channel",
            TypeKind::Function => "function",
            TypeKind::Alias => "alias",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named type declaration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub name: String,
    pub kind: TypeKind,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldInfo>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
    pub is_exported: bool,
}

/// One struct field; an empty name marks an embedded field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    pub description: String,
}

impl FieldInfo {
    pub fn is_embedded(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnInfo {
    #[serde(rename = "type")]
    pub type_text: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A constant; `value` is `None` when its spec has no expression at that position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: String,
    pub value: Option<String>,
    pub description: String,
    pub is_exported: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub type_text: String,
    pub description: String,
    pub is_exported: bool,
}

/// A package-level example block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleInfo {
    pub name: String,
    pub code: String,
    pub doc: String,
}
