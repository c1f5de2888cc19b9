//! Data models and structures for gopherdoc

pub mod analysis;
pub mod config;
pub mod package;
pub mod syntax;

pub use analysis::{BatchError, BatchReport, DocumentedPackage};
pub use config::{OutputFormat, PartialSettings, Settings};
pub use package::{
    ConstantInfo, ExampleInfo, FieldInfo, FunctionInfo, PackageInfo, ParamInfo, ReturnInfo, TypeInfo,
    TypeKind, VariableInfo,
};
pub use syntax::{Declaration, FieldGroup, FuncDecl, FuncType, TypeDecl, TypeExpr, ValueExpr, ValueGroup};
