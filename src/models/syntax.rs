//! Typed declaration model handed over by a declaration loader
//!
//! This is the boundary between source parsing and model extraction: a
//! loader lowers whatever syntax tree it works with into these types, and
//! everything in `core` works on them alone.

/// A type expression as written in source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `T`
    Ident(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T` when `len` is `None`, `[N]T` otherwise
    Array {
        len: Option<String>,
        elem: Box<TypeExpr>,
    },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `pkg.Name`
    Qualified { package: String, name: String },
    /// `interface { ... }`, method and type-set element names in order
    Interface { elements: Vec<String> },
    /// `struct { ... }`
    Struct { fields: Vec<FieldGroup> },
    /// `chan T`, `chan<- T`, `<-chan T`
    Chan { dir: ChanDir, elem: Box<TypeExpr> },
    /// `func(...) ...`
    Func(FuncType),
    /// `T[A, B]`
    Generic {
        base: Box<TypeExpr>,
        args: Vec<TypeExpr>,
    },
    /// `...T` in a final parameter
    Variadic(Box<TypeExpr>),
    /// Any other shape, with its source text
    Other(String),
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Array {
            len: None,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn qualified(package: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Qualified {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Name of the type a receiver expression refers to
    ///
    /// `*List[T]` and `List` both resolve to `List`.
    pub fn base_name(&self) -> Option<&str> {
        match self {
            TypeExpr::Ident(name) => Some(name.as_str()),
            TypeExpr::Pointer(inner) => inner.base_name(),
            TypeExpr::Generic { base, .. } => base.base_name(),
            TypeExpr::Qualified { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// Names sharing one type (and tag), as in `a, b int`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    /// Empty for an embedded field or anonymous parameter
    pub names: Vec<String>,
    pub ty: TypeExpr,
    /// Raw tag literal including its quotes
    pub tag: Option<String>,
    /// Comment block directly above the group
    pub doc: String,
    /// Comment trailing the group on the same line
    pub line_comment: String,
}

impl FieldGroup {
    pub fn new(names: Vec<String>, ty: TypeExpr) -> Self {
        Self {
            names,
            ty,
            tag: None,
            doc: String::new(),
            line_comment: String::new(),
        }
    }

    pub fn anonymous(ty: TypeExpr) -> Self {
        Self::new(Vec::new(), ty)
    }

    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self::new(vec![name.into()], ty)
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Parameters and results of a function
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FuncType {
    pub params: Vec<FieldGroup>,
    /// `None` when no result is written, `Some(vec![])` for an explicit `()`
    pub results: Option<Vec<FieldGroup>>,
}

/// A function or method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    pub name: String,
    pub doc: String,
    pub receiver: Option<FieldGroup>,
    /// Missing when the loader could not recover a signature node
    pub ty: Option<FuncType>,
}

impl FuncDecl {
    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }

    /// Base type name of the receiver, for methods
    pub fn receiver_type_name(&self) -> Option<&str> {
        self.receiver.as_ref().and_then(|r| r.ty.base_name())
    }
}

/// One `type` spec; grouped declarations are flattened to one per spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub doc: String,
    pub ty: TypeExpr,
    /// Written as `type A = B`
    pub is_alias: bool,
}

/// Right-hand side of a const or var spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueExpr {
    /// Number, string, rune or imaginary literal, as written
    Literal(String),
    /// Plain identifier, including `iota`, `true`, `false` and `nil`
    Ident(String),
    /// Anything else, with its source text
    Other(String),
}

/// `a, b T = x, y`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSpec {
    pub names: Vec<String>,
    pub ty: Option<TypeExpr>,
    pub values: Vec<ValueExpr>,
}

/// A `const` or `var` declaration with all its specs and the group doc
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGroup {
    pub doc: String,
    pub specs: Vec<ValueSpec>,
}

/// A top-level declaration in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Function(FuncDecl),
    Type(TypeDecl),
    Const(ValueGroup),
    Var(ValueGroup),
}
