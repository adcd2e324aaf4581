//! Go type expressions produced by synthesis.
//!
//! Only the subset of Go's type grammar the generator can produce. Rendering
//! lives in `render`; `Display` renders with the default layout.

use std::fmt;

use super::config::Layout;
use super::render;

pub(crate) const BOOL: &str = "bool";
pub(crate) const INT64: &str = "int64";
pub(crate) const FLOAT64: &str = "float64";
pub(crate) const STRING: &str = "string";
pub(crate) const TIME: &str = "time.Time";

/// A Go type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    /// Predeclared, qualified (`time.Time`) or user type name.
    Ident(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`, `depth` levels deep; directly nested slices are merged here.
    Slice { depth: u32, elem: Box<TypeExpr> },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `struct { ... }`
    Struct(StructType),
    /// `interface{}`
    Interface,
    /// `= T`; only valid as the outermost type of a declaration.
    Alias(Box<TypeExpr>),
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn pointer(self) -> Self {
        TypeExpr::Pointer(Box::new(self))
    }

    pub fn slice(self) -> Self {
        self.slices(1)
    }

    /// Wrap in `depth` levels of `[]`.
    pub fn slices(self, depth: u32) -> Self {
        if depth == 0 {
            return self;
        }
        match self {
            TypeExpr::Slice { depth: inner, elem } => TypeExpr::Slice {
                depth: inner.saturating_add(depth),
                elem,
            },
            elem => TypeExpr::Slice {
                depth,
                elem: Box::new(elem),
            },
        }
    }

    pub fn alias(self) -> Self {
        TypeExpr::Alias(Box::new(self))
    }

    pub fn string_map(value: TypeExpr) -> Self {
        TypeExpr::Map {
            key: Box::new(TypeExpr::ident(STRING)),
            value: Box::new(value),
        }
    }

    /// Whether rendering spans more than one line.
    pub fn is_multiline(&self) -> bool {
        match self {
            TypeExpr::Ident(_) | TypeExpr::Interface => false,
            TypeExpr::Pointer(inner)
            | TypeExpr::Slice { elem: inner, .. }
            | TypeExpr::Alias(inner) => inner.is_multiline(),
            TypeExpr::Map { key, value } => key.is_multiline() || value.is_multiline(),
            // go/printer breaks even an empty field list without positions.
            TypeExpr::Struct(_) => true,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::print_expr(self, &Layout::default()))
    }
}

/// Anonymous struct type with fields in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructType {
    pub fields: Vec<Field>,
}

/// Named struct field with its tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeExpr,
    pub tag: Tag,
}

/// Struct tag literal, quotes included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag(pub(crate) String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top-level `type` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decl {
    pub name: String,
    pub ty: TypeExpr,
}
