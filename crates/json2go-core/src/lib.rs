#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Inferred type tree consumed by the json2go declaration generator.
//!
//! Two layers:
//! - **Deserialization layer**: `RawNode`, a lenient 1:1 mapping of the JSON
//!   node format where everything but `kind` and `name` is optional
//! - **Model layer**: `Node`, fully populated and read-only for the generator
//!
//! Trees are produced by an inference pass over sample documents (not part of
//! this crate), by deserializing `RawNode`s, or by hand with the builder
//! methods on `Node`.

use std::fmt;

mod validate;

#[cfg(test)]
mod validate_tests;

pub use validate::{MAX_ARRAY_LEVEL, TreeError, validate};

// ============================================================================
// Node Kinds
// ============================================================================

/// Base type of a node.
///
/// Closed set: every consumer matches exhaustively, so a new kind is a
/// compile error until each consumer handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Bool,
    Int,
    Float,
    String,
    /// Timestamp value (RFC 3339 strings in the samples).
    Time,
    /// Record with one child per field.
    Object,
    /// String-keyed map with at most one child describing the value type.
    Map,
    /// Value seen with conflicting shapes; declared as "anything".
    Interface,
    /// Placeholder for a value never observed with a concrete shape.
    Init,
    /// Reference to a type declared elsewhere.
    Extracted,
}

impl NodeKind {
    /// Whether nodes of this kind may own children.
    pub fn takes_children(self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Map)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Bool => "bool",
            NodeKind::Int => "int",
            NodeKind::Float => "float",
            NodeKind::String => "string",
            NodeKind::Time => "time",
            NodeKind::Object => "object",
            NodeKind::Map => "map",
            NodeKind::Interface => "interface",
            NodeKind::Init => "init",
            NodeKind::Extracted => "extracted",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Deserialization Layer
// ============================================================================

/// Node as it appears in serialized trees.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    pub kind: NodeKind,
    pub name: String,
    pub external_type_id: Option<String>,
    /// Serialization key; defaults to `name`.
    pub key: Option<String>,
    #[serde(default)]
    pub children: Vec<RawNode>,
    #[serde(default)]
    pub array_level: u32,
    #[serde(default)]
    pub array_with_nulls: bool,
    #[serde(default)]
    pub nullable: bool,
    /// Defaults to `true`.
    pub required: Option<bool>,
    #[serde(default)]
    pub root: bool,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        let key = raw.key.unwrap_or_else(|| raw.name.clone());
        Self {
            kind: raw.kind,
            name: raw.name,
            external_type_id: raw.external_type_id.filter(|id| !id.is_empty()),
            key,
            children: raw.children.into_iter().map(Node::from).collect(),
            array_level: raw.array_level,
            array_with_nulls: raw.array_with_nulls,
            nullable: raw.nullable,
            required: raw.required.unwrap_or(true),
            root: raw.root,
        }
    }
}

// ============================================================================
// Model Layer
// ============================================================================

/// One position in the inferred type tree.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(from = "RawNode")]
pub struct Node {
    pub kind: NodeKind,
    /// Declared identifier: type name for roots, field name for object
    /// children, referenced type for extracted nodes.
    pub name: String,
    /// Overrides `name` when referencing an externally declared type.
    pub external_type_id: Option<String>,
    /// Original serialization key the node was discovered under.
    pub key: String,
    pub children: Vec<Node>,
    /// Number of `[]` wrappers around the declared type.
    pub array_level: u32,
    /// Elements inside the array dimension may be null.
    pub array_with_nulls: bool,
    /// The value itself may be null.
    pub nullable: bool,
    /// The key was present in every observed sample.
    pub required: bool,
    /// Top-level node handed directly to the emitter.
    pub root: bool,
}

impl Node {
    /// Create a required, non-root node keyed by its own name.
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind,
            key: name.clone(),
            name,
            external_type_id: None,
            children: Vec::new(),
            array_level: 0,
            array_with_nulls: false,
            nullable: false,
            required: true,
            root: false,
        }
    }

    /// Create a top-level node.
    pub fn root_of(kind: NodeKind, name: impl Into<String>) -> Self {
        Self::new(kind, name).root(true)
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn external_type_id(mut self, id: impl Into<String>) -> Self {
        self.external_type_id = Some(id.into());
        self
    }

    pub fn array_level(mut self, level: u32) -> Self {
        self.array_level = level;
        self
    }

    pub fn array_with_nulls(mut self, value: bool) -> Self {
        self.array_with_nulls = value;
        self
    }

    pub fn nullable(mut self, value: bool) -> Self {
        self.nullable = value;
        self
    }

    pub fn required(mut self, value: bool) -> Self {
        self.required = value;
        self
    }

    pub fn root(mut self, value: bool) -> Self {
        self.root = value;
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Identifier an extracted node refers to.
    pub fn reference_name(&self) -> &str {
        match self.external_type_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => &self.name,
        }
    }

    /// Value type of a map node (its first child).
    pub fn map_value(&self) -> Option<&Node> {
        self.children.first()
    }
}

/// Flag every node of a forest as a root.
///
/// Serialized forests rarely carry the flag; the position in the input is
/// what makes a node top-level.
pub fn mark_roots(roots: &mut [Node]) {
    for node in roots {
        node.root = true;
    }
}
