//! Structural checks for externally supplied trees.
//!
//! The generator itself is total over any tree; these checks catch trees
//! that would produce nonsensical Go (duplicate fields, aliases in nested
//! position, dangling references) before they reach it.

use std::collections::HashSet;

use crate::{Node, NodeKind};

/// Deepest `[]` nesting a node may declare.
pub const MAX_ARRAY_LEVEL: u32 = 1024;

/// First invariant violation found in a tree.
///
/// `path` is the dotted chain of names from the root declaration down to the
/// offending node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("{path}: declaration has no name")]
    MissingTypeName { path: String },

    #[error("{path}: field has no name")]
    MissingFieldName { path: String },

    #[error("{path}: duplicate field `{name}`")]
    DuplicateField { path: String, name: String },

    #[error("{path}: map declares {count} value types, expected at most one")]
    MapArity { path: String, count: usize },

    #[error("{path}: {kind} node cannot have children")]
    UnexpectedChildren { path: String, kind: NodeKind },

    #[error("{path}: nested node is marked as root")]
    NestedRoot { path: String },

    #[error("{path}: extracted node references no type")]
    MissingReference { path: String },

    #[error("{path}: {level} array levels, at most {max} allowed", max = MAX_ARRAY_LEVEL)]
    ArrayTooDeep { path: String, level: u32 },
}

/// Check every tree of a forest, stopping at the first violation.
pub fn validate(roots: &[Node]) -> Result<(), TreeError> {
    for (index, root) in roots.iter().enumerate() {
        if root.name.is_empty() {
            return Err(TreeError::MissingTypeName {
                path: format!("#{index}"),
            });
        }
        check_node(root, &root.name)?;
    }
    Ok(())
}

fn check_node(node: &Node, path: &str) -> Result<(), TreeError> {
    if node.array_level > MAX_ARRAY_LEVEL {
        return Err(TreeError::ArrayTooDeep {
            path: path.to_string(),
            level: node.array_level,
        });
    }

    if !node.kind.takes_children() && !node.children.is_empty() {
        return Err(TreeError::UnexpectedChildren {
            path: path.to_string(),
            kind: node.kind,
        });
    }

    match node.kind {
        NodeKind::Object => check_fields(node, path)?,
        NodeKind::Map => {
            if node.children.len() > 1 {
                return Err(TreeError::MapArity {
                    path: path.to_string(),
                    count: node.children.len(),
                });
            }
            if let Some(value) = node.map_value() {
                check_nested(value, &format!("{path}.<value>"))?;
            }
        }
        NodeKind::Extracted => {
            if node.reference_name().is_empty() {
                return Err(TreeError::MissingReference {
                    path: path.to_string(),
                });
            }
        }
        NodeKind::Bool
        | NodeKind::Int
        | NodeKind::Float
        | NodeKind::String
        | NodeKind::Time
        | NodeKind::Interface
        | NodeKind::Init => {}
    }

    Ok(())
}

fn check_fields(node: &Node, path: &str) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    for field in &node.children {
        if field.name.is_empty() {
            return Err(TreeError::MissingFieldName {
                path: format!("{path}.{}", field.key),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(TreeError::DuplicateField {
                path: path.to_string(),
                name: field.name.clone(),
            });
        }
        check_nested(field, &format!("{path}.{}", field.name))?;
    }
    Ok(())
}

fn check_nested(node: &Node, path: &str) -> Result<(), TreeError> {
    if node.root {
        return Err(TreeError::NestedRoot {
            path: path.to_string(),
        });
    }
    check_node(node, path)
}
