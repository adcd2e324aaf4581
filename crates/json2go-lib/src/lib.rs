//! json2go: Go type declarations from inferred JSON shapes.
//!
//! This crate provides the declaration side of the pipeline:
//! - `typegen` - type synthesis and `gofmt`-compatible rendering
//! - `parse_forest` / `emit_json` - entry points for serialized node trees
//!
//! Node trees themselves live in `json2go-core` and are re-exported here.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod typegen;


pub use json2go_core::{MAX_ARRAY_LEVEL, Node, NodeKind, TreeError, mark_roots, validate};
pub use typegen::golang::{Config, Indent, Layout};

use serde_json::Value;

/// Errors that can occur while loading a serialized node forest.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse node tree: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid node tree: {0}")]
    InvalidTree(#[from] TreeError),
}

/// Result type for forest loading.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse a JSON node forest (a single node or an array of nodes).
///
/// Top-level nodes are marked as roots and the forest is validated.
pub fn parse_forest(json: &str) -> Result<Vec<Node>> {
    let value: Value = serde_json::from_str(json)?;
    let mut roots = match value {
        Value::Array(_) => serde_json::from_value::<Vec<Node>>(value)?,
        other => vec![serde_json::from_value::<Node>(other)?],
    };
    mark_roots(&mut roots);
    validate(&roots)?;
    Ok(roots)
}

/// Parse, validate, and emit a JSON node forest.
pub fn emit_json(json: &str, config: Config) -> Result<String> {
    let roots = parse_forest(json)?;
    Ok(typegen::golang::emit_with_config(&roots, config))
}
