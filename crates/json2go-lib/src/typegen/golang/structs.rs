//! Struct field layout.

use json2go_core::Node;

use super::Config;
use super::ast::{Field, StructType};
use super::convert::synthesize;
use super::tag::build_tag;

/// Fields of an object node, sorted by name.
///
/// Sorting makes the output independent of key order in the samples.
pub fn synthesize_struct(node: &Node, config: &Config) -> StructType {
    let mut children: Vec<&Node> = node.children.iter().collect();
    children.sort_by(|a, b| a.name.cmp(&b.name));

    let fields = children
        .into_iter()
        .map(|child| Field {
            name: child.name.clone(),
            ty: synthesize(child, config),
            tag: build_tag(&child.key, !child.required),
        })
        .collect();

    StructType { fields }
}
