//! Node to Go type expression conversion.

use json2go_core::{Node, NodeKind};
use tracing::trace;

use super::Config;
use super::ast::{self, TypeExpr};
use super::pointer::{PointerRules, should_be_pointer};
use super::structs::synthesize_struct;

/// Declared Go type for `node`, pointer and slice wrapping included.
///
/// A root timestamp comes back as an alias (`= time.Time`) so the declared
/// type keeps `time.Time`'s JSON methods.
pub fn synthesize(node: &Node, config: &Config) -> TypeExpr {
    let rules = PointerRules::for_kind(node.kind, config);
    let pointer = should_be_pointer(node, rules.not_required_as_pointer, rules.allow_pointer);

    let mut ty = base_type(node, config);
    if pointer {
        ty = ty.pointer();
    }
    ty = ty.slices(node.array_level);

    trace!(
        kind = %node.kind,
        name = %node.name,
        pointer,
        array_level = node.array_level,
        "synthesized type"
    );

    if is_time_alias(node, config) {
        ty.alias()
    } else {
        ty
    }
}

fn base_type(node: &Node, config: &Config) -> TypeExpr {
    match node.kind {
        NodeKind::Bool => TypeExpr::ident(ast::BOOL),
        NodeKind::Int => TypeExpr::ident(ast::INT64),
        NodeKind::Float => TypeExpr::ident(ast::FLOAT64),
        NodeKind::String => TypeExpr::ident(ast::STRING),
        NodeKind::Time if config.time_as_str => TypeExpr::ident(ast::STRING),
        NodeKind::Time => TypeExpr::ident(ast::TIME),
        NodeKind::Object => TypeExpr::Struct(synthesize_struct(node, config)),
        NodeKind::Map => map_type(node, config),
        NodeKind::Interface | NodeKind::Init => TypeExpr::Interface,
        NodeKind::Extracted => TypeExpr::ident(node.reference_name()),
    }
}

fn map_type(node: &Node, config: &Config) -> TypeExpr {
    let value = match node.map_value() {
        Some(value) => synthesize(value, config),
        None => TypeExpr::Interface,
    };
    TypeExpr::string_map(value)
}

fn is_time_alias(node: &Node, config: &Config) -> bool {
    node.root && node.kind == NodeKind::Time && !config.time_as_str
}
