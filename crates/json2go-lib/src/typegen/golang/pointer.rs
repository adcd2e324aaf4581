//! Pointer (optionality) policy.
//!
//! Go has no optional type; a value that may be absent or null is declared as
//! a pointer so the zero value stays distinguishable.

use json2go_core::{Node, NodeKind};

use super::Config;

/// Per-kind inputs to [`should_be_pointer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerRules {
    /// A missing (non-required) key alone is enough to make the field a pointer.
    pub not_required_as_pointer: bool,
    /// The kind may be declared as a pointer at all.
    pub allow_pointer: bool,
}

impl PointerRules {
    pub fn for_kind(kind: NodeKind, config: &Config) -> Self {
        let (not_required_as_pointer, allow_pointer) = match kind {
            // The string setting never applies here.
            NodeKind::Bool | NodeKind::Int | NodeKind::Float => (true, true),
            NodeKind::String => (config.string_pointers_when_key_missing, true),
            NodeKind::Time if config.time_as_str => (config.string_pointers_when_key_missing, true),
            NodeKind::Time => (true, true),
            NodeKind::Object | NodeKind::Extracted => (true, true),
            // nil-able already
            NodeKind::Map | NodeKind::Interface | NodeKind::Init => (true, false),
        };
        Self {
            not_required_as_pointer,
            allow_pointer,
        }
    }
}

/// Decide whether a node's declared type is wrapped in `*`.
///
/// Without array wrapping the node's own nullability and requiredness decide;
/// with array wrapping the pointer lands on the elements and only
/// `array_with_nulls` matters. Roots without arrays are never pointers.
pub fn should_be_pointer(node: &Node, not_required_as_pointer: bool, allow_pointer: bool) -> bool {
    if !allow_pointer {
        return false;
    }

    if node.array_level > 0 {
        return node.array_with_nulls;
    }

    if node.root {
        return false;
    }

    node.nullable || (!node.required && not_required_as_pointer)
}
