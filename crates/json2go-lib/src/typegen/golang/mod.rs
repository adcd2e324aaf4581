//! Go type emitter.
//!
//! Turns a forest of inferred type nodes into `gofmt`-formatted Go type
//! declarations: one `type` per root node, anonymous structs for nested
//! objects, `json` struct tags on every field.

mod align;
mod ast;
mod config;
mod convert;
mod emitter;
mod pointer;
mod render;
mod structs;
mod tag;

#[cfg(test)]
mod tag_tests;

pub use ast::{Decl, Field, StructType, Tag, TypeExpr};
pub use config::{Config, Indent, Layout};
pub use convert::synthesize;
pub use emitter::Emitter;
pub use pointer::{PointerRules, should_be_pointer};
pub use structs::synthesize_struct;
pub use tag::build_tag;

use json2go_core::Node;

/// Emit Go declarations for a forest of root nodes.
pub fn emit(roots: &[Node]) -> String {
    Emitter::new(roots, Config::default()).emit()
}

/// Emit Go declarations for a forest of root nodes with custom config.
pub fn emit_with_config(roots: &[Node], config: Config) -> String {
    Emitter::new(roots, config).emit()
}
