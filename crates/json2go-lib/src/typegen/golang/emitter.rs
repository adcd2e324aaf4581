//! Core emitter struct and main emit logic.

use json2go_core::Node;
use tracing::{debug, instrument};

use super::Config;
use super::ast::Decl;
use super::convert::synthesize;
use super::render::print_decls;

/// Go emitter over a forest of root nodes.
pub struct Emitter<'a> {
    roots: &'a [Node],
    config: Config,
}

impl<'a> Emitter<'a> {
    pub fn new(roots: &'a [Node], config: Config) -> Self {
        Self { roots, config }
    }

    /// One declaration per root, in input order.
    pub fn declarations(&self) -> Vec<Decl> {
        self.roots
            .iter()
            .map(|root| {
                let ty = synthesize(root, &self.config);
                debug!(name = %root.name, kind = %root.kind, "declared type");
                Decl {
                    name: root.name.clone(),
                    ty,
                }
            })
            .collect()
    }

    /// Emit Go source for all root types.
    #[instrument(level = "debug", skip_all, fields(roots = self.roots.len()))]
    pub fn emit(self) -> String {
        let decls = self.declarations();
        print_decls(&decls, &self.config.layout)
    }
}
