//! Output rendering.
//!
//! Walks declarations the way `go/printer` does and produces the same text:
//! - struct fields are written as `name <tab> type <tab> tag` cells
//! - alignment sections end after `{`, before `}`, and after a field that
//!   spans several lines (`go/printer` emits a formfeed there)
//! - declarations follow each other on consecutive lines

use std::mem;

use super::align::{Line, align};
use super::ast::{Decl, StructType, TypeExpr};
use super::config::Layout;

/// Render a batch of declarations, trimmed of surrounding whitespace.
pub(super) fn print_decls(decls: &[Decl], layout: &Layout) -> String {
    let mut printer = Printer::new(layout);
    for decl in decls {
        printer.decl(decl);
        printer.newline();
    }
    printer.finish().trim().to_string()
}

/// Render a single type expression.
pub(super) fn print_expr(expr: &TypeExpr, layout: &Layout) -> String {
    let mut printer = Printer::new(layout);
    printer.expr(expr);
    printer.finish()
}

struct Printer<'a> {
    layout: &'a Layout,
    indent: usize,
    /// Line being written, created on first text
    line: Option<Line>,
    /// Completed lines awaiting alignment
    section: Vec<Line>,
    /// Aligned output lines
    output: Vec<String>,
}

impl<'a> Printer<'a> {
    fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            indent: 0,
            line: None,
            section: Vec::new(),
            output: Vec::new(),
        }
    }

    fn decl(&mut self, decl: &Decl) {
        self.text("type ");
        self.text(&decl.name);
        self.text(" ");
        self.expr(&decl.ty);
    }

    fn expr(&mut self, expr: &TypeExpr) {
        match expr {
            TypeExpr::Ident(name) => self.text(name),
            TypeExpr::Pointer(inner) => {
                self.text("*");
                self.expr(inner);
            }
            TypeExpr::Slice { depth, elem } => {
                self.text(&"[]".repeat(*depth as usize));
                self.expr(elem);
            }
            TypeExpr::Map { key, value } => {
                self.text("map[");
                self.expr(key);
                self.text("]");
                self.expr(value);
            }
            TypeExpr::Struct(st) => self.struct_type(st),
            TypeExpr::Interface => self.text("interface{}"),
            TypeExpr::Alias(inner) => {
                self.text("= ");
                self.expr(inner);
            }
        }
    }

    fn struct_type(&mut self, st: &StructType) {
        self.text("struct {");
        if st.fields.is_empty() {
            self.formfeed();
            self.text("}");
            return;
        }

        self.indent += 1;
        self.formfeed();

        // A lone field is separated by blanks, like go/printer does.
        let aligned = st.fields.len() > 1;
        let mut prev_multiline = false;
        for (i, field) in st.fields.iter().enumerate() {
            if i > 0 {
                if prev_multiline {
                    self.formfeed();
                } else {
                    self.newline();
                }
            }
            self.text(&field.name);
            self.separator(aligned);
            self.expr(&field.ty);
            self.separator(aligned);
            self.text(field.tag.as_str());
            prev_multiline = field.ty.is_multiline();
        }

        self.indent -= 1;
        self.formfeed();
        self.text("}");
    }

    fn separator(&mut self, aligned: bool) {
        if aligned {
            self.cell_break();
        } else {
            self.text(" ");
        }
    }

    fn text(&mut self, s: &str) {
        let indent = self.indent;
        let line = self.line.get_or_insert_with(|| Line {
            indent,
            ..Line::default()
        });
        line.trailing.push_str(s);
    }

    /// Terminate the current cell (a `\v` in go/printer terms).
    fn cell_break(&mut self) {
        let indent = self.indent;
        let line = self.line.get_or_insert_with(|| Line {
            indent,
            ..Line::default()
        });
        let cell = mem::take(&mut line.trailing);
        line.cells.push(cell);
    }

    fn newline(&mut self) {
        if let Some(line) = self.line.take() {
            self.section.push(line);
        }
    }

    /// End the line and the alignment section.
    fn formfeed(&mut self) {
        self.newline();
        let section = mem::take(&mut self.section);
        self.output.extend(align(&section, self.layout));
    }

    fn finish(mut self) -> String {
        self.formfeed();
        self.output.join("\n")
    }
}
