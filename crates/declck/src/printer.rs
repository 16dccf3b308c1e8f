//! Indented tree rendering for diagnostics

use std::fmt::Write;

use crate::ast::{Ident, Node, Program, Visitor};

const INDENT: &str = "  ";

/// Render `root` pre-order, one line per node or field, two spaces per level
pub fn print_tree(root: &Node) -> String {
    let mut printer = TreePrinter::new();
    root.accept(&mut printer);
    printer.finish()
}

/// Render every statement of `program`, each starting at depth zero
pub fn print_program(program: &Program) -> String {
    let mut printer = TreePrinter::new();
    for stmt in &program.statements {
        stmt.accept(&mut printer);
    }
    printer.finish()
}

/// Visitor that accumulates the rendered tree
pub struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        let indent = INDENT.repeat(self.depth);
        // Writing into a String cannot fail
        writeln!(self.out, "{indent}{text}").ok();
    }

    fn nested(&mut self, node: &Node) {
        self.depth += 1;
        node.accept(self);
        self.depth -= 1;
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for TreePrinter {
    type Output = ();

    fn visit_assignment(&mut self, variable: &Ident, value: &Node) {
        self.line(format_args!("Assignment"));
        self.depth += 1;
        self.line(format_args!("target: {}", variable.name));
        self.depth -= 1;
        self.nested(value);
    }

    fn visit_binary_operation(&mut self, left: &Node, right: &Node, operator: &str) {
        self.line(format_args!("BinaryOperation {}", operator));
        self.nested(left);
        self.nested(right);
    }

    fn visit_variable(&mut self, name: &Ident) {
        self.line(format_args!("Variable {}", name.name));
    }
}
