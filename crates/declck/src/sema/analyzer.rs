//! Semantic analyzer - declaration checking

use crate::ast::{Ident, Node, Program, Visitor};
use crate::common::{SemanticError, SemanticResult};
use crate::printer;
use super::scope::{Symbol, SymbolTable};

/// Walks a tree and enforces the declaration rules.
///
/// The symbol table lives as long as the analyzer, so analyzing the same
/// tree twice on one instance reports every assignment target as a
/// duplicate the second time. Use a fresh analyzer per tree when that is
/// not wanted.
#[derive(Default)]
pub struct SemanticAnalyzer {
    symbols: SymbolTable,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `names` already declared
    pub fn with_predeclared<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut analyzer = Self::new();
        for name in names {
            analyzer.declare_external(name.as_ref());
        }
        analyzer
    }

    /// Mark `name` as declared in an enclosing scope. Seeding a name twice
    /// is not an error.
    pub fn declare_external(&mut self, name: &str) {
        let _ = self.symbols.define(name, Symbol::external());
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Check a tree rooted at `root`, stopping at the first violation.
    ///
    /// Names declared before the failure point stay in the table.
    pub fn analyze(&mut self, root: &Node) -> SemanticResult<()> {
        root.accept(self)
    }

    /// Check every statement in order against one shared table
    pub fn analyze_program(&mut self, program: &Program) -> SemanticResult<()> {
        for stmt in &program.statements {
            self.analyze(stmt)?;
        }
        Ok(())
    }

    /// Render `root` as an indented tree. Does not touch the symbol table.
    pub fn print_tree(&self, root: &Node) -> String {
        printer::print_tree(root)
    }
}

impl Visitor for SemanticAnalyzer {
    type Output = SemanticResult<()>;

    fn visit_assignment(&mut self, variable: &Ident, value: &Node) -> SemanticResult<()> {
        // The target is declared before its value is checked, so `x = x`
        // is accepted.
        self.symbols
            .define(&variable.name, Symbol::declared(variable.span))
            .map_err(|existing| {
                SemanticError::duplicate(&variable.name, variable.span, existing.span)
            })?;

        value.accept(self)
    }

    fn visit_binary_operation(&mut self, left: &Node, right: &Node, _operator: &str) -> SemanticResult<()> {
        left.accept(self)?;
        right.accept(self)
    }

    fn visit_variable(&mut self, name: &Ident) -> SemanticResult<()> {
        if !self.symbols.contains(&name.name) {
            return Err(SemanticError::undeclared(&name.name, name.span));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Span;
    use crate::sema::SymbolKind;

    /// x = y + z
    fn sample_tree() -> Node {
        Node::assignment(
            "x",
            Node::binary(Node::variable("y"), Node::variable("z"), "+"),
        )
    }

    fn names(analyzer: &SemanticAnalyzer) -> Vec<&str> {
        analyzer.symbols().names().collect()
    }

    #[test]
    fn test_seeded_operands_succeed() {
        let mut analyzer = SemanticAnalyzer::with_predeclared(["y", "z"]);
        analyzer.analyze(&sample_tree()).unwrap();

        assert_eq!(names(&analyzer), vec!["y", "z", "x"]);
        assert_eq!(analyzer.symbols().lookup("x").unwrap().kind, SymbolKind::Declared);
        assert_eq!(analyzer.symbols().lookup("y").unwrap().kind, SymbolKind::External);
    }

    #[test]
    fn test_empty_table_fails_on_left_operand() {
        let mut analyzer = SemanticAnalyzer::new();
        let err = analyzer.analyze(&sample_tree()).unwrap_err();

        assert!(matches!(&err, SemanticError::UndeclaredVariable { name, .. } if name == "y"));
        // The target was registered before the failure
        assert_eq!(names(&analyzer), vec!["x"]);
    }

    #[test]
    fn test_right_operand_checked_after_left() {
        let mut analyzer = SemanticAnalyzer::with_predeclared(["y"]);
        let err = analyzer.analyze(&sample_tree()).unwrap_err();
        assert!(matches!(&err, SemanticError::UndeclaredVariable { name, .. } if name == "z"));
    }

    #[test]
    fn test_duplicate_declaration() {
        // x = (x = y)
        let tree = Node::assignment("x", Node::assignment("x", Node::variable("y")));
        let mut analyzer = SemanticAnalyzer::with_predeclared(["y"]);
        let err = analyzer.analyze(&tree).unwrap_err();
        assert!(matches!(&err, SemanticError::DuplicateDeclaration { name, .. } if name == "x"));
    }

    #[test]
    fn test_assigning_seeded_name_is_duplicate() {
        let tree = Node::assignment("y", Node::variable("z"));
        let mut analyzer = SemanticAnalyzer::with_predeclared(["y", "z"]);
        let err = analyzer.analyze(&tree).unwrap_err();
        assert_eq!(err, SemanticError::duplicate("y", Span::default(), None));
    }

    #[test]
    fn test_duplicate_reports_previous_site() {
        let first = Node::assignment(Ident::new("a", Span::new(0, 1)), Node::variable("b"));
        let second = Node::assignment(Ident::new("a", Span::new(8, 9)), Node::variable("b"));
        let mut analyzer = SemanticAnalyzer::with_predeclared(["b"]);

        analyzer.analyze(&first).unwrap();
        let err = analyzer.analyze(&second).unwrap_err();
        assert_eq!(
            err,
            SemanticError::duplicate("a", Span::new(8, 9), Some(Span::new(0, 1)))
        );
    }

    #[test]
    fn test_second_analyze_is_not_idempotent() {
        let tree = sample_tree();

        let mut analyzer = SemanticAnalyzer::with_predeclared(["y", "z"]);
        analyzer.analyze(&tree).unwrap();
        let err = analyzer.analyze(&tree).unwrap_err();
        assert!(matches!(&err, SemanticError::DuplicateDeclaration { name, .. } if name == "x"));

        // A fresh analyzer accepts the same tree again
        let mut fresh = SemanticAnalyzer::with_predeclared(["y", "z"]);
        fresh.analyze(&tree).unwrap();
    }

    #[test]
    fn test_self_reference_is_accepted() {
        let tree = Node::assignment("x", Node::variable("x"));
        let mut analyzer = SemanticAnalyzer::new();
        analyzer.analyze(&tree).unwrap();
        assert_eq!(names(&analyzer), vec!["x"]);
    }

    #[test]
    fn test_nested_declaration_visible_to_later_siblings() {
        // x = (t = a) + t
        let tree = Node::assignment(
            "x",
            Node::binary(Node::assignment("t", Node::variable("a")), Node::variable("t"), "+"),
        );
        let mut analyzer = SemanticAnalyzer::with_predeclared(["a"]);
        analyzer.analyze(&tree).unwrap();
        assert_eq!(names(&analyzer), vec!["a", "x", "t"]);
    }

    #[test]
    fn test_use_before_nested_declaration_fails() {
        // x = t + (t = a)
        let tree = Node::assignment(
            "x",
            Node::binary(Node::variable("t"), Node::assignment("t", Node::variable("a")), "+"),
        );
        let mut analyzer = SemanticAnalyzer::with_predeclared(["a"]);
        let err = analyzer.analyze(&tree).unwrap_err();
        assert!(matches!(&err, SemanticError::UndeclaredVariable { name, .. } if name == "t"));
    }

    #[test]
    fn test_program_shares_one_table() {
        let program = Program::new(vec![
            Node::assignment("a", Node::variable("seed")),
            Node::assignment("b", Node::binary(Node::variable("a"), Node::variable("seed"), "*")),
            Node::assignment("c", Node::binary(Node::variable("a"), Node::variable("b"), "-")),
        ]);
        let mut analyzer = SemanticAnalyzer::with_predeclared(["seed"]);
        analyzer.analyze_program(&program).unwrap();
        assert_eq!(names(&analyzer), vec!["seed", "a", "b", "c"]);
    }

    #[test]
    fn test_program_stops_at_first_error() {
        let program = Program::new(vec![
            Node::assignment("a", Node::variable("missing")),
            Node::assignment("b", Node::variable("also_missing")),
        ]);
        let mut analyzer = SemanticAnalyzer::new();
        let err = analyzer.analyze_program(&program).unwrap_err();
        assert_eq!(err.name(), "missing");
        assert_eq!(names(&analyzer), vec!["a"]);
    }

    #[test]
    fn test_bare_use_does_not_declare() {
        let mut analyzer = SemanticAnalyzer::with_predeclared(["q"]);
        analyzer.analyze(&Node::variable("q")).unwrap();
        analyzer.analyze(&Node::variable("q")).unwrap();
        assert_eq!(analyzer.symbols().len(), 1);
    }

    #[test]
    fn test_reseeding_is_harmless() {
        let mut analyzer = SemanticAnalyzer::new();
        analyzer.declare_external("y");
        analyzer.declare_external("y");
        assert_eq!(names(&analyzer), vec!["y"]);
    }

    #[test]
    fn test_print_tree_leaves_table_alone() {
        let analyzer = SemanticAnalyzer::new();
        let rendered = analyzer.print_tree(&sample_tree());
        assert!(rendered.starts_with("Assignment\n"));
        assert!(analyzer.symbols().is_empty());
    }
}
