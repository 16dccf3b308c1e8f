//! Type-directed dispatch over [`Node`]

use super::{Ident, Node, NodeKind};

/// A pass over the AST.
///
/// Each variant has its own required method, so a visitor that forgets a
/// variant does not compile. Recursion into children is up to the
/// implementor, which lets a pass pick its own traversal order.
pub trait Visitor {
    type Output;

    /// Visit `variable = value`
    fn visit_assignment(&mut self, variable: &Ident, value: &Node) -> Self::Output;

    /// Visit `left operator right`
    fn visit_binary_operation(&mut self, left: &Node, right: &Node, operator: &str) -> Self::Output;

    /// Visit a use of `name`
    fn visit_variable(&mut self, name: &Ident) -> Self::Output;
}

impl Node {
    /// Route this node to the visitor method for its variant
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match &self.kind {
            NodeKind::Assignment { variable, value } => visitor.visit_assignment(variable, value),
            NodeKind::BinaryOperation { left, right, operator } => {
                visitor.visit_binary_operation(left, right, operator)
            }
            NodeKind::Variable(name) => visitor.visit_variable(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the order in which nodes are reached
    struct Trace(Vec<String>);

    impl Visitor for Trace {
        type Output = ();

        fn visit_assignment(&mut self, variable: &Ident, value: &Node) {
            self.0.push(format!("assign {}", variable.name));
            value.accept(self);
        }

        fn visit_binary_operation(&mut self, left: &Node, right: &Node, operator: &str) {
            self.0.push(format!("binary {}", operator));
            left.accept(self);
            right.accept(self);
        }

        fn visit_variable(&mut self, name: &Ident) {
            self.0.push(format!("var {}", name.name));
        }
    }

    #[test]
    fn test_dispatch_by_variant() {
        let tree = Node::assignment(
            "x",
            Node::binary(Node::variable("y"), Node::variable("z"), "+"),
        );
        let mut trace = Trace(Vec::new());
        tree.accept(&mut trace);
        assert_eq!(trace.0, vec!["assign x", "binary +", "var y", "var z"]);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(Node::variable("a").kind_name(), "Variable");
        let bin = Node::binary(Node::variable("a"), Node::variable("b"), "*");
        assert_eq!(bin.kind_name(), "BinaryOperation");
        assert_eq!(Node::assignment("c", bin).kind_name(), "Assignment");
    }

    #[test]
    fn test_operator_is_not_validated() {
        let bin = Node::binary(Node::variable("a"), Node::variable("b"), "<=>");
        match &bin.kind {
            NodeKind::BinaryOperation { operator, .. } => assert_eq!(operator, "<=>"),
            _ => panic!("expected binary operation"),
        }
    }
}
