//! Node types

use crate::common::Span;

/// An identifier with its location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self { name: name.into(), span }
    }
}

impl From<&str> for Ident {
    fn from(name: &str) -> Self {
        Self::new(name, Span::default())
    }
}

/// An AST node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

/// Node kinds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Binding: x = value
    Assignment {
        variable: Ident,
        value: Box<Node>,
    },
    /// Binary operation: left op right
    BinaryOperation {
        left: Box<Node>,
        right: Box<Node>,
        /// Kept verbatim, never validated
        operator: String,
    },
    /// Use of a name
    Variable(Ident),
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn assignment(variable: impl Into<Ident>, value: Node) -> Self {
        let variable = variable.into();
        let span = variable.span.merge(value.span);
        Self::new(
            NodeKind::Assignment {
                variable,
                value: Box::new(value),
            },
            span,
        )
    }

    pub fn binary(left: Node, right: Node, operator: impl Into<String>) -> Self {
        let span = left.span.merge(right.span);
        Self::new(
            NodeKind::BinaryOperation {
                left: Box::new(left),
                right: Box::new(right),
                operator: operator.into(),
            },
            span,
        )
    }

    pub fn variable(name: impl Into<Ident>) -> Self {
        let ident = name.into();
        let span = ident.span;
        Self::new(NodeKind::Variable(ident), span)
    }

    /// Variant name, as shown in tree dumps
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Assignment { .. } => "Assignment",
            NodeKind::BinaryOperation { .. } => "BinaryOperation",
            NodeKind::Variable(_) => "Variable",
        }
    }
}

/// A parsed source file: statements in source order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Node>,
}

impl Program {
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }
}
