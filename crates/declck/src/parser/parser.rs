//! Recursive descent parser for assignment programs

use crate::ast::*;
use crate::common::{CompileError, CompileResult};
use crate::lexer::{Lexer, Token, TokenKind};

/// Deepest expression the parser accepts
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive descent parser
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    nesting: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source
    pub fn new(source: &'a str) -> CompileResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current, nesting: 0 })
    }

    /// Parse a complete program. The final statement may omit its `;`.
    pub fn parse(&mut self) -> CompileResult<Program> {
        let mut statements = Vec::new();

        while !self.at_end() {
            if self.match_token(&TokenKind::Semi)? {
                continue;
            }
            statements.push(self.parse_expression()?);
            if !self.at_end() {
                self.expect(TokenKind::Semi)?;
            }
        }

        Ok(Program::new(statements))
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }

    fn advance(&mut self) -> CompileResult<Token> {
        let prev = std::mem::replace(&mut self.current, self.lexer.next_token()?);
        Ok(prev)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    fn match_token(&mut self, kind: &TokenKind) -> CompileResult<bool> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn expect(&mut self, kind: TokenKind) -> CompileResult<Token> {
        if self.check(&kind) {
            self.advance()
        } else {
            Err(CompileError::parser(
                format!("expected {}, found {}", kind, self.current.kind),
                self.current.span,
            ))
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Assignment is right-associative and binds loosest
    fn parse_expression(&mut self) -> CompileResult<Node> {
        self.parse_nested().map(|(node, _)| node)
    }

    /// Parse an expression, returning it with its height
    fn parse_nested(&mut self) -> CompileResult<(Node, usize)> {
        if self.nesting >= MAX_NESTING_DEPTH {
            return Err(CompileError::parser("expression nested too deeply", self.current.span));
        }
        self.nesting += 1;
        let result = self.parse_assignment();
        self.nesting -= 1;
        result
    }

    fn parse_assignment(&mut self) -> CompileResult<(Node, usize)> {
        let (left, height) = self.parse_additive()?;

        if !self.check(&TokenKind::Eq) {
            return Ok((left, height));
        }
        let eq = self.advance()?;

        let variable = match left.kind {
            NodeKind::Variable(ident) => ident,
            _ => {
                return Err(CompileError::parser(
                    "invalid assignment target, expected a variable name",
                    left.span.merge(eq.span),
                ));
            }
        };
        let (value, value_height) = self.parse_nested()?;
        let height = self.grow(value_height, &value)?;
        Ok((Node::assignment(variable, value), height))
    }

    fn parse_additive(&mut self) -> CompileResult<(Node, usize)> {
        let (mut left, mut height) = self.parse_term()?;

        while matches!(self.current.kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.advance()?;
            let (right, right_height) = self.parse_term()?;
            left = Node::binary(left, right, Self::operator(&op));
            height = self.grow(height.max(right_height), &left)?;
        }

        Ok((left, height))
    }

    fn parse_term(&mut self) -> CompileResult<(Node, usize)> {
        let (mut left, mut height) = self.parse_primary()?;

        while matches!(self.current.kind, TokenKind::Star | TokenKind::Slash) {
            let op = self.advance()?;
            let (right, right_height) = self.parse_primary()?;
            left = Node::binary(left, right, Self::operator(&op));
            height = self.grow(height.max(right_height), &left)?;
        }

        Ok((left, height))
    }

    fn parse_primary(&mut self) -> CompileResult<(Node, usize)> {
        let span = self.current.span;

        match &self.current.kind {
            TokenKind::Identifier(name) => {
                let ident = Ident::new(name.clone(), span);
                self.advance()?;
                Ok((Node::variable(ident), 1))
            }
            TokenKind::LParen => {
                self.advance()?;
                let (mut inner, height) = self.parse_nested()?;
                let close = self.expect(TokenKind::RParen)?;
                inner.span = span.merge(close.span);
                Ok((inner, height))
            }
            other => Err(CompileError::parser(
                format!("expected expression, found {}", other),
                span,
            )),
        }
    }

    /// Height of a node one level above a child of height `child`.
    /// Every later pass walks the tree recursively, so its height is capped.
    fn grow(&self, child: usize, node: &Node) -> CompileResult<usize> {
        if child >= MAX_NESTING_DEPTH {
            return Err(CompileError::parser("expression nested too deeply", node.span));
        }
        Ok(child + 1)
    }

    fn operator(token: &Token) -> &'static str {
        token.kind.operator_symbol().unwrap_or("?")
    }
}
