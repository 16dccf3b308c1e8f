//! declck - declaration checker for a small assignment language
//!
//! The core is a visitor-based analyzer that walks an AST of assignments,
//! binary operations and variable uses, and enforces two rules over a single
//! flat namespace: a name must be declared before it is used, and a name may
//! be declared only once.
//!
//! ## Architecture
//!
//! - **AST** (`ast/`): closed node set and the [`ast::Visitor`] trait
//! - **Semantic analysis** (`sema/`): symbol table and the analyzer
//! - **Printer** (`printer`): indented tree dumps
//! - **Front end** (`lexer/`, `parser/`): text to AST
//! - **Driver** (`driver/`): the end-to-end check pipeline
//! - **Common** (`common/`): errors, spans, diagnostics

pub mod common;
pub mod ast;
pub mod sema;
pub mod printer;
pub mod lexer;
pub mod parser;
pub mod driver;

// Re-exports for convenience
pub use common::{CompileError, CompileResult, DiagnosticReporter, SemanticError, SemanticResult, Span};
pub use ast::{Ident, Node, NodeKind, Program, Visitor};
pub use sema::{SemanticAnalyzer, Symbol, SymbolKind, SymbolTable};
pub use driver::{check_source, CheckConfig, CheckContext, CheckReport};
