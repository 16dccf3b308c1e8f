//! Semantic analysis module
//!
//! Checks declaration-before-use and single declaration over one flat
//! namespace.

mod scope;
mod analyzer;

pub use scope::{Symbol, SymbolKind, SymbolTable};
pub use analyzer::SemanticAnalyzer;
