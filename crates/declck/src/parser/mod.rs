//! Recursive descent parser producing [`crate::ast::Program`]

mod parser;

pub use parser::{Parser, MAX_NESTING_DEPTH};
