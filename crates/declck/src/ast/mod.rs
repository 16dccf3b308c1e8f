//! AST definitions for assignment programs
//!
//! The node set is closed: every consumer walks it through [`Visitor`],
//! which has one required method per variant.

mod node;
mod visit;

pub use node::*;
pub use visit::Visitor;
