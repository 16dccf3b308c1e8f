//! Common infrastructure shared by the front end, the analyzer and the driver

mod error;
mod span;

pub use error::{CompileError, CompileResult, DiagnosticReporter, SemanticError, SemanticResult};
pub use span::Span;
