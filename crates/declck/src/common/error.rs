//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{Buffer, ColorChoice, StandardStream};
use thiserror::Error;
use super::Span;

/// A violation of the declaration rules found while walking a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    #[error("variable \"{name}\" already declared")]
    DuplicateDeclaration {
        name: String,
        span: Span,
        /// Where the name was first declared, if it came from source
        previous: Option<Span>,
    },

    #[error("variable \"{name}\" is not declared")]
    UndeclaredVariable { name: String, span: Span },
}

impl SemanticError {
    pub fn duplicate(name: impl Into<String>, span: Span, previous: Option<Span>) -> Self {
        Self::DuplicateDeclaration {
            name: name.into(),
            span,
            previous,
        }
    }

    pub fn undeclared(name: impl Into<String>, span: Span) -> Self {
        Self::UndeclaredVariable {
            name: name.into(),
            span,
        }
    }

    /// The identifier the error is about
    pub fn name(&self) -> &str {
        match self {
            Self::DuplicateDeclaration { name, .. } | Self::UndeclaredVariable { name, .. } => name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::DuplicateDeclaration { span, .. } | Self::UndeclaredVariable { span, .. } => *span,
        }
    }
}

pub type SemanticResult<T> = Result<T, SemanticError>;

/// Any error produced while checking a source file
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Lexer error at {span:?}: {message}")]
    Lexer { message: String, span: Span },

    #[error("Parser error at {span:?}: {message}")]
    Parser { message: String, span: Span },

    #[error("Semantic error: {0}")]
    Semantic(#[from] SemanticError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub fn lexer(message: impl Into<String>, span: Span) -> Self {
        Self::Lexer {
            message: message.into(),
            span,
        }
    }

    pub fn parser(message: impl Into<String>, span: Span) -> Self {
        Self::Parser {
            message: message.into(),
            span,
        }
    }

    /// True for errors in the checked program itself, as opposed to
    /// malformed input text or I/O failures
    pub fn is_semantic(&self) -> bool {
        matches!(self, Self::Semantic(_))
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn report_error(&self, file_id: usize, error: &CompileError) {
        let diagnostic = Self::diagnostic(file_id, error);
        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &diagnostic);
    }

    /// Render a diagnostic without colors, as it would appear on stderr
    pub fn render(&self, file_id: usize, error: &CompileError) -> String {
        let diagnostic = Self::diagnostic(file_id, error);
        let mut buffer = Buffer::no_color();
        let _ = term::emit(&mut buffer, &self.config, &self.files, &diagnostic);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    fn diagnostic(file_id: usize, error: &CompileError) -> Diagnostic<usize> {
        match error {
            CompileError::Lexer { message, span } => Diagnostic::error()
                .with_message("Lexer error")
                .with_labels(vec![
                    Label::primary(file_id, *span).with_message(message)
                ]),

            CompileError::Parser { message, span } => Diagnostic::error()
                .with_message("Syntax error")
                .with_labels(vec![
                    Label::primary(file_id, *span).with_message(message)
                ]),

            CompileError::Semantic(err @ SemanticError::DuplicateDeclaration { span, previous, .. }) => {
                let mut labels = vec![
                    Label::primary(file_id, *span).with_message(err.to_string())
                ];
                if let Some(previous) = previous {
                    labels.push(
                        Label::secondary(file_id, *previous).with_message("previously declared here"),
                    );
                }
                Diagnostic::error()
                    .with_message("Semantic error")
                    .with_labels(labels)
            }

            CompileError::Semantic(err @ SemanticError::UndeclaredVariable { span, .. }) => {
                Diagnostic::error()
                    .with_message("Semantic error")
                    .with_labels(vec![
                        Label::primary(file_id, *span).with_message(err.to_string())
                    ])
                    .with_notes(vec![format!(
                        "\"{}\" must be assigned before it is used",
                        err.name()
                    )])
            }

            CompileError::Io(err) => {
                Diagnostic::error().with_message(format!("IO error: {}", err))
            }
        }
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
