//! Lexer module for tokenizing assignment programs

mod token;
mod scanner;

pub use token::{Token, TokenKind};
pub use scanner::Lexer;
