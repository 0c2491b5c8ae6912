//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of identifiers, integer literals, and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! It also provides the `TokenCursor`, the read position over the produced
//! token stream that the parser consumes.

pub mod cursor;
pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
