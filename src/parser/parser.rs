//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct. The grammar itself lives in
//! `stmt.rs` and `expr.rs` as one function per precedence level; the struct
//! here owns the two pieces of mutable parsing state those functions thread
//! through the descent:
//!
//! - the token cursor over the lexed input
//! - the local variable table assigning each distinct identifier a stable
//!   stack-frame offset on first sight

use crate::{
    ast::node::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        cursor::TokenCursor,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{locals::LocalVariables, stmt::parse_program};

/// The parser state: a cursor over the token stream plus the local variable
/// table. Both are owned by this instance alone, so independent parses never
/// interfere with each other.
pub struct Parser {
    cursor: TokenCursor,
    locals: LocalVariables,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            locals: LocalVariables::new(),
        }
    }

    /// Parses the whole token stream into a sequence of statement trees.
    ///
    /// Fails if any grammar expectation is violated, or if tokens remain
    /// after the program grammar completes. There is no recovery: the first
    /// violated expectation aborts the parse.
    pub fn run(&mut self) -> Result<Vec<Node>, Error> {
        let nodes = parse_program(self)?;

        if !self.cursor.at_eof() {
            return Err(Error::new(
                ErrorImpl::TrailingTokens {
                    token: self.cursor.value().to_string(),
                },
                self.position(),
            ));
        }

        Ok(nodes)
    }

    /// The final stack-frame layout, valid once `run` has returned Ok.
    pub fn locals(&self) -> &LocalVariables {
        &self.locals
    }

    /// Builds a `LocalVar` node for `name`, reusing the variable's existing
    /// stack slot or allocating the next one on first sight.
    pub(crate) fn local_var_node(&mut self, name: &str) -> Node {
        let offset = self.locals.lookup_or_allocate(name);
        Node::local_var(name, offset)
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.cursor.check_kind(kind)
    }

    pub(crate) fn consume(&mut self, literal: &str) -> bool {
        self.cursor.consume(literal)
    }

    pub(crate) fn value(&self) -> &str {
        self.cursor.value()
    }

    pub(crate) fn advance(&mut self) {
        self.cursor.advance()
    }

    pub(crate) fn position(&self) -> Position {
        self.cursor.position()
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. The parser instance is returned
/// alongside the result so callers can read the final local variable table,
/// which describes the stack slot each distinct variable name occupies.
pub fn parse(tokens: Vec<Token>) -> (Parser, Result<Vec<Node>, Error>) {
    let mut parser = Parser::new(tokens);
    let result = parser.run();
    (parser, result)
}
