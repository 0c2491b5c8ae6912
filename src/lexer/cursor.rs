use crate::Position;

use super::tokens::{Token, TokenKind};

/// A read position over a token stream.
///
/// This is the full boundary the parser consumes: peek the current token's
/// kind or literal, consume it conditionally, or advance past it. The stream
/// always ends with an EOF token and the cursor never moves past it.
pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<Token>) -> TokenCursor {
        TokenCursor { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns true if the current token has the given kind. Does not advance.
    pub fn check_kind(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// If the current token's literal equals `literal`, advances past it and
    /// returns true; otherwise leaves the cursor untouched and returns false.
    pub fn consume(&mut self, literal: &str) -> bool {
        if self.current().kind != TokenKind::EOF && self.current().value == literal {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current token's literal payload without advancing.
    pub fn value(&self) -> &str {
        &self.current().value
    }

    /// Advances to the next token unconditionally, clamping at EOF.
    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    pub fn at_eof(&self) -> bool {
        self.check_kind(TokenKind::EOF)
    }

    /// Source position of the current token, for error reporting.
    pub fn position(&self) -> Position {
        self.current().span.start.clone()
    }
}
