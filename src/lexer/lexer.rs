use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::tokens::{Token, TokenKind, OPERATOR_LOOKUP};

pub type PatternHandler = fn(&mut Lexer, &Regex);

struct LexPattern {
    regex: Regex,
    handler: PatternHandler,
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn span_here(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos as u32, Rc::clone(&self.file)),
            end: Position((self.pos + len) as u32, Rc::clone(&self.file)),
        }
    }
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let token = Token::new(TokenKind::Number, matched.clone(), lexer.span_here(matched.len()));
    lexer.push(token);
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let token = Token::new(TokenKind::Identifier, matched.clone(), lexer.span_here(matched.len()));
    lexer.push(token);
    lexer.advance_n(matched.len());
}

fn operator_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    // The operator regex lists two-character alternatives first, so the
    // matched text is always a key of OPERATOR_LOOKUP.
    let kind = *OPERATOR_LOOKUP.get(matched.as_str()).unwrap();

    let token = Token::new(kind, matched.clone(), lexer.span_here(matched.len()));
    lexer.push(token);
    lexer.advance_n(matched.len());
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched);
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let patterns = vec![
        LexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        LexPattern { regex: Regex::new("[0-9]+").unwrap(), handler: number_handler },
        LexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
        LexPattern { regex: Regex::new("//.*").unwrap(), handler: skip_handler },
        LexPattern { regex: Regex::new("==|!=|<=|>=|[-+*/<>=();]").unwrap(), handler: operator_handler },
    ];

    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in patterns.iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if let Some(found) = match_here {
                if found.start() == 0 {
                    (pattern.handler)(&mut lex, &pattern.regex);
                    matched = true;
                    break;
                }
            }
        }

        if !matched {
            let offending = lex.remainder().chars().next().unwrap_or('\0');
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken { token: offending.to_string() },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    let eof = Token::new(TokenKind::EOF, String::from("EOF"), lex.span_here(0));
    lex.push(eof);
    Ok(lex.tokens)
}
