//! Unit tests for the lexer module.

use super::cursor::TokenCursor;
use super::lexer::tokenize;
use super::tokens::TokenKind;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.expr".to_string()))
        .unwrap()
        .iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_assignment() {
    assert_eq!(
        kinds("a = 1;"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_two_char_operators() {
    assert_eq!(
        kinds("a<=b >= c == d != e"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::GreaterEquals,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::Identifier,
            TokenKind::NotEquals,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_single_char_operators() {
    assert_eq!(
        kinds("(1 + 2) * 3 / 4 - 5 < 6 > 7;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::CloseParen,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Slash,
            TokenKind::Number,
            TokenKind::Dash,
            TokenKind::Number,
            TokenKind::Less,
            TokenKind::Number,
            TokenKind::Greater,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_skips_comments_and_whitespace() {
    assert_eq!(
        kinds("1 + 2 // trailing comment"),
        vec![
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_values_and_spans() {
    let tokens = tokenize("ab + 12".to_string(), Some("test.expr".to_string())).unwrap();

    assert_eq!(tokens[0].value, "ab");
    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);

    assert_eq!(tokens[2].value, "12");
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 7);
}

#[test]
fn test_tokenize_unrecognised_character() {
    let result = tokenize("1 $ 2".to_string(), Some("test.expr".to_string()));

    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().0, 2);
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("".to_string(), Some("test.expr".to_string())).unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_cursor_check_and_consume() {
    let tokens = tokenize("a = 1".to_string(), Some("test.expr".to_string())).unwrap();
    let mut cursor = TokenCursor::new(tokens);

    assert!(cursor.check_kind(TokenKind::Identifier));
    assert_eq!(cursor.value(), "a");

    // A failed consume leaves the cursor untouched.
    assert!(!cursor.consume("="));
    assert_eq!(cursor.value(), "a");

    cursor.advance();
    assert!(cursor.consume("="));
    assert!(cursor.check_kind(TokenKind::Number));
    assert_eq!(cursor.value(), "1");
}

#[test]
fn test_cursor_clamps_at_eof() {
    let tokens = tokenize("1".to_string(), Some("test.expr".to_string())).unwrap();
    let mut cursor = TokenCursor::new(tokens);

    cursor.advance();
    assert!(cursor.at_eof());

    cursor.advance();
    cursor.advance();
    assert!(cursor.at_eof());

    // EOF is never consumed by literal.
    assert!(!cursor.consume("EOF"));
}
