//! Expression grammar, one function per precedence level.
//!
//! Each left-associative level parses one operand at the next-higher
//! precedence, then loops folding further operands into a binary node with
//! the prior result as the left child. `parse_assign` instead recurses into
//! itself for its right-hand side, giving assignment right associativity.

use crate::{
    ast::node::{Node, NodeKind},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// expression = assign
pub fn parse_expression(parser: &mut Parser) -> Result<Node, Error> {
    parse_assign(parser)
}

/// assign = equality ( "=" assign )?
pub fn parse_assign(parser: &mut Parser) -> Result<Node, Error> {
    let node = parse_equality(parser)?;

    if parser.consume("=") {
        let rhs = parse_assign(parser)?;
        return Ok(Node::binary("=", NodeKind::Assign, node, rhs));
    }

    Ok(node)
}

/// equality = relation ( ("==" | "!=") relation )*
pub fn parse_equality(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_relation(parser)?;

    loop {
        if parser.consume("==") {
            node = Node::binary("==", NodeKind::Equal, node, parse_relation(parser)?);
        } else if parser.consume("!=") {
            node = Node::binary("!=", NodeKind::NotEqual, node, parse_relation(parser)?);
        } else {
            return Ok(node);
        }
    }
}

/// relation = add ( (">" | ">=" | "<" | "<=") add )*
///
/// The two-character operators are tried before their one-character
/// prefixes, so `>=` is never consumed as `>`.
pub fn parse_relation(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_add(parser)?;

    loop {
        if parser.consume(">=") {
            node = Node::binary(">=", NodeKind::GreaterEqual, node, parse_add(parser)?);
        } else if parser.consume(">") {
            node = Node::binary(">", NodeKind::Greater, node, parse_add(parser)?);
        } else if parser.consume("<=") {
            node = Node::binary("<=", NodeKind::LowerEqual, node, parse_add(parser)?);
        } else if parser.consume("<") {
            node = Node::binary("<", NodeKind::Lower, node, parse_add(parser)?);
        } else {
            return Ok(node);
        }
    }
}

/// add = mul ( ("+" | "-") mul )*
pub fn parse_add(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_mul(parser)?;

    loop {
        if parser.consume("+") {
            node = Node::binary("+", NodeKind::Add, node, parse_mul(parser)?);
        } else if parser.consume("-") {
            node = Node::binary("-", NodeKind::Sub, node, parse_mul(parser)?);
        } else {
            return Ok(node);
        }
    }
}

/// mul = unary ( ("*" | "/") unary )*
pub fn parse_mul(parser: &mut Parser) -> Result<Node, Error> {
    let mut node = parse_unary(parser)?;

    loop {
        if parser.consume("*") {
            node = Node::binary("*", NodeKind::Mul, node, parse_unary(parser)?);
        } else if parser.consume("/") {
            node = Node::binary("/", NodeKind::Div, node, parse_unary(parser)?);
        } else {
            return Ok(node);
        }
    }
}

/// unary = ("+" | "-")? primary
///
/// A leading `-` desugars into `0 - primary`; a leading `+` is a no-op.
pub fn parse_unary(parser: &mut Parser) -> Result<Node, Error> {
    if parser.consume("+") {
        return parse_primary(parser);
    }

    if parser.consume("-") {
        let rhs = parse_primary(parser)?;
        return Ok(Node::binary("-", NodeKind::Sub, Node::number(0), rhs));
    }

    parse_primary(parser)
}

/// primary = NUMBER | IDENTIFIER | "(" expression ")"
pub fn parse_primary(parser: &mut Parser) -> Result<Node, Error> {
    if parser.consume("(") {
        let node = parse_expression(parser)?;
        if !parser.consume(")") {
            return Err(Error::new(
                ErrorImpl::UnbalancedParenthesis {
                    token: parser.value().to_string(),
                },
                parser.position(),
            ));
        }
        return Ok(node);
    }

    if parser.check_kind(TokenKind::Identifier) {
        let name = parser.value().to_string();
        parser.advance();

        return Ok(parser.local_var_node(&name));
    }

    if !parser.check_kind(TokenKind::Number) {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.value().to_string(),
            },
            parser.position(),
        ));
    }

    let literal = parser.value().to_string();
    let position = parser.position();
    parser.advance();

    match literal.parse::<i64>() {
        Ok(value) => Ok(Node::number(value)),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError { token: literal },
            position,
        )),
    }
}
