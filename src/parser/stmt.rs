use crate::{
    ast::node::Node,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{expr::parse_expression, parser::Parser};

/// program = statement* EOF
pub fn parse_program(parser: &mut Parser) -> Result<Vec<Node>, Error> {
    let mut nodes = vec![];

    while !parser.check_kind(TokenKind::EOF) {
        nodes.push(parse_stmt(parser)?);
    }

    Ok(nodes)
}

/// statement = expression ";"
pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let node = parse_expression(parser)?;

    if !parser.consume(";") {
        return Err(Error::new(
            ErrorImpl::UnterminatedStatement {
                token: parser.value().to_string(),
            },
            parser.position(),
        ));
    }

    Ok(node)
}
