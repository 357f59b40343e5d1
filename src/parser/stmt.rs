use crate::{
    ast::{
        ast::{Node, StmtWrapper},
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();

    let name_token = parser.expect_peek(TokenKind::Identifier)?;
    let name = Identifier {
        value: name_token.literal.clone(),
        token: name_token,
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(StmtWrapper::new(LetStmt {
        span: Span {
            start: token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token,
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();
    parser.next_token();

    let value = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(StmtWrapper::new(ReturnStmt {
        span: Span {
            start: token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token,
        value,
    }))
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let token = parser.current_token().clone();

    let expression = parse_expr(parser, BindingPower::Default)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Ok(StmtWrapper::new(ExpressionStmt {
        span: Span {
            start: expression.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token,
        expression,
    }))
}

/// Parses `{ <stmt>* }` with `current` on the opening brace.
///
/// Statements that fail inside the block are recorded and skipped up to the
/// next `;` or the closing brace, so the enclosing expression survives.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let token = parser.current_token().clone();
    parser.next_token();

    let mut statements = Vec::new();
    while !parser.current_token_is(TokenKind::CloseCurly) && !parser.current_token_is(TokenKind::EOF) {
        match parse_stmt(parser) {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                parser.record_error(error);
                parser.synchronize(&[TokenKind::Semicolon, TokenKind::CloseCurly]);
                if parser.current_token_is(TokenKind::CloseCurly) {
                    continue;
                }
            }
        }
        parser.next_token();
    }

    if parser.current_token_is(TokenKind::EOF) {
        return Err(Error::new(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::CloseCurly,
                received: TokenKind::EOF,
            },
            parser.get_position(),
        ));
    }

    Ok(BlockStmt {
        span: Span {
            start: token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token,
        statements,
    })
}
