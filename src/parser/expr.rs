use crate::{
    ast::{
        ast::{ExprWrapper, Node},
        expressions::{
            Boolean, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral,
            PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser, stmt::parse_block};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { token: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than `bp`, fold it into the left operand
    while !parser.peek_token_is(TokenKind::Semicolon) && parser.peek_binding_power() > bp {
        let Some(led) = parser.get_led_lookup().get(&parser.peek_token().kind).copied() else {
            return Ok(left);
        };
        let led_bp = parser.peek_binding_power();

        parser.next_token();
        left = led(parser, left, led_bp)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    Ok(ExprWrapper::new(Identifier {
        value: token.literal.clone(),
        token,
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    let value = token.literal.parse::<i64>().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.literal.clone(),
            },
            parser.get_position(),
        )
    })?;

    Ok(ExprWrapper::new(IntegerLiteral { token, value }))
}

pub fn parse_boolean(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    Ok(ExprWrapper::new(Boolean {
        value: parser.current_token_is(TokenKind::True),
        token: parser.current_token().clone(),
    }))
}

pub fn parse_illegal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    Err(Error::new(
        ErrorImpl::UnrecognisedToken {
            token: parser.current_token().literal.clone(),
        },
        parser.get_position(),
    ))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, BindingPower::Unary)?;

    Ok(ExprWrapper::new(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token.literal.clone(),
        token: operator_token,
        right,
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: ExprWrapper, bp: BindingPower) -> Result<ExprWrapper, Error> {
    let operator_token = parser.current_token().clone();
    parser.next_token();

    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        operator: operator_token.literal.clone(),
        token: operator_token,
        left,
        right,
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    parser.next_token();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.next_token();
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.next_token();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    let end = alternative
        .as_ref()
        .unwrap_or(&consequence)
        .span
        .end
        .clone();

    Ok(ExprWrapper::new(IfExpr {
        span: Span {
            start: token.span.start.clone(),
            end,
        },
        token,
        condition,
        consequence,
        alternative,
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block(parser)?;

    Ok(ExprWrapper::new(FunctionLiteral {
        span: Span {
            start: token.span.start.clone(),
            end: body.span.end.clone(),
        },
        token,
        parameters,
        body,
    }))
}

/// Parses `<ident>, <ident>, ... )` with `current` on the opening `(`.
fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.next_token();
        return Ok(parameters);
    }

    loop {
        let token = parser.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier {
            value: token.literal.clone(),
            token,
        });

        if !parser.peek_token_is(TokenKind::Comma) {
            break;
        }
        parser.next_token();
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, callee: ExprWrapper, _bp: BindingPower) -> Result<ExprWrapper, Error> {
    let token = parser.current_token().clone();
    let arguments = parse_expression_list(parser, TokenKind::CloseParen)?;

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: callee.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token,
        callee,
        arguments,
    }))
}

/// Parses a possibly empty, comma separated list of expressions closed by `end`.
fn parse_expression_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<ExprWrapper>, Error> {
    let mut arguments = vec![];

    if parser.peek_token_is(end) {
        parser.next_token();
        return Ok(arguments);
    }

    parser.next_token();
    arguments.push(parse_expr(parser, BindingPower::Default)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        arguments.push(parse_expr(parser, BindingPower::Default)?);
    }

    parser.expect_peek(end)?;

    Ok(arguments)
}
