//! Unit tests for AST rendering, built from hand-assembled nodes.

use std::rc::Rc;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    ast::{Expr, ExprType, ExprWrapper, Node, Program, Stmt, StmtType, StmtWrapper},
    expressions::{Boolean, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn span() -> Span {
    Span {
        start: Position::null(),
        end: Position::null(),
    }
}

fn token(kind: TokenKind, literal: &str) -> Token {
    Token {
        kind,
        literal: literal.to_string(),
        span: span(),
    }
}

fn ident(name: &str) -> Identifier {
    Identifier {
        token: token(TokenKind::Identifier, name),
        value: name.to_string(),
    }
}

fn int(value: i64) -> IntegerLiteral {
    IntegerLiteral {
        token: token(TokenKind::Integer, &value.to_string()),
        value,
    }
}

fn infix(left: ExprWrapper, operator: &str, right: ExprWrapper) -> ExprWrapper {
    ExprWrapper::new(InfixExpr {
        token: token(TokenKind::Plus, operator),
        left,
        operator: operator.to_string(),
        right,
        span: span(),
    })
}

fn block(statements: Vec<StmtWrapper>) -> BlockStmt {
    BlockStmt {
        token: token(TokenKind::OpenCurly, "{"),
        statements,
        span: span(),
    }
}

fn expression_stmt(expression: ExprWrapper) -> StmtWrapper {
    StmtWrapper::new(ExpressionStmt {
        token: token(TokenKind::Identifier, expression.token_literal()),
        expression,
        span: span(),
    })
}

#[test]
fn test_let_statement_string() {
    let program = Program {
        statements: vec![StmtWrapper::new(LetStmt {
            token: token(TokenKind::Let, "let"),
            name: ident("myVar"),
            value: ExprWrapper::new(ident("anotherVar")),
            span: span(),
        })],
    };

    assert_eq!(program.to_string(), "let myVar = anotherVar;");
    assert_eq!(program.token_literal(), "let");
}

#[test]
fn test_return_statement_string() {
    let stmt = ReturnStmt {
        token: token(TokenKind::Return, "return"),
        value: ExprWrapper::new(int(10)),
        span: span(),
    };

    assert_eq!(stmt.to_string(), "return 10;");
    assert_eq!(stmt.get_stmt_type(), StmtType::ReturnStmt);
}

#[test]
fn test_prefix_and_infix_parenthesised() {
    let negated = ExprWrapper::new(PrefixExpr {
        token: token(TokenKind::Dash, "-"),
        operator: "-".to_string(),
        right: ExprWrapper::new(ident("a")),
        span: span(),
    });
    let product = infix(negated, "*", ExprWrapper::new(ident("b")));

    assert_eq!(product.to_string(), "((-a) * b)");
    assert_eq!(product.get_expr_type(), ExprType::Infix);
}

#[test]
fn test_if_expression_string() {
    let condition = infix(ExprWrapper::new(ident("x")), "<", ExprWrapper::new(ident("y")));
    let mut expr = IfExpr {
        token: token(TokenKind::If, "if"),
        condition,
        consequence: block(vec![expression_stmt(ExprWrapper::new(ident("x")))]),
        alternative: None,
        span: span(),
    };

    assert_eq!(expr.to_string(), "if(x < y) x");

    expr.alternative = Some(block(vec![expression_stmt(ExprWrapper::new(ident("y")))]));
    assert_eq!(expr.to_string(), "if(x < y) x else y");
}

#[test]
fn test_function_literal_string() {
    let body = block(vec![expression_stmt(infix(
        ExprWrapper::new(ident("x")),
        "+",
        ExprWrapper::new(ident("y")),
    ))]);
    let function = FunctionLiteral {
        token: token(TokenKind::Fn, "fn"),
        parameters: vec![ident("x"), ident("y")],
        body,
        span: span(),
    };

    assert_eq!(function.to_string(), "fn(x, y)(x + y)");
    assert_eq!(function.token_literal(), "fn");
}

#[test]
fn test_call_expression_string() {
    let call = CallExpr {
        token: token(TokenKind::OpenParen, "("),
        callee: ExprWrapper::new(ident("add")),
        arguments: vec![
            ExprWrapper::new(int(1)),
            infix(ExprWrapper::new(int(2)), "*", ExprWrapper::new(int(3))),
        ],
        span: span(),
    };

    assert_eq!(call.to_string(), "add(1, (2 * 3))");
}

#[test]
fn test_boolean_string() {
    let boolean = Boolean {
        token: token(TokenKind::False, "false"),
        value: false,
    };

    assert_eq!(boolean.to_string(), "false");
}

#[test]
fn test_empty_program() {
    let program = Program::default();

    assert!(program.is_empty());
    assert_eq!(program.to_string(), "");
    assert_eq!(program.token_literal(), "");
}

#[test]
fn test_downcast_through_wrapper() {
    let stmt = expression_stmt(ExprWrapper::new(int(5)));

    assert_eq!(stmt.get_stmt_type(), StmtType::ExpressionStmt);
    let expression_stmt = stmt.downcast::<ExpressionStmt>().unwrap();
    let literal = expression_stmt.expression.downcast::<IntegerLiteral>().unwrap();
    assert_eq!(literal.value, 5);
    assert!(stmt.downcast::<LetStmt>().is_none());
}
