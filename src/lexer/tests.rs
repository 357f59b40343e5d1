//! Unit tests for the lexer module.

use super::{
    lexer::{tokenize, Lexer},
    tokens::{lookup_identifier, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.monkey".to_string()))
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "fn let true false if else return".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Fn);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::True);
    assert_eq!(tokens[3].kind, TokenKind::False);
    assert_eq!(tokens[4].kind, TokenKind::If);
    assert_eq!(tokens[5].kind, TokenKind::Else);
    assert_eq!(tokens[6].kind, TokenKind::Return);
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_lookup_identifier() {
    assert_eq!(lookup_identifier("let"), TokenKind::Let);
    assert_eq!(lookup_identifier("fn"), TokenKind::Fn);
    assert_eq!(lookup_identifier("lets"), TokenKind::Identifier);
    assert_eq!(lookup_identifier("Let"), TokenKind::Identifier);
    assert_eq!(lookup_identifier(""), TokenKind::Identifier);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar _underscore CamelCase ALLCAPS".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].literal, "bar");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].literal, "_underscore");
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].literal, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].literal, "ALLCAPS");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_identifier_stops_at_digit() {
    let tokens = tokenize("abc123".to_string(), None);

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].literal, "abc");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].literal, "123");
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_integers() {
    let source = "42 0 1000".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Integer);
    assert_eq!(tokens[0].literal, "42");
    assert_eq!(tokens[1].kind, TokenKind::Integer);
    assert_eq!(tokens[1].literal, "0");
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[2].literal, "1000");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("= + - ! * / < > == !="),
        vec![
            TokenKind::Assignment,
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Not,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_double_character_operators_without_spaces() {
    let tokens = tokenize("a==b!=!c".to_string(), None);
    let literals: Vec<&str> = tokens.iter().map(|token| token.literal.as_str()).collect();

    assert_eq!(literals, vec!["a", "==", "b", "!=", "!", "c", ""]);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } , ;"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_simple_program() {
    let source = "let x = 42;".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].literal, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[3].literal, "42");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_function_literal() {
    let source = "let add = fn(x, y) { x + y; };".to_string();
    let tokens = tokenize(source, None);
    let expected = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "add"),
        (TokenKind::Assignment, "="),
        (TokenKind::Fn, "fn"),
        (TokenKind::OpenParen, "("),
        (TokenKind::Identifier, "x"),
        (TokenKind::Comma, ","),
        (TokenKind::Identifier, "y"),
        (TokenKind::CloseParen, ")"),
        (TokenKind::OpenCurly, "{"),
        (TokenKind::Identifier, "x"),
        (TokenKind::Plus, "+"),
        (TokenKind::Identifier, "y"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::CloseCurly, "}"),
        (TokenKind::Semicolon, ";"),
        (TokenKind::EOF, ""),
    ];

    assert_eq!(tokens.len(), expected.len());
    for (token, (kind, literal)) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.literal, literal);
    }
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = " \t let \r\n  x\n=\t42  ".to_string();
    let tokens = tokenize(source, Some("test.monkey".to_string()));

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Integer);
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_illegal_characters() {
    let tokens = tokenize("let x = @ # 5".to_string(), None);

    assert_eq!(tokens[3].kind, TokenKind::Illegal);
    assert_eq!(tokens[3].literal, "@");
    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].literal, "#");
    assert_eq!(tokens[5].kind, TokenKind::Integer);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_multibyte_illegal_character() {
    let tokens = tokenize("x é y".to_string(), None);

    assert_eq!(tokens[1].kind, TokenKind::Illegal);
    assert_eq!(tokens[1].literal, "é");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].literal, "y");
}

#[test]
fn test_nul_byte_inside_source_is_illegal() {
    assert_eq!(
        kinds("a\0b"),
        vec![
            TokenKind::Identifier,
            TokenKind::Illegal,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_empty_source_yields_eof() {
    let tokens = tokenize(String::new(), None);

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
    assert_eq!(tokens[0].literal, "");
}

#[test]
fn test_eof_is_repeated() {
    let mut lexer = Lexer::new("x;".to_string(), None);

    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.next_token().kind, TokenKind::Semicolon);
    for _ in 0..5 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::EOF);
        assert_eq!(token.literal, "");
    }
    assert!(lexer.at_eof());
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("let foo == 12".to_string(), Some("spans.monkey".to_string()));

    assert_eq!((tokens[0].span.start.0, tokens[0].span.end.0), (0, 3));
    assert_eq!((tokens[1].span.start.0, tokens[1].span.end.0), (4, 7));
    assert_eq!((tokens[2].span.start.0, tokens[2].span.end.0), (8, 10));
    assert_eq!((tokens[3].span.start.0, tokens[3].span.end.0), (11, 13));
    assert_eq!((tokens[4].span.start.0, tokens[4].span.end.0), (13, 13));
    assert_eq!(*tokens[0].span.start.1, "spans.monkey");
}

#[test]
fn test_default_file_name() {
    let tokens = tokenize("x".to_string(), None);

    assert_eq!(*tokens[0].span.start.1, "shell");
}

#[test]
fn test_token_display() {
    let tokens = tokenize("foo 7 = $".to_string(), None);

    assert_eq!(tokens[0].to_string(), "Identifier (foo)");
    assert_eq!(tokens[1].to_string(), "Integer (7)");
    assert_eq!(tokens[2].to_string(), "Assignment");
    assert_eq!(tokens[3].to_string(), "Illegal ($)");
}
