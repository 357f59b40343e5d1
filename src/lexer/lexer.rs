use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
}

/// On-demand tokenizer over an in-memory source.
///
/// `position` is the offset of `ch`, `read_position` the offset of the byte
/// after it. `ch` is `0` once the input is exhausted.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    position: usize,
    read_position: usize,
    ch: u8,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: 0,
            file: file_name,
        };
        lexer.read_char();
        lexer
    }

    /// Returns the next token. Once the input is exhausted every call yields EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;

        let kind = match self.ch {
            b'=' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::Equals
            }
            b'!' if self.peek_char() == b'=' => {
                self.read_char();
                TokenKind::NotEquals
            }
            b'=' => TokenKind::Assignment,
            b'!' => TokenKind::Not,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Dash,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::Less,
            b'>' => TokenKind::Greater,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'{' => TokenKind::OpenCurly,
            b'}' => TokenKind::CloseCurly,
            0 if self.at_eof() => {
                return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(start, start, self.file));
            }
            _ => {
                if let Some(literal) = self.read_run(&IDENTIFIER_PATTERN) {
                    let kind = lookup_identifier(&literal);
                    return MK_TOKEN!(kind, literal, MK_SPAN!(start, self.position, self.file));
                }
                if let Some(literal) = self.read_run(&INTEGER_PATTERN) {
                    return MK_TOKEN!(
                        TokenKind::Integer,
                        literal,
                        MK_SPAN!(start, self.position, self.file)
                    );
                }
                return self.read_illegal();
            }
        };

        self.read_char();

        MK_TOKEN!(
            kind,
            self.source[start..self.position].to_string(),
            MK_SPAN!(start, self.position, self.file)
        )
    }

    pub fn at_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    fn read_char(&mut self) {
        self.ch = self
            .source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0);
        self.position = self.read_position.min(self.source.len());
        if self.read_position <= self.source.len() {
            self.read_position += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    /// Consumes the longest match of `pattern` anchored at the current position.
    fn read_run(&mut self, pattern: &Regex) -> Option<String> {
        let matched = pattern.find(&self.source[self.position..])?;
        let literal = matched.as_str().to_string();
        let width = matched.end();

        for _ in 0..width {
            self.read_char();
        }

        Some(literal)
    }

    /// Consumes one unrecognised character, keeping multi-byte characters whole.
    fn read_illegal(&mut self) -> Token {
        let start = self.position;
        let width = self.source[start..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(1);

        for _ in 0..width {
            self.read_char();
        }

        MK_TOKEN!(
            TokenKind::Illegal,
            self.source[start..self.position].to_string(),
            MK_SPAN!(start, self.position, self.file)
        )
    }
}

/// Lexes the whole source, returning every token up to and including EOF.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lexer = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tracing::debug!(token_count = tokens.len(), "tokenized source");
    tokens
}
