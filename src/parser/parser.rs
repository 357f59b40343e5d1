//! Parser state and the program-level driver.
//!
//! The parser pulls tokens from a [`Lexer`] through a two-token window
//! (`current`, `peek`). Handlers for statements, prefix (NUD) positions and
//! infix (LED) positions are registered in lookup tables keyed by token kind,
//! together with each infix operator's binding power.
//!
//! Handlers start with the first token of their construct as `current` and
//! leave `current` on its last token.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token source
    lexer: Lexer,
    /// Token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Diagnostics recorded so far, in the order they were raised
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for infix binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `lexer` and fills the lookahead window.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until EOF.
    ///
    /// A statement that fails to parse is left out of the program; its
    /// diagnostic is recorded and parsing resumes after the next `;`.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_token_is(TokenKind::EOF) {
            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.record_error(error);
                    self.synchronize(&[TokenKind::Semicolon]);
                }
            }
            self.next_token();
        }

        program
    }

    /// Diagnostics collected so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Consumes the parser, handing over its diagnostics.
    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn record_error(&mut self, error: Error) {
        tracing::debug!(error = %error, position = error.get_position().0, "recorded diagnostic");
        self.errors.push(error);
    }

    /// Advances until `current` is one of `kinds` or EOF.
    pub fn synchronize(&mut self, kinds: &[TokenKind]) {
        while !self.current.is_one_of_many(kinds) && !self.current_token_is(TokenKind::EOF) {
            self.next_token();
        }
    }

    /// Shifts the lookahead window by one token.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn current_token_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances onto the peek token if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The new current token, or an `ExpectedToken` error positioned at the peek token.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_token_is(expected_kind) {
            self.next_token();
            Ok(self.current.clone())
        } else {
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    received: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    /// Binding power of the peek token, `Default` when it is not an infix operator.
    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power_lookup
            .get(&self.peek.kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix position
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }
}

/// Parses a complete source text.
///
/// This is the main entry point for parsing. It builds a lexer and parser,
/// runs the parse to EOF and hands back the program together with every
/// diagnostic raised on the way. A non-empty diagnostic list means the
/// program is missing the statements that failed.
///
/// # Arguments
///
/// * `source` - The text to parse
/// * `file` - Name reported in diagnostic positions, `shell` when `None`
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    tracing::debug!(
        statements = program.len(),
        diagnostics = parser.errors().len(),
        "parsed program"
    );

    (program, parser.into_errors())
}
