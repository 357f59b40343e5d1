//! Lexical analysis module.
//!
//! This module contains the lexer that converts source text into tokens,
//! one token per `next_token` call. It handles:
//!
//! - Single and double character operators and delimiters
//! - Identifiers and keywords (via the reserved word table)
//! - Integer literals
//! - Unrecognised input, surfaced as `Illegal` tokens rather than errors

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
