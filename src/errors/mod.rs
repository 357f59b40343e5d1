//! Diagnostic types for the front end.
//!
//! Neither the lexer nor the parser aborts on bad input. Lexical problems
//! surface as `Illegal` tokens and syntactic problems are collected by the
//! parser as [`errors::Error`] values carrying a source position, a stable
//! name and an optional suggestion.

pub mod errors;
