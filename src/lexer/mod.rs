//! Lexical analysis module.
//!
//! This module contains the scanner that converts source code into the
//! token stream consumed by the parser. It handles:
//!
//! - Pulling tokens one at a time through the `TokenSource` trait
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod source;
pub mod tokens;
