//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with table-driven operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements, blocks)
//! - Expression parsing (prefix/infix operators, grouping, `if`, function
//!   literals, calls)
//! - Error recovery and reporting
//!
//! New operators are added by registering a prefix and/or infix handler
//! (with a precedence) for a token kind; the climbing loop stays as is.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
