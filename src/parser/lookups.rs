use std::collections::HashMap;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding power of an operator, lowest first.
///
/// The climbing loop only ever compares these, so adding an operator never
/// touches the loop itself.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

impl Precedence {
    /// The next lower level. Parsing a right operand at this level makes
    /// an operator right-associative.
    pub fn lower(self) -> Precedence {
        match self {
            Precedence::Lowest | Precedence::Equals => Precedence::Lowest,
            Precedence::LessGreater => Precedence::Equals,
            Precedence::Sum => Precedence::LessGreater,
            Precedence::Product => Precedence::Sum,
            Precedence::Prefix => Precedence::Product,
            Precedence::Call => Precedence::Prefix,
        }
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type PrefixHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type InfixHandler = fn(&mut Parser, Expr, Precedence) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and comparison
    parser.register_infix(TokenKind::Equals, Precedence::Equals, parse_infix_expr);
    parser.register_infix(TokenKind::NotEquals, Precedence::Equals, parse_infix_expr);
    parser.register_infix(TokenKind::Less, Precedence::LessGreater, parse_infix_expr);
    parser.register_infix(TokenKind::Greater, Precedence::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.register_infix(TokenKind::Plus, Precedence::Sum, parse_infix_expr);
    parser.register_infix(TokenKind::Minus, Precedence::Sum, parse_infix_expr);
    parser.register_infix(TokenKind::Asterisk, Precedence::Product, parse_infix_expr);
    parser.register_infix(TokenKind::Slash, Precedence::Product, parse_infix_expr);

    parser.register_infix(TokenKind::OpenParen, Precedence::Call, parse_call_expr);

    // Literals and symbols
    parser.register_prefix(TokenKind::Identifier, parse_identifier);
    parser.register_prefix(TokenKind::Int, parse_integer_literal);
    parser.register_prefix(TokenKind::True, parse_boolean);
    parser.register_prefix(TokenKind::False, parse_boolean);
    parser.register_prefix(TokenKind::Bang, parse_prefix_expr);
    parser.register_prefix(TokenKind::Minus, parse_prefix_expr);
    parser.register_prefix(TokenKind::OpenParen, parse_grouped_expr);
    parser.register_prefix(TokenKind::If, parse_if_expr);
    parser.register_prefix(TokenKind::Function, parse_function_literal);

    // Statements
    parser.register_stmt(TokenKind::Let, parse_let_stmt);
    parser.register_stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, Precedence>;
