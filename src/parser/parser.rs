//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser uses a Pratt approach: prefix and infix handlers are looked
//! up per token kind, and operator precedence lives entirely in a table.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Prefix handlers (tokens that start an expression)
//! - Infix handlers (tokens that continue an expression)
//! - Operator precedence
//!
//! Errors never abort a parse. A failing statement returns its error up to
//! [`Parser::parse_program`], which records it, skips to the end of the
//! failed statement and carries on. Blocks that were still open when the
//! error surfaced are skipped as a whole, so a bad statement inside a
//! function body never leaks its remaining body into the program.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    cursor::TokenCursor,
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Tunables for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest nesting accepted before giving up on a statement. Every
    /// expression and every `{ ... }` block counts as one level.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig { max_depth: 128 }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// The main parser structure that maintains parsing state.
///
/// A parser is built around one token source, asked once for its program,
/// and then only read for its diagnostics.
pub struct Parser {
    /// Current token and lookahead
    cursor: TokenCursor,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    config: ParserConfig,
    /// Current expression and block nesting
    depth: usize,
    /// Blocks entered but not yet closed
    open_blocks: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Lookup table for infix operator precedence
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a parser with the default configuration and lookup tables.
    pub fn new(source: impl TokenSource + 'static) -> Self {
        Parser::with_config(source, ParserConfig::default())
    }

    pub fn with_config(source: impl TokenSource + 'static, config: ParserConfig) -> Self {
        let mut parser = Parser {
            cursor: TokenCursor::new(Box::new(source)),
            errors: Vec::new(),
            config,
            depth: 0,
            open_blocks: 0,
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until `EOF`.
    ///
    /// Always returns a program. Statements that fail to parse are left out
    /// and their diagnostic is available from [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        tracing::debug!(file = %self.current_position().1, "parsing program");

        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            tracing::trace!(kind = %self.current_kind(), "parsing statement");

            match parse_stmt(self) {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.record(error);
                    self.synchronize();
                }
            }

            self.advance();
        }

        tracing::debug!(
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }

    /// Diagnostic messages, in the order they were found.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    /// Diagnostics with their source positions.
    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn record(&mut self, error: Error) {
        tracing::debug!(
            position = error.get_position().0,
            kind = error.get_error_name(),
            "{}",
            error
        );
        self.errors.push(error);
    }

    /// Skips to the end of the statement that just failed.
    ///
    /// Stops on a `;` outside any block, or on the `}` closing the outermost
    /// block that was open when the error surfaced (and on a `;` right after
    /// it). `EOF` always stops.
    fn synchronize(&mut self) {
        let mut open = std::mem::take(&mut self.open_blocks);
        let mut skipped = 0usize;

        loop {
            match self.current_kind() {
                TokenKind::EOF => break,
                TokenKind::Semicolon if open == 0 => break,
                TokenKind::OpenCurly => open += 1,
                TokenKind::CloseCurly if open > 0 => {
                    open -= 1;
                    if open == 0 {
                        if self.peek_is(TokenKind::Semicolon) {
                            self.advance();
                        }
                        break;
                    }
                }
                _ => {}
            }
            self.advance();
            skipped += 1;
        }

        self.depth = 0;
        tracing::trace!(skipped, "resynchronized");
    }

    // Cursor

    pub fn advance(&mut self) {
        self.cursor.advance();
    }

    pub fn current_token(&self) -> &Token {
        self.cursor.current()
    }

    pub fn peek_token(&self) -> &Token {
        self.cursor.peek()
    }

    pub fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.cursor.peek_kind()
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Advances onto the lookahead if it is `kind`, otherwise fails with
    /// "expected next token to be ..." and leaves the cursor where it was.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<(), Error> {
        self.cursor.expect_peek(kind)
    }

    /// Returns the position of the current token.
    pub fn current_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    // Lookups

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_prefix_handler(&self, kind: TokenKind) -> Option<PrefixHandler> {
        self.prefix_lookup.get(&kind).copied()
    }

    pub fn get_infix_handler(&self, kind: TokenKind) -> Option<(InfixHandler, Precedence)> {
        let handler = self.infix_lookup.get(&kind).copied()?;
        let precedence = self
            .precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest);
        Some((handler, precedence))
    }

    /// Precedence of the lookahead token as an infix operator, or `Lowest`.
    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_lookup
            .get(&self.peek_kind())
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Registers an infix handler and its precedence for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - The binding power of this operator
    /// * `handler` - Called with the cursor on the operator and the left operand
    pub fn register_infix(&mut self, kind: TokenKind, precedence: Precedence, handler: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, handler);
    }

    /// Registers a prefix handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `handler` - Called with the cursor on the token that starts the expression
    pub fn register_prefix(&mut self, kind: TokenKind, handler: PrefixHandler) {
        self.prefix_lookup.insert(kind, handler);
    }

    /// Registers a statement handler for a token.
    ///
    /// Tokens without a statement handler start an expression statement.
    pub fn register_stmt(&mut self, kind: TokenKind, handler: StmtHandler) {
        self.stmt_lookup.insert(kind, handler);
    }

    // Nesting

    /// Enters one level of nesting, failing past the configured limit.
    pub(crate) fn descend(&mut self) -> Result<(), Error> {
        if self.depth >= self.config.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_depth,
                },
                self.current_position(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub(crate) fn enter_block(&mut self) {
        self.open_blocks += 1;
    }

    /// Only called once a block closed cleanly; a failed block stays open
    /// for [`Parser::synchronize`] to skip.
    pub(crate) fn leave_block(&mut self) {
        self.open_blocks = self.open_blocks.saturating_sub(1);
    }
}

/// Lexes and parses a source string in one go.
///
/// # Arguments
///
/// * `source` - The program text
/// * `file` - Optional file name recorded in token positions
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance (for its diagnostics)
/// - The parsed Program
pub fn parse(source: String, file: Option<String>) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (parser, program)
}
