use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
    Span,
};

use super::parser::Parser;

/// Parses the statement starting at the current token.
///
/// On success the cursor is left on the statement's last token (its `;`
/// when there is one).
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_handler(parser.current_kind()) {
        return handler(parser);
    }

    parse_expression_stmt(parser)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_position();

    parser.expect_peek(TokenKind::Identifier)?;
    let token = parser.current_token();
    let name = Identifier {
        value: token.value.clone(),
        span: token.span.clone(),
    };

    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(Stmt::Let(LetStmt {
        name,
        value,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.current_position();
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;

    parser.expect_peek(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

/// A bare expression. Unlike `let` and `return`, the `;` is optional so
/// that the last expression of a block can stand without one.
pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_is(TokenKind::Semicolon) {
        parser.advance();
    }

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: expression.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        expression,
    }))
}

/// Parses `{ ... }` with the cursor on the `{`, leaving it on the `}`.
///
/// A block counts towards the nesting limit like an expression does.
pub fn parse_block_stmt(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.descend()?;
    parser.enter_block();

    let result = parse_block_body(parser);
    parser.ascend();

    let block = result?;
    parser.leave_block();
    Ok(block)
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.current_position();
    parser.advance();

    let mut body = Vec::new();
    while !parser.current_is(TokenKind::CloseCurly) {
        if parser.current_is(TokenKind::EOF) {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: TokenKind::CloseCurly.to_string(),
                    actual: TokenKind::EOF.to_string(),
                },
                parser.current_position(),
            ));
        }

        body.push(parse_stmt(parser)?);
        parser.advance();
    }

    Ok(BlockStmt {
        body,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    })
}
