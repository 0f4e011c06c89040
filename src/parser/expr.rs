use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BooleanLiteral, CallExpr, FunctionLiteral, Identifier, IfExpr, InfixExpr,
            IntegerLiteral, PrefixExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::Precedence, parser::Parser, stmt::parse_block_stmt};

/// Parses one expression starting at the current token.
///
/// Keeps folding infix operators into the left operand while the lookahead
/// binds tighter than `precedence`. Leaves the cursor on the last token of
/// the expression.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    parser.descend()?;
    let result = climb(parser, precedence);
    parser.ascend();
    result
}

fn climb(parser: &mut Parser, precedence: Precedence) -> Result<Expr, Error> {
    // First parse prefix
    let token_kind = parser.current_kind();
    let Some(prefix) = parser.get_prefix_handler(token_kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn {
                kind: token_kind.to_string(),
            },
            parser.current_position(),
        ));
    };

    let mut left = prefix(parser)?;

    // While the next operator binds tighter than the caller, it takes `left` as its operand
    while !parser.peek_is(TokenKind::Semicolon) && precedence < parser.peek_precedence() {
        let Some((infix, infix_precedence)) = parser.get_infix_handler(parser.peek_kind()) else {
            return Ok(left);
        };

        parser.advance();
        left = infix(parser, left, infix_precedence)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    Ok(Expr::Identifier(Identifier {
        value: token.value.clone(),
        span: token.span.clone(),
    }))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    match parse_int_literal(&token.value) {
        Some(value) => Ok(Expr::Integer(IntegerLiteral {
            value,
            span: token.span.clone(),
        })),
        None => Err(Error::new(
            ErrorImpl::IntegerParseError {
                literal: token.value.clone(),
            },
            token.span.start.clone(),
        )),
    }
}

/// Converts literal text to an `i64`, picking the base from its prefix.
///
/// `0x`/`0X` is hexadecimal, `0o`/`0O` octal, `0b`/`0B` binary, and any
/// other literal with a leading zero is octal. Returns `None` for
/// malformed or out-of-range text.
pub fn parse_int_literal(text: &str) -> Option<i64> {
    let (digits, radix) = match text.get(..2) {
        Some("0x" | "0X") => (&text[2..], 16),
        Some("0o" | "0O") => (&text[2..], 8),
        Some("0b" | "0B") => (&text[2..], 2),
        _ if text.len() > 1 && text.starts_with('0') => (&text[1..], 8),
        _ => (text, 10),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token();

    Ok(Expr::Boolean(BooleanLiteral {
        value: token.kind == TokenKind::True,
        span: token.span.clone(),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start,
            end: right.get_span().end.clone(),
        },
        operator: operator_token.value,
        right: Box::new(right),
    }))
}

/// Binary operator handler. The right operand is parsed at the operator's
/// own precedence, which makes it left-associative.
pub fn parse_infix_expr(parser: &mut Parser, left: Expr, precedence: Precedence) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        left: Box::new(left),
        operator: operator_token.value,
        right: Box::new(right),
    }))
}

pub fn parse_grouped_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    // if (x < y) { x } else { y }
    let start = parser.current_position();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block_stmt(parser)?;

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block_stmt(parser)?)
    } else {
        None
    };

    Ok(Expr::If(IfExpr {
        condition: Box::new(condition),
        consequence,
        alternative,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

pub fn parse_function_literal(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.current_position();

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_function_parameters(parser)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block_stmt(parser)?;

    Ok(Expr::Function(FunctionLiteral {
        parameters,
        body,
        span: Span {
            start,
            end: parser.current_token().span.end.clone(),
        },
    }))
}

fn parse_function_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, Error> {
    let mut parameters = Vec::new();

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        parser.expect_peek(TokenKind::Identifier)?;
        let token = parser.current_token();
        parameters.push(Identifier {
            value: token.value.clone(),
            span: token.span.clone(),
        });

        if !parser.peek_is(TokenKind::Comma) {
            break;
        }
        parser.advance();
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _precedence: Precedence) -> Result<Expr, Error> {
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        callee: Box::new(left),
        arguments,
    }))
}

/// Parses comma-separated expressions up to `end`, with the cursor on the opening token.
fn parse_expr_list(parser: &mut Parser, end: TokenKind) -> Result<Vec<Expr>, Error> {
    let mut items = Vec::new();

    if parser.peek_is(end) {
        parser.advance();
        return Ok(items);
    }

    parser.advance();
    items.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_is(TokenKind::Comma) {
        parser.advance();
        parser.advance();
        items.push(parse_expr(parser, Precedence::Lowest)?);
    }

    parser.expect_peek(end)?;

    Ok(items)
}
