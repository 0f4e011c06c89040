//! Unit tests for error handling.
//!
//! This module contains tests for error types and their message text.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn at(offset: u32) -> Position {
    Position(offset, Rc::new("test.pratt".to_string()))
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: ";".to_string(),
        },
        at(10),
    );

    assert_eq!(error.get_error_name(), "NoPrefixParseFn");
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "IDENT".to_string(),
            actual: "INT".to_string(),
        },
        at(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "test.pratt");
}

#[test]
fn test_unexpected_token_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "=".to_string(),
            actual: "INT".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(
        error.to_string(),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_no_prefix_message() {
    let error = Error::new(
        ErrorImpl::NoPrefixParseFn {
            kind: "ILLEGAL".to_string(),
        },
        at(0),
    );

    assert_eq!(error.to_string(), "no prefix parse function for ILLEGAL found");
}

#[test]
fn test_integer_parse_message_quotes_literal() {
    let error = Error::new(
        ErrorImpl::IntegerParseError {
            literal: "92233720368547758070".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_error_name(), "IntegerParseError");
    assert_eq!(
        error.to_string(),
        "could not parse \"92233720368547758070\" as integer"
    );
}

#[test]
fn test_nesting_message() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 4 }, at(0));

    assert_eq!(error.to_string(), "expression nesting exceeds limit of 4");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: ";".to_string(),
            actual: "EOF".to_string(),
        },
        at(0),
    );

    assert_eq!(error.get_tip().to_string(), "expected `;`, found `EOF`");
    assert_eq!(ErrorTip::None.to_string(), "");
}
