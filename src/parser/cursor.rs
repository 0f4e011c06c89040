//! Two-token lookahead over a [`TokenSource`].

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        source::TokenSource,
        tokens::{Token, TokenKind},
    },
};

/// Holds the current token and one token of lookahead.
///
/// Both slots are filled on construction by pulling twice from the source.
/// Advancing shifts the lookahead into the current slot and pulls one more
/// token, so advancing past `EOF` just keeps yielding `EOF`.
pub struct TokenCursor {
    source: Box<dyn TokenSource>,
    current: Token,
    peek: Token,
}

impl TokenCursor {
    pub fn new(mut source: Box<dyn TokenSource>) -> Self {
        let current = source.next_token();
        let peek = source.next_token();

        TokenCursor {
            source,
            current,
            peek,
        }
    }

    pub fn advance(&mut self) {
        let next = self.source.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    pub fn peek(&self) -> &Token {
        &self.peek
    }

    pub fn current_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Advances onto the lookahead token only if it has the expected kind.
    ///
    /// On mismatch the cursor is left untouched and the structural error
    /// is returned, positioned at the offending lookahead token.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<(), Error> {
        if self.peek.kind == kind {
            self.advance();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: kind.to_string(),
                    actual: self.peek.kind.to_string(),
                },
                self.peek.span.start.clone(),
            ))
        }
    }
}
