use super::tokens::{Token, TokenKind};

/// Anything that can feed tokens to the parser one at a time.
///
/// Implementations must keep returning an `EOF` token once they are
/// exhausted, so callers may advance past the end freely.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// A token source over an already scanned token list.
pub struct TokenStream {
    tokens: std::vec::IntoIter<Token>,
    eof: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into_iter(),
            eof: Token::synthetic(TokenKind::EOF, ""),
        }
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Token {
        match self.tokens.next() {
            Some(token) if token.kind == TokenKind::EOF => {
                // Anything after the first EOF is ignored
                self.tokens = Vec::new().into_iter();
                self.eof = token.clone();
                token
            }
            Some(token) => token,
            None => self.eof.clone(),
        }
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}
