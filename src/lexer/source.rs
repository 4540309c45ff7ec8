//! The narrow view of a token stream the parser works against.

use log::trace;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

pub trait TokenSource {
    /// The token under the cursor, including its literal value.
    fn current(&self) -> &Token;
    /// Consumes the current token. A lexical error or the end of input is
    /// kept as the last error; further calls are no-ops.
    fn advance(&mut self);
    /// Byte offset of the current token.
    fn offset(&self) -> usize {
        self.current().span.start.0
    }
    /// `EndOfInput` once drained, a lexical error if scanning failed,
    /// otherwise `None`.
    fn last_error(&self) -> Option<&Error>;
    /// True once no further tokens can be produced.
    fn exhausted(&self) -> bool {
        self.last_error().is_some()
    }
}

/// Token source that scans lazily over source text.
pub struct Scanner {
    lexer: Lexer,
    token: Token,
    err: Option<Error>,
    invalid_utf8_at: Option<usize>,
}

impl Scanner {
    pub fn new(source: String) -> Self {
        Scanner {
            lexer: Lexer::new(source),
            token: Token::eof(Position::null()),
            err: None,
            invalid_utf8_at: None,
        }
    }

    /// Scans the valid UTF-8 prefix of `src`; reaching an invalid byte is
    /// reported as a lexical error instead of the end of input.
    pub fn from_bytes(src: &[u8]) -> Self {
        match std::str::from_utf8(src) {
            Ok(source) => Scanner::new(source.to_string()),
            Err(err) => {
                let valid = &src[..err.valid_up_to()];
                let mut scanner = Scanner::new(String::from_utf8_lossy(valid).into_owned());
                scanner.invalid_utf8_at = Some(err.valid_up_to());
                scanner
            }
        }
    }
}

impl TokenSource for Scanner {
    fn current(&self) -> &Token {
        &self.token
    }

    fn advance(&mut self) {
        if self.err.is_some() {
            return;
        }

        match self.lexer.next_token() {
            Ok(token) if token.kind == TokenKind::EOF => {
                self.err = Some(match self.invalid_utf8_at {
                    Some(at) => Error::new(ErrorImpl::InvalidUtf8, Position(at)),
                    None => Error::new(ErrorImpl::EndOfInput, token.span.start),
                });
                self.token = token;
            }
            Ok(token) => self.token = token,
            Err(err) => {
                trace!("scanner stopped: {}", err);
                self.token = Token::illegal(*err.get_position());
                self.err = Some(err);
            }
        }
    }

    fn last_error(&self) -> Option<&Error> {
        self.err.as_ref()
    }
}

/// Token source over tokens produced ahead of time, for callers that run
/// their own scanner.
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    token: Token,
    err: Option<Error>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens,
            pos: 0,
            token: Token::eof(Position::null()),
            err: None,
        }
    }
}

impl TokenSource for TokenStream {
    fn current(&self) -> &Token {
        &self.token
    }

    fn advance(&mut self) {
        if self.err.is_some() {
            return;
        }

        match self.tokens.get(self.pos) {
            Some(token) if token.kind != TokenKind::EOF => {
                self.token = token.clone();
                self.pos += 1;
            }
            next => {
                // A stream without a trailing EOF ends where its last token did.
                let end = next
                    .map(|token| token.span.start)
                    .or_else(|| self.tokens.last().map(|token| token.span.end))
                    .unwrap_or_default();
                self.token = Token::eof(end);
                self.err = Some(Error::new(ErrorImpl::EndOfInput, end));
            }
        }
    }

    fn last_error(&self) -> Option<&Error> {
        self.err.as_ref()
    }
}
