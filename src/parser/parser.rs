//! Parser state and the parse entry points.
//!
//! The `Parser` owns a token source, an ordered list of recorded errors and
//! the handler tables built by `create_token_lookups`:
//! - prefix handlers for unary operators
//! - NUD (null denotation) handlers for operands
//! - LED (left denotation) handlers for operand suffixes
//!
//! Grammar errors are recorded and parsing continues with a placeholder.
//! Only constructs the grammar does not define yet abort a parse.

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl, Errors},
    lexer::{
        source::{Scanner, TokenSource},
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, LEDHandler, LEDLookup, NUDHandler, NUDLookup, PrefixHandler,
        PrefixLookup,
    },
};

pub struct Parser {
    /// Where tokens come from
    source: Box<dyn TokenSource>,
    /// Grammar and stream errors, in the order they were found
    errors: Vec<Error>,
    /// Whether the token source's error has been added to `errors`
    stream_error_recorded: bool,
    /// Handlers for unary prefix operators
    prefix_lookup: PrefixLookup,
    /// Handlers for operands
    nud_lookup: NUDLookup,
    /// Handlers for operand suffixes
    led_lookup: LEDLookup,
}

impl Parser {
    /// Creates a parser over `source`. The first token is not loaded until
    /// `parse` runs.
    pub fn new(source: Box<dyn TokenSource>) -> Self {
        Parser {
            source,
            errors: vec![],
            stream_error_recorded: false,
            prefix_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
        }
    }

    pub fn current_token(&self) -> &Token {
        self.source.current()
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.source.current().kind
    }

    /// Advances to the next token that is not a comment.
    pub fn next(&mut self) {
        loop {
            self.source.advance();
            if self.current_token_kind() != TokenKind::Comment {
                break;
            }
        }
        trace!("at {} (off {})", self.current_token().debug(), self.offset());
    }

    pub fn offset(&self) -> usize {
        self.source.offset()
    }

    pub fn get_position(&self) -> Position {
        Position(self.offset())
    }

    /// True once the token source can produce no more tokens.
    pub fn exhausted(&self) -> bool {
        self.source.exhausted()
    }

    /// Records an error at the current token and returns it.
    pub fn error(&mut self, error_impl: ErrorImpl) -> Error {
        let error = Error::new(error_impl, self.get_position());
        debug!("recorded parse error: {}", error);
        self.errors.push(error.clone());
        error
    }

    /// An error for a construct the grammar does not define yet. Not
    /// recorded; the caller returns it to abort the parse.
    pub fn unsupported(&self, construct: &'static str) -> Error {
        let error = Error::new(ErrorImpl::NotImplemented { construct }, self.get_position());
        debug!("unsupported construct: {}", error);
        error
    }

    /// Records an error unless the current token is of `expected_kind`.
    /// A drained or failed token source is recorded as its own error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> bool {
        let found = self.current_token_kind();
        if found == expected_kind {
            return true;
        }

        if self.stream_error().is_none() {
            self.error(ErrorImpl::UnexpectedToken {
                expected: expected_kind,
                found,
            });
        }
        false
    }

    /// Returns false if the current token is `otherwise` or the token source
    /// has stopped. Otherwise returns true, recording an error first if the
    /// current token is not a comma; the list then continues as if the comma
    /// had been there.
    pub fn expect_comma_or(&mut self, otherwise: TokenKind, context: &str) -> bool {
        match self.current_token_kind() {
            TokenKind::Comma => true,
            found if found == otherwise => false,
            found => {
                if self.stream_error().is_some() {
                    return false;
                }
                self.error(ErrorImpl::MissingComma {
                    context: context.to_string(),
                    found,
                });
                true
            }
        }
    }

    /// The token source's error, if it has one. The first time this is
    /// observed it is also recorded.
    pub fn stream_error(&mut self) -> Option<Error> {
        let error = self.source.last_error()?.clone();
        if !self.stream_error_recorded {
            self.stream_error_recorded = true;
            debug!("recorded stream error: {}", error);
            self.errors.push(error.clone());
        }
        Some(error)
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Registers a handler for a unary prefix operator.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a handler for operands starting with `kind`.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a handler for operand suffixes starting with `kind`.
    pub fn led(&mut self, kind: TokenKind, led_fn: LEDHandler) {
        self.led_lookup.insert(kind, led_fn);
    }

    /// Parses one expression from the token source.
    ///
    /// Returns the tree, possibly containing `Bad` placeholders, together
    /// with every recorded error. The tree is `None` when the input holds no
    /// tokens, when the first token cannot be scanned, or when it uses a
    /// construct the grammar does not define yet.
    pub fn parse(mut self) -> (Option<Expr>, Option<Errors>) {
        self.next();
        if let Some(error) = self.source.last_error() {
            let error = if error.is_end_of_input() {
                Error::new(ErrorImpl::UnexpectedEndOfInput, *error.get_position())
            } else {
                error.clone()
            };
            debug!("parse failed before the first token: {}", error);
            return (None, Some(error.into()));
        }
        debug!("parsing expression at {}", self.current_token().debug());

        let expr = match parse_expr(&mut self) {
            Ok(expr) => expr,
            Err(error) => {
                self.errors.push(error);
                return (None, Some(self.errors.into()));
            }
        };

        if !self.errors.is_empty() {
            debug!("parsed {:?} with {} error(s)", expr.get_expr_type(), self.errors.len());
            return (Some(expr), Some(self.errors.into()));
        }

        let trailing = match self.source.last_error() {
            Some(error) if error.is_end_of_input() => None,
            Some(error) => Some(error.clone()),
            None => Some(Error::new(
                ErrorImpl::TrailingToken {
                    found: self.current_token_kind(),
                },
                self.get_position(),
            )),
        };

        debug!("parsed {:?}", expr.get_expr_type());
        (Some(expr), trailing.map(Errors::from))
    }
}

/// Parses a single expression from source bytes.
///
/// # Returns
///
/// A tuple containing:
/// - The expression tree, or `None` if no tree could be built
/// - All errors found, or `None` if the input was one well-formed expression
///
/// # Example
///
/// ```
/// let (expr, errors) = exprparse::parse_expression(b"1 + 2 * 3");
/// assert!(errors.is_none());
/// assert_eq!(expr.unwrap().shape(), "(Add 1 (Mul 2 3))");
/// ```
pub fn parse_expression(src: &[u8]) -> (Option<Expr>, Option<Errors>) {
    parse_tokens(Scanner::from_bytes(src))
}

/// Parses a single expression from any token source.
pub fn parse_tokens<S: TokenSource + 'static>(source: S) -> (Option<Expr>, Option<Errors>) {
    let mut parser = Parser::new(Box::new(source));
    create_token_lookups(&mut parser);
    parser.parse()
}
