use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A single offset-tagged error, produced either by the lexer or by the
/// parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// Byte offset of the offending token.
    pub fn offset(&self) -> usize {
        self.position.0
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The human-readable message, without the offset.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    /// True for the sentinel a token source reports once it is drained.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::EndOfInput)
    }

    pub fn is_unexpected_end_of_input(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedEndOfInput)
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::NotImplemented { .. })
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EndOfInput => "EndOfInput",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidUtf8 => "InvalidUtf8",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingComma { .. } => "MissingComma",
            ErrorImpl::ExpectedOperand { .. } => "ExpectedOperand",
            ErrorImpl::MissingLiteral { .. } => "MissingLiteral",
            ErrorImpl::TrailingToken { .. } => "TrailingToken",
            ErrorImpl::NotImplemented { .. } => "NotImplemented",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EndOfInput => ErrorTip::None,
            ErrorImpl::UnexpectedEndOfInput => {
                ErrorTip::Suggestion(String::from("the input contains no expression"))
            }
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidUtf8 => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("did you forget the closing `\"`?"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("did you forget the closing `*/`?"))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("expected {}, found {}", expected, found))
            }
            ErrorImpl::MissingComma { context, found } => {
                ErrorTip::Suggestion(format!("missing ',' in {} (got {})", context, found))
            }
            ErrorImpl::ExpectedOperand { found } => {
                ErrorTip::Suggestion(format!("`{}` cannot start an expression", found))
            }
            ErrorImpl::MissingLiteral { kind } => {
                ErrorTip::Suggestion(format!("{} token was produced without a value", kind))
            }
            ErrorImpl::TrailingToken { found } => {
                ErrorTip::Suggestion(format!("unexpected {} after a complete expression", found))
            }
            ErrorImpl::NotImplemented { construct } => ErrorTip::Suggestion(format!(
                "{} is expected to be handled, but has not yet been implemented",
                construct
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "exprparse: parser: {} (off {})", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("end of input")]
    EndOfInput,
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("invalid UTF-8 in source")]
    InvalidUtf8,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: TokenKind },
    #[error("missing ',' in {context} (got {found})")]
    MissingComma { context: String, found: TokenKind },
    #[error("expected operand, found {found}")]
    ExpectedOperand { found: TokenKind },
    #[error("{kind} token carries no literal value")]
    MissingLiteral { kind: TokenKind },
    #[error("unexpected {found} after expression")]
    TrailingToken { found: TokenKind },
    #[error("not implemented: {construct}")]
    NotImplemented { construct: &'static str },
}

/// The ordered list of errors recorded during one parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Errors(Vec<Error>);

impl Errors {
    pub fn new() -> Self {
        Errors(Vec::new())
    }

    pub fn push(&mut self, error: Error) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Error> {
        self.0.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<Error> {
        self.0
    }
}

impl From<Error> for Errors {
    fn from(error: Error) -> Self {
        Errors(vec![error])
    }
}

impl From<Vec<Error>> for Errors {
    fn from(errors: Vec<Error>) -> Self {
        Errors(errors)
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "exprparse: parser errors:")?;
        for error in &self.0 {
            writeln!(f, "off {:5}: {}", error.offset(), error.internal_error)?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}
