//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, Errors};
use crate::lexer::tokens::TokenKind;
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.offset(), 10);
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::ExpectedOperand { found: TokenKind::RightParen }, Position(7));

    assert_eq!(
        error.to_string(),
        "exprparse: parser: expected operand, found RightParen (off 7)"
    );
    assert_eq!(error.message(), "expected operand, found RightParen");
}

#[test]
fn test_unexpected_token_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::RightParen,
            found: TokenKind::EOF,
        },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.message(), "expected RightParen, found EOF");
}

#[test]
fn test_end_of_input_is_distinct_from_unexpected_end() {
    let end = Error::new(ErrorImpl::EndOfInput, Position(3));
    let unexpected = Error::new(ErrorImpl::UnexpectedEndOfInput, Position(0));

    assert!(end.is_end_of_input());
    assert!(!end.is_unexpected_end_of_input());
    assert!(unexpected.is_unexpected_end_of_input());
    assert!(!unexpected.is_end_of_input());
}

#[test]
fn test_not_implemented_error() {
    let error = Error::new(
        ErrorImpl::NotImplemented {
            construct: "index expression",
        },
        Position(1),
    );

    assert!(error.is_not_implemented());
    assert_eq!(error.get_error_name(), "NotImplemented");
    assert_eq!(error.message(), "not implemented: index expression");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MissingComma {
            context: "arguments".to_string(),
            found: TokenKind::Int,
        },
        Position(0),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "missing ',' in arguments (got Int)"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_errors_report_format() {
    let mut errors = Errors::new();
    errors.push(Error::new(ErrorImpl::ExpectedOperand { found: TokenKind::Comma }, Position(2)));
    errors.push(Error::new(
        ErrorImpl::UnexpectedToken {
            expected: TokenKind::RightParen,
            found: TokenKind::EOF,
        },
        Position(12345),
    ));

    assert_eq!(
        errors.to_string(),
        "exprparse: parser errors:\n\
         off     2: expected operand, found Comma\n\
         off 12345: expected RightParen, found EOF\n"
    );
}

#[test]
fn test_errors_preserve_order() {
    let errors = Errors::from(vec![
        Error::new(ErrorImpl::EndOfInput, Position(9)),
        Error::new(ErrorImpl::UnexpectedEndOfInput, Position(1)),
    ]);

    let offsets: Vec<usize> = errors.iter().map(Error::offset).collect();
    assert_eq!(offsets, vec![9, 1]);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.first().map(Error::offset), Some(9));
}
