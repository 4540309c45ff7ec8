//! Integration tests for end-to-end expression parsing.
//!
//! These tests go through the public API only: source bytes or a token
//! stream in, an expression tree and its errors out.

use exprparse::{
    display_error,
    lexer::{lexer::tokenize, source::TokenStream},
    parse_expression, parse_tokens,
};

#[test]
fn test_parse_arithmetic() {
    let (expr, errors) = parse_expression(b"a * (b + 1) - c / 2");

    assert!(errors.is_none());
    assert_eq!(
        expr.unwrap().shape(),
        "(Sub (Mul a (LeftParen (Add b 1))) (Div c 2))"
    );
}

#[test]
fn test_parse_canonical_rendering() {
    let (expr, errors) = parse_expression(b"f(1, 2.5, \"s\", x)");

    assert!(errors.is_none());
    assert_eq!(
        expr.unwrap().to_string(),
        "(call f (lit int 1) (lit decimal 2.5) (lit string \"s\") x)"
    );
}

#[test]
fn test_parse_big_integer() {
    let (expr, _) = parse_expression(b"123456789012345678901234567890 + 1");

    assert_eq!(
        expr.unwrap().sexp(),
        "(Add (lit int 123456789012345678901234567890) (lit int 1))"
    );
}

#[test]
fn test_parse_recovery_keeps_tree() {
    let (expr, errors) = parse_expression(b"max(a, , b) + 1");
    let expr = expr.unwrap();
    let errors = errors.unwrap();

    assert!(expr.contains_bad());
    assert!(expr.shape().starts_with("(Add (call max a (bad "));
    assert!(errors.iter().all(|error| error.offset() <= 15));
    assert!(errors.to_string().starts_with("exprparse: parser errors:\n"));
}

#[test]
fn test_parse_reports_every_error() {
    let (expr, errors) = parse_expression(b"f(1 2, 3 4)");

    assert_eq!(expr.unwrap().shape(), "(call f 1 2 3 4)");
    let offsets: Vec<usize> = errors.unwrap().iter().map(|error| error.offset()).collect();
    assert_eq!(offsets, vec![4, 9]);
}

#[test]
fn test_parse_unsupported_construct() {
    let (expr, errors) = parse_expression(b"rows[0]");

    assert!(expr.is_none());
    let errors = errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().unwrap().offset(), 4);
    assert_eq!(
        errors.first().unwrap().to_string(),
        "exprparse: parser: not implemented: index expression (off 4)"
    );
}

#[test]
fn test_parse_tokens_matches_parse_expression() {
    let source = "!done && (count + 1) * 2 >= limit";
    let tokens = tokenize(source.to_string()).unwrap();

    let (from_tokens, _) = parse_tokens(TokenStream::new(tokens));
    let (from_bytes, _) = parse_expression(source.as_bytes());

    assert_eq!(from_tokens.unwrap().sexp(), from_bytes.unwrap().sexp());
}

#[test]
fn test_display_error_diagnostic() {
    let source = "g(x y)";
    let (_, errors) = parse_expression(source.as_bytes());
    let errors = errors.unwrap();
    let rendered = display_error(errors.first().unwrap(), source, "<expr>");

    assert!(rendered.starts_with("Error: MissingComma"));
    assert!(rendered.contains("-> <expr>\n"));
    assert!(rendered.contains("1 | g(x y)\n"));
    assert!(rendered.ends_with("  | ----^\n"));
}
