use crate::{
    ast::ast::{Expr, Ident},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
};

use super::{lookups::BindingPower, parser::Parser};

/// `Err` only for constructs the grammar does not define yet; every other
/// problem is recorded on the parser and yields a `Bad` node.
pub type ParseResult = Result<Expr, Error>;

pub fn parse_expr(parser: &mut Parser) -> ParseResult {
    parse_binary_expr(parser, BindingPower::LogicalOr.level())
}

/// Precedence climbing. Each level's run of operators folds left; right
/// operands are parsed one level tighter, so higher precedence binds first.
pub fn parse_binary_expr(parser: &mut Parser, min_prec: u8) -> ParseResult {
    let mut left = parse_unary_expr(parser)?;

    let mut prec = parser.current_token_kind().precedence();
    while prec >= min_prec {
        loop {
            let operator = parser.current_token_kind();
            if operator.precedence() != prec {
                break;
            }
            parser.next();
            let right = parse_binary_expr(parser, prec + 1)?;
            left = Expr::binary(operator, left, right);
        }
        prec -= 1;
    }

    Ok(left)
}

pub fn parse_unary_expr(parser: &mut Parser) -> ParseResult {
    let kind = parser.current_token_kind();
    match parser.get_prefix_lookup().get(&kind).copied() {
        Some(prefix_fn) => prefix_fn(parser),
        None => parse_primary_expr(parser),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> ParseResult {
    let operator = parser.current_token_kind();
    parser.next();

    if let Some(error) = parser.stream_error() {
        return Ok(Expr::bad(error));
    }

    let expr = parse_unary_expr(parser)?;
    Ok(Expr::unary(operator, expr))
}

/// An operand followed by any number of suffixes.
pub fn parse_primary_expr(parser: &mut Parser) -> ParseResult {
    let mut expr = parse_operand(parser)?;

    loop {
        let kind = parser.current_token_kind();
        match parser.get_led_lookup().get(&kind).copied() {
            Some(led_fn) => expr = led_fn(parser, expr)?,
            None => return Ok(expr),
        }
    }
}

pub fn parse_operand(parser: &mut Parser) -> ParseResult {
    let kind = parser.current_token_kind();
    if let Some(nud_fn) = parser.get_nud_lookup().get(&kind).copied() {
        return nud_fn(parser);
    }

    if let Some(error) = parser.stream_error() {
        return Ok(Expr::bad(error));
    }

    let error = parser.error(ErrorImpl::ExpectedOperand { found: kind });
    parser.next();
    Ok(Expr::bad(error))
}

pub fn parse_ident_expr(parser: &mut Parser) -> ParseResult {
    Ok(Expr::Ident(parse_ident(parser)))
}

/// Parses an identifier. Anything else is recorded and replaced by `_` so
/// the surrounding parse can go on.
pub fn parse_ident(parser: &mut Parser) -> Ident {
    let mut name = String::from("_");
    if parser.expect(TokenKind::Identifier) {
        let token = parser.current_token();
        name = match &token.literal {
            Some(Literal::Text(text)) => text.clone(),
            _ => token.value.clone(),
        };
    }
    parser.next();
    Ident::new(name)
}

pub fn parse_basic_literal(parser: &mut Parser) -> ParseResult {
    let token = parser.current_token();
    let kind = token.kind;
    let literal = token.literal.clone();

    let expr = match literal {
        Some(value) => Expr::literal(value),
        None => Expr::bad(parser.error(ErrorImpl::MissingLiteral { kind })),
    };
    parser.next();
    Ok(expr)
}

/// `( expr )`, kept in the tree as a `LeftParen` unary node.
pub fn parse_paren_expr(parser: &mut Parser) -> ParseResult {
    parser.next();
    let expr = parse_expr(parser)?;
    if parser.expect(TokenKind::RightParen) {
        parser.next();
    }

    Ok(Expr::unary(TokenKind::LeftParen, expr))
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> ParseResult {
    let args = parse_args(parser)?;
    Ok(Expr::call(callee, args))
}

pub fn parse_args(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    parser.expect(TokenKind::LeftParen);
    parser.next();

    let mut args = vec![];
    while parser.current_token_kind() != TokenKind::RightParen && !parser.exhausted() {
        args.push(parse_expr(parser)?);
        if parser.exhausted() {
            break;
        }
        if !parser.expect_comma_or(TokenKind::RightParen, "arguments") {
            break;
        }
        if parser.current_token_kind() == TokenKind::Comma {
            parser.next();
        }
    }

    parser.expect(TokenKind::RightParen);
    parser.next();

    Ok(args)
}

/// Field access and type assertions (`left.name`, `left.(T)`) are not part
/// of the grammar yet.
pub fn parse_selector_expr(parser: &mut Parser, _left: Expr) -> ParseResult {
    Err(parser.unsupported("selector"))
}

pub fn parse_index_expr(parser: &mut Parser, _left: Expr) -> ParseResult {
    Err(parser.unsupported("index expression"))
}

pub fn parse_composite_literal(parser: &mut Parser, _left: Expr) -> ParseResult {
    Err(parser.unsupported("composite literal"))
}
