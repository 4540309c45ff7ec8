use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Expr, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Precedence classes of binary operators, weakest first. `Default` marks
/// tokens that are not binary operators.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    LogicalOr = 1,
    LogicalAnd = 2,
    Relational = 3,
    Additive = 4,
    Multiplicative = 5,
    Power = 6,
}

impl BindingPower {
    pub fn level(self) -> u8 {
        self as u8
    }
}

lazy_static! {
    static ref BINDING_POWER_LOOKUP: BPLookup = {
        let mut map = HashMap::new();
        map.insert(TokenKind::LogicalOr, BindingPower::LogicalOr);
        map.insert(TokenKind::LogicalAnd, BindingPower::LogicalAnd);

        // Relational
        map.insert(TokenKind::Equal, BindingPower::Relational);
        map.insert(TokenKind::NotEqual, BindingPower::Relational);
        map.insert(TokenKind::Less, BindingPower::Relational);
        map.insert(TokenKind::Greater, BindingPower::Relational);
        map.insert(TokenKind::LessEqual, BindingPower::Relational);
        map.insert(TokenKind::GreaterEqual, BindingPower::Relational);

        // Additive and multiplicative
        map.insert(TokenKind::Add, BindingPower::Additive);
        map.insert(TokenKind::Sub, BindingPower::Additive);
        map.insert(TokenKind::Or, BindingPower::Additive);
        map.insert(TokenKind::Xor, BindingPower::Additive);
        map.insert(TokenKind::Mul, BindingPower::Multiplicative);
        map.insert(TokenKind::Div, BindingPower::Multiplicative);
        map.insert(TokenKind::Rem, BindingPower::Multiplicative);
        map.insert(TokenKind::Ref, BindingPower::Multiplicative);

        map.insert(TokenKind::Pow, BindingPower::Power);
        map
    };
}

pub fn binding_power(kind: TokenKind) -> BindingPower {
    BINDING_POWER_LOOKUP
        .get(&kind)
        .copied()
        .unwrap_or(BindingPower::Default)
}

impl TokenKind {
    /// Binary operator precedence, 0 when the token is not a binary operator.
    pub fn precedence(self) -> u8 {
        binding_power(self).level()
    }
}

/// Prefix operator handler, called with the operator as the current token.
pub type PrefixHandler = fn(&mut Parser) -> ParseResult;
/// Operand handler, called with the first token of the operand current.
pub type NUDHandler = fn(&mut Parser) -> ParseResult;
/// Suffix handler, called with the suffix token current and the operand
/// parsed so far.
pub type LEDHandler = fn(&mut Parser, Expr) -> ParseResult;

pub fn create_token_lookups(parser: &mut Parser) {
    // Prefix operators
    parser.prefix(TokenKind::Add, parse_prefix_expr);
    parser.prefix(TokenKind::Sub, parse_prefix_expr);
    parser.prefix(TokenKind::Not, parse_prefix_expr);
    parser.prefix(TokenKind::Mul, parse_prefix_expr);
    parser.prefix(TokenKind::Ref, parse_prefix_expr);

    // Operands
    parser.nud(TokenKind::Identifier, parse_ident_expr);
    parser.nud(TokenKind::Int, parse_basic_literal);
    parser.nud(TokenKind::Float, parse_basic_literal);
    parser.nud(TokenKind::Imaginary, parse_basic_literal);
    parser.nud(TokenKind::String, parse_basic_literal);
    parser.nud(TokenKind::LeftParen, parse_paren_expr);

    // Suffixes
    parser.led(TokenKind::LeftParen, parse_call_expr);
    parser.led(TokenKind::Period, parse_selector_expr);
    parser.led(TokenKind::LeftBracket, parse_index_expr);
    parser.led(TokenKind::LeftBrace, parse_composite_literal);
}

pub type BPLookup = HashMap<TokenKind, BindingPower>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
