use bigdecimal::BigDecimal;
use lazy_static::lazy_static;
use num_bigint::BigInt;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("func", TokenKind::Func);
        map.insert("return", TokenKind::Return);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("var", TokenKind::Var);
        map.insert("const", TokenKind::Const);
        map.insert("type", TokenKind::Type);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,
    Comment,

    Identifier,
    Int,
    Float,
    Imaginary,
    String,

    Add,  // +
    Sub,  // -
    Mul,  // *
    Div,  // /
    Rem,  // %
    Pow,  // **
    Ref,  // &
    Or,   // |
    Xor,  // ^
    Not,  // !

    LogicalAnd, // &&
    LogicalOr,  // ||

    Assign,       // =
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    Greater,      // >
    LessEqual,    // <=
    GreaterEqual, // >=

    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,

    Comma,
    Period,
    Colon,
    Semicolon,

    // Reserved
    Func,
    Return,
    If,
    Else,
    For,
    Var,
    Const,
    Type,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Value of a literal token. Identifiers carry their name as `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Text(String),
    Int(BigInt),
    Decimal(BigDecimal),
}

impl Literal {
    /// Name of the concrete literal kind, rendered next to the value in
    /// s-expressions so `1` and `"1"` stay distinguishable.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Literal::Text(_) => "string",
            Literal::Int(_) => "int",
            Literal::Decimal(_) => "decimal",
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Text(text) => write!(f, "{:?}", text),
            Literal::Int(int) => write!(f, "{}", int),
            Literal::Decimal(decimal) => write!(f, "{}", decimal),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub literal: Option<Literal>,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn eof(position: Position) -> Self {
        Token {
            kind: TokenKind::EOF,
            value: String::from("EOF"),
            literal: None,
            span: Span {
                start: position,
                end: position,
            },
        }
    }

    /// Placeholder for the byte range a lexical error was reported at.
    pub fn illegal(position: Position) -> Self {
        Token {
            kind: TokenKind::Illegal,
            value: String::new(),
            literal: None,
            span: Span {
                start: position,
                end: position,
            },
        }
    }

    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn debug(&self) -> String {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::Imaginary,
        ]) {
            format!("{} ({})", self.kind, self.value)
        } else {
            format!("{} ()", self.kind)
        }
    }
}
