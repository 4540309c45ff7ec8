use crate::{
    errors::errors::Error,
    lexer::tokens::{Literal, TokenKind},
};

use super::ast::{Expr, Ident, Payload, Range};

// OPERATIONS

/// Binary Expression
/// Arithmetic, comparison and logical infix operations.
#[derive(Debug)]
pub struct BinaryExpr {
    pub operator: TokenKind,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

/// Unary Expression
///
/// Prefix `+`, `-`, `!`, `*` (dereference), `&` (address-of), and
/// `LeftParen` for a parenthesized sub-expression, so grouping survives
/// in the tree.
#[derive(Debug)]
pub struct UnaryExpr {
    pub operator: TokenKind,
    pub expr: Box<Expr>,
}

/// Bad Expression
/// Stands in for a construct that failed to parse.
#[derive(Debug)]
pub struct BadExpr {
    pub error: Error,
}

/// Selector Expression
/// `left.right`
#[derive(Debug)]
pub struct SelectorExpr {
    pub left: Box<Expr>,
    pub right: Ident,
}

/// Call Expression
#[derive(Debug)]
pub struct CallExpr {
    pub callee: Box<Expr>,
    pub args: Vec<Expr>,
}

/// Table Index Expression
///
/// Indexes a table by column names and/or column and row ranges.
#[derive(Debug)]
pub struct TableIndexExpr {
    pub base: Box<Expr>,
    pub col_names: Vec<String>,
    pub cols: Range,
    pub rows: Range,
}

// LITERALS

#[derive(Debug)]
pub struct BasicLiteral {
    pub value: Literal,
}

/// Function Literal
///
/// A non-empty `receiver_name` makes this a method. The signature and body
/// are supplied by the type and statement layers.
#[derive(Debug, Default)]
pub struct FuncLiteral {
    pub name: String,
    pub receiver_name: String,
    pub pointer_receiver: bool,
    pub type_: Option<Box<dyn Payload>>,
    pub param_names: Vec<String>,
    pub result_names: Vec<String>,
    pub body: Option<Box<dyn Payload>>,
}

impl FuncLiteral {
    pub fn is_method(&self) -> bool {
        !self.receiver_name.is_empty()
    }
}

/// Composite Literal
/// Struct, array and map literals.
#[derive(Debug, Default)]
pub struct CompLiteral {
    pub type_: Option<Box<dyn Payload>>,
    pub names: Vec<String>,
    pub elements: Vec<Expr>,
}

#[derive(Debug, Default)]
pub struct TableLiteral {
    pub type_: Option<Box<dyn Payload>>,
    pub col_names: Vec<Expr>,
    pub rows: Vec<Vec<Expr>>,
}
