use std::fmt::{Debug, Display};

use crate::{errors::errors::Error, lexer::tokens::{Literal, TokenKind}};

use super::{
    expressions::{
        BadExpr, BasicLiteral, BinaryExpr, CallExpr, CompLiteral, FuncLiteral, SelectorExpr,
        TableIndexExpr, TableLiteral, UnaryExpr,
    },
    sexp::SexpPrinter,
};

/// Payload owned by a collaborator outside the expression parser, such as a
/// type annotation or an already-parsed function body.
///
/// Payloads that can render themselves return `Some` from `sexp`; the
/// others are rendered as a marker naming their kind.
pub trait Payload: Debug {
    fn kind_name(&self) -> &str;

    fn sexp(&self) -> Option<String> {
        None
    }
}

/// Expression Types
///
/// Discriminant of `Expr`, for logging and diagnostics.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Binary,
    Unary,
    Bad,
    Selector,
    BasicLiteral,
    FuncLiteral,
    CompLiteral,
    TableLiteral,
    Ident,
    Call,
    TableIndex,
}

/// A parsed expression.
///
/// Nodes are built once by the parser and never mutated; every node owns
/// its children.
#[derive(Debug)]
pub enum Expr {
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    Bad(BadExpr),
    Selector(SelectorExpr),
    BasicLiteral(BasicLiteral),
    FuncLiteral(FuncLiteral),
    CompLiteral(CompLiteral),
    TableLiteral(TableLiteral),
    Ident(Ident),
    Call(CallExpr),
    TableIndex(TableIndexExpr),
}

impl Expr {
    pub fn binary(operator: TokenKind, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(operator: TokenKind, expr: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            operator,
            expr: Box::new(expr),
        })
    }

    pub fn bad(error: Error) -> Self {
        Expr::Bad(BadExpr { error })
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(Ident::new(name))
    }

    pub fn literal(value: Literal) -> Self {
        Expr::BasicLiteral(BasicLiteral { value })
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(CallExpr {
            callee: Box::new(callee),
            args,
        })
    }

    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Binary(_) => ExprType::Binary,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Bad(_) => ExprType::Bad,
            Expr::Selector(_) => ExprType::Selector,
            Expr::BasicLiteral(_) => ExprType::BasicLiteral,
            Expr::FuncLiteral(_) => ExprType::FuncLiteral,
            Expr::CompLiteral(_) => ExprType::CompLiteral,
            Expr::TableLiteral(_) => ExprType::TableLiteral,
            Expr::Ident(_) => ExprType::Ident,
            Expr::Call(_) => ExprType::Call,
            Expr::TableIndex(_) => ExprType::TableIndex,
        }
    }

    pub fn is_bad(&self) -> bool {
        matches!(self, Expr::Bad(_))
    }

    /// True if this node or any node below it is a `Bad` placeholder.
    pub fn contains_bad(&self) -> bool {
        match self {
            Expr::Bad(_) => true,
            Expr::Binary(binary) => binary.left.contains_bad() || binary.right.contains_bad(),
            Expr::Unary(unary) => unary.expr.contains_bad(),
            Expr::Selector(selector) => selector.left.contains_bad(),
            Expr::BasicLiteral(_) | Expr::FuncLiteral(_) | Expr::Ident(_) => false,
            Expr::CompLiteral(comp) => comp.elements.iter().any(Expr::contains_bad),
            Expr::TableLiteral(table) => {
                table.col_names.iter().any(Expr::contains_bad)
                    || table.rows.iter().flatten().any(Expr::contains_bad)
            }
            Expr::Call(call) => call.callee.contains_bad() || call.args.iter().any(Expr::contains_bad),
            Expr::TableIndex(index) => {
                index.base.contains_bad() || index.cols.contains_bad() || index.rows.contains_bad()
            }
        }
    }

    /// Canonical s-expression; basic literals carry their kind.
    pub fn sexp(&self) -> String {
        SexpPrinter::canonical().print(self)
    }

    /// S-expression with basic literals printed as bare values.
    pub fn shape(&self) -> String {
        SexpPrinter::shape().print(self)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sexp())
    }
}

/// A bare name reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
}

impl Ident {
    pub fn new(name: impl Into<String>) -> Self {
        Ident { name: name.into() }
    }
}

/// A slice bound: a `start:end` interval with either side optional, a
/// single `exact` index, or both as written by the producer.
///
/// When both forms are present they are kept side by side and rendered as
/// given; `exact` names the selected element and the interval the window it
/// was taken from.
#[derive(Debug, Default)]
pub struct Range {
    pub start: Option<Box<Expr>>,
    pub end: Option<Box<Expr>>,
    pub exact: Option<Box<Expr>>,
}

impl Range {
    pub fn interval(start: Option<Expr>, end: Option<Expr>) -> Self {
        Range {
            start: start.map(Box::new),
            end: end.map(Box::new),
            exact: None,
        }
    }

    pub fn exact(index: Expr) -> Self {
        Range {
            start: None,
            end: None,
            exact: Some(Box::new(index)),
        }
    }

    pub fn has_interval(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_interval() && self.exact.is_none()
    }

    fn contains_bad(&self) -> bool {
        [&self.start, &self.end, &self.exact]
            .into_iter()
            .flatten()
            .any(|expr| expr.contains_bad())
    }
}
