//! Unit tests for expression trees and their s-expression rendering.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Literal, TokenKind},
    Position,
};

use super::{
    ast::{Expr, ExprType, Ident, Payload, Range},
    expressions::{CompLiteral, FuncLiteral, SelectorExpr, TableIndexExpr, TableLiteral},
    sexp::SexpPrinter,
};

#[derive(Debug)]
struct NamedType(&'static str);

impl Payload for NamedType {
    fn kind_name(&self) -> &str {
        "named"
    }

    fn sexp(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// A body that cannot render itself.
#[derive(Debug)]
struct OpaqueBlock;

impl Payload for OpaqueBlock {
    fn kind_name(&self) -> &str {
        "block"
    }
}

fn int(value: i64) -> Expr {
    Expr::literal(Literal::Int(BigInt::from(value)))
}

#[test]
fn test_binary_and_unary() {
    let expr = Expr::binary(
        TokenKind::Add,
        int(1),
        Expr::unary(TokenKind::Sub, Expr::ident("x")),
    );

    assert_eq!(expr.sexp(), "(Add (lit int 1) (Sub x))");
    assert_eq!(expr.shape(), "(Add 1 (Sub x))");
    assert_eq!(expr.to_string(), expr.sexp());
}

#[test]
fn test_literal_kinds_are_rendered() {
    let int = int(1);
    let text = Expr::literal(Literal::Text("1".to_string()));
    let decimal = Expr::literal(Literal::Decimal("1.5".parse::<BigDecimal>().unwrap()));

    assert_eq!(int.sexp(), "(lit int 1)");
    assert_eq!(text.sexp(), "(lit string \"1\")");
    assert_eq!(decimal.sexp(), "(lit decimal 1.5)");
    assert_ne!(int.sexp(), text.sexp());
}

#[test]
fn test_ident_renders_bare() {
    assert_eq!(Expr::ident("x").sexp(), "x");
}

#[test]
fn test_call_rendering() {
    let call = Expr::call(Expr::ident("f"), vec![int(1), Expr::ident("y")]);
    assert_eq!(call.shape(), "(call f 1 y)");

    let empty = Expr::call(Expr::ident("f"), vec![]);
    assert_eq!(empty.sexp(), "(call f )");
}

#[test]
fn test_bad_rendering() {
    let bad = Expr::bad(Error::new(ErrorImpl::ExpectedOperand { found: TokenKind::Comma }, Position(4)));

    assert!(bad.is_bad());
    assert_eq!(
        bad.sexp(),
        "(bad exprparse: parser: expected operand, found Comma (off 4))"
    );
}

#[test]
fn test_selector_rendering() {
    let selector = Expr::Selector(SelectorExpr {
        left: Box::new(Expr::ident("a")),
        right: Ident::new("b"),
    });

    assert_eq!(selector.sexp(), "(sel a b)");
}

#[test]
fn test_func_literal_rendering() {
    let func = Expr::FuncLiteral(FuncLiteral {
        name: "add".to_string(),
        type_: Some(Box::new(NamedType("(functype (int int) (int))"))),
        param_names: vec!["a".to_string(), "b".to_string()],
        result_names: vec![],
        body: Some(Box::new(NamedType("(block)"))),
        ..FuncLiteral::default()
    });

    assert_eq!(func.sexp(), "(func add (functype (int int) (int)) (block))");
}

#[test]
fn test_method_literal_rendering() {
    let method = FuncLiteral {
        name: "Len".to_string(),
        receiver_name: "s".to_string(),
        pointer_receiver: true,
        ..FuncLiteral::default()
    };
    assert!(method.is_method());
    assert_eq!(Expr::FuncLiteral(method).sexp(), "(method (*s) Len niltype nilbody)");

    let value_receiver = FuncLiteral {
        name: "Len".to_string(),
        receiver_name: "s".to_string(),
        type_: Some(Box::new(NamedType("t"))),
        body: Some(Box::new(OpaqueBlock)),
        ..FuncLiteral::default()
    };
    assert_eq!(
        Expr::FuncLiteral(value_receiver).sexp(),
        "(method (s) Len t badbody:block)"
    );
}

#[test]
fn test_comp_literal_rendering() {
    let without_names = Expr::CompLiteral(CompLiteral {
        type_: Some(Box::new(NamedType("[]int"))),
        names: vec![],
        elements: vec![int(1), int(2)],
    });
    assert_eq!(without_names.shape(), "(comp []int 1 2)");

    let with_names = Expr::CompLiteral(CompLiteral {
        type_: Some(Box::new(NamedType("Point"))),
        names: vec!["x".to_string(), "y".to_string()],
        elements: vec![int(1), int(2)],
    });
    assert_eq!(with_names.shape(), "(comp Point (x y) 1 2)");

    let untyped = Expr::CompLiteral(CompLiteral::default());
    assert_eq!(untyped.sexp(), "(comp niltype)");
}

#[test]
fn test_table_literal_rendering() {
    let table = Expr::TableLiteral(TableLiteral {
        type_: Some(Box::new(NamedType("table[int]"))),
        col_names: vec![
            Expr::literal(Literal::Text("a".to_string())),
            Expr::literal(Literal::Text("b".to_string())),
        ],
        rows: vec![vec![int(1), int(2)], vec![int(3), int(4)]],
    });

    assert_eq!(table.shape(), "(table table[int] (\"a\" \"b\") (1 2) (3 4))");
}

#[test]
fn test_range_rendering() {
    let printer = SexpPrinter::shape();

    assert_eq!(printer.print_range(&Range::default()), "()");
    assert_eq!(printer.print_range(&Range::interval(Some(int(1)), Some(int(3)))), "(1:3)");
    assert_eq!(printer.print_range(&Range::interval(None, Some(int(3)))), "(:3)");
    assert_eq!(printer.print_range(&Range::interval(Some(int(1)), None)), "(1:)");
    assert_eq!(printer.print_range(&Range::exact(int(2))), "(2)");

    let both = Range {
        exact: Some(Box::new(int(2))),
        ..Range::interval(Some(int(1)), Some(int(3)))
    };
    assert_eq!(printer.print_range(&both), "(1:3 2)");
    assert!(Range::default().is_empty());
}

#[test]
fn test_table_index_rendering() {
    let index = Expr::TableIndex(TableIndexExpr {
        base: Box::new(Expr::ident("t")),
        col_names: vec!["col1".to_string(), "col2".to_string()],
        cols: Range::default(),
        rows: Range::interval(Some(int(0)), Some(int(10))),
    });
    assert_eq!(index.shape(), "(tableindex t \"col1|col2\" () (0:10))");

    let unnamed = Expr::TableIndex(TableIndexExpr {
        base: Box::new(Expr::ident("t")),
        col_names: vec![],
        cols: Range::exact(int(1)),
        rows: Range::default(),
    });
    assert_eq!(unnamed.shape(), "(tableindex t (1) ())");
}

#[test]
fn test_nil_payloads() {
    let func = Expr::FuncLiteral(FuncLiteral {
        name: "f".to_string(),
        ..FuncLiteral::default()
    });
    assert_eq!(func.sexp(), "(func f niltype nilbody)");

    let table = Expr::TableLiteral(TableLiteral {
        type_: Some(Box::new(OpaqueBlock)),
        ..TableLiteral::default()
    });
    assert_eq!(table.sexp(), "(table badtype:block ())");
}

#[test]
fn test_rendering_is_deterministic() {
    let expr = Expr::call(
        Expr::ident("f"),
        vec![Expr::binary(TokenKind::Mul, int(2), int(3))],
    );

    assert_eq!(expr.sexp(), expr.sexp());
    assert_eq!(expr.shape(), expr.shape());
}

#[test]
fn test_contains_bad() {
    let bad = || Expr::bad(Error::new(ErrorImpl::EndOfInput, Position(0)));

    assert!(!Expr::binary(TokenKind::Add, int(1), int(2)).contains_bad());
    assert!(Expr::call(Expr::ident("f"), vec![int(1), bad()]).contains_bad());
    assert!(Expr::unary(TokenKind::LeftParen, Expr::binary(TokenKind::Add, int(1), bad())).contains_bad());

    let index = Expr::TableIndex(TableIndexExpr {
        base: Box::new(Expr::ident("t")),
        col_names: vec![],
        cols: Range::default(),
        rows: Range::exact(bad()),
    });
    assert!(index.contains_bad());
}

#[test]
fn test_expr_type() {
    assert_eq!(Expr::ident("x").get_expr_type(), ExprType::Ident);
    assert_eq!(int(1).get_expr_type(), ExprType::BasicLiteral);
    assert_eq!(
        Expr::call(Expr::ident("f"), vec![]).get_expr_type(),
        ExprType::Call
    );
}
