//! S-expression rendering of expression trees.
//!
//! The output is deterministic and total: absent payloads render as
//! `nil<kind>` sentinels and payloads that cannot render themselves as a
//! `bad<kind>:NAME` marker, so any tree left behind by error recovery can
//! still be printed and compared.

use super::{
    ast::{Expr, Payload, Range},
    expressions::{CompLiteral, FuncLiteral, TableIndexExpr, TableLiteral},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexpPrinter {
    literal_kinds: bool,
}

impl SexpPrinter {
    /// Basic literals render as `(lit KIND VALUE)`.
    pub fn canonical() -> Self {
        SexpPrinter { literal_kinds: true }
    }

    /// Basic literals render as their bare value.
    pub fn shape() -> Self {
        SexpPrinter {
            literal_kinds: false,
        }
    }

    pub fn print(&self, expr: &Expr) -> String {
        match expr {
            Expr::Binary(binary) => format!(
                "({} {} {})",
                binary.operator,
                self.print(&binary.left),
                self.print(&binary.right)
            ),
            Expr::Unary(unary) => format!("({} {})", unary.operator, self.print(&unary.expr)),
            Expr::Bad(bad) => format!("(bad {})", bad.error),
            Expr::Selector(selector) => {
                format!("(sel {} {})", self.print(&selector.left), selector.right.name)
            }
            Expr::BasicLiteral(literal) if self.literal_kinds => {
                format!("(lit {} {})", literal.value.kind_name(), literal.value)
            }
            Expr::BasicLiteral(literal) => literal.value.to_string(),
            Expr::FuncLiteral(func) => self.print_func(func),
            Expr::CompLiteral(comp) => self.print_comp(comp),
            Expr::TableLiteral(table) => self.print_table(table),
            Expr::Ident(ident) => ident.name.clone(),
            Expr::Call(call) => {
                format!("(call {} {})", self.print(&call.callee), self.print_list(&call.args))
            }
            Expr::TableIndex(index) => self.print_table_index(index),
        }
    }

    fn print_list(&self, exprs: &[Expr]) -> String {
        exprs
            .iter()
            .map(|expr| self.print(expr))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn print_func(&self, func: &FuncLiteral) -> String {
        let type_ = payload_sexp(func.type_.as_deref(), "type");
        let body = payload_sexp(func.body.as_deref(), "body");

        if func.is_method() {
            let pointer = if func.pointer_receiver { "*" } else { "" };
            format!(
                "(method ({}{}) {} {} {})",
                pointer, func.receiver_name, func.name, type_, body
            )
        } else {
            format!("(func {} {} {})", func.name, type_, body)
        }
    }

    fn print_comp(&self, comp: &CompLiteral) -> String {
        let mut parts = vec![String::from("comp"), payload_sexp(comp.type_.as_deref(), "type")];
        if !comp.names.is_empty() {
            parts.push(format!("({})", comp.names.join(" ")));
        }
        parts.extend(comp.elements.iter().map(|element| self.print(element)));

        format!("({})", parts.join(" "))
    }

    fn print_table(&self, table: &TableLiteral) -> String {
        let rows: String = table
            .rows
            .iter()
            .map(|row| format!(" ({})", self.print_list(row)))
            .collect();

        format!(
            "(table {} ({}){})",
            payload_sexp(table.type_.as_deref(), "type"),
            self.print_list(&table.col_names),
            rows
        )
    }

    fn print_table_index(&self, index: &TableIndexExpr) -> String {
        let mut names = index.col_names.join("|");
        if !names.is_empty() {
            names = format!(" \"{}\"", names);
        }

        format!(
            "(tableindex {}{} {} {})",
            self.print(&index.base),
            names,
            self.print_range(&index.cols),
            self.print_range(&index.rows)
        )
    }

    /// `(start:end exact)`, with each part present only when set; `()` for
    /// an empty range.
    pub fn print_range(&self, range: &Range) -> String {
        let mut rs = String::new();
        if range.has_interval() {
            if let Some(start) = &range.start {
                rs.push_str(&self.print(start));
            }
            rs.push(':');
            if let Some(end) = &range.end {
                rs.push_str(&self.print(end));
            }
        }

        if let Some(exact) = &range.exact {
            if !rs.is_empty() {
                rs.push(' ');
            }
            rs.push_str(&self.print(exact));
        }

        format!("({})", rs)
    }
}

fn payload_sexp(payload: Option<&dyn Payload>, role: &str) -> String {
    match payload {
        None => format!("nil{}", role),
        Some(payload) => payload
            .sexp()
            .unwrap_or_else(|| format!("bad{}:{}", role, payload.kind_name())),
    }
}
