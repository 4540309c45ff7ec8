/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to expression trees
///
/// Submodules:
/// - ast: the `Expr` enum, identifiers, ranges and the `Payload` trait
/// - expressions: the node structs carried by each `Expr` variant
/// - sexp: s-expression rendering used to compare tree shapes
pub mod ast;
pub mod expressions;
pub mod sexp;

#[cfg(test)]
mod tests;
