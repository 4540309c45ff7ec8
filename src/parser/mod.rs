//! Parser module for building expression trees.
//!
//! This module turns a stream of tokens into an `Expr`. Binary operators are
//! parsed by precedence climbing over a fixed table of levels; operands and
//! their suffixes go through the NUD (null denotation) and LED (left
//! denotation) handler tables registered in `lookups`. Nesting depth is
//! bounded only by the call stack.
//!
//! Errors are recorded on the parser rather than returned early, so one
//! parse reports every problem it finds.

pub mod expr;
pub mod lookups;
pub mod parser;
