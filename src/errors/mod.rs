//! Error types for lexing and parsing.
//!
//! Every error carries the byte offset of the token that triggered it.
//! The parser records grammar errors into an ordered list instead of
//! stopping, and reports them together as an `Errors` value.

pub mod errors;

#[cfg(test)]
mod tests;
