//! Lexical analysis module.
//!
//! This module turns source text into tokens for the parser:
//!
//! - Tokenization using an ordered table of regex patterns
//! - Literal values (text, arbitrary-precision integers and decimals)
//! - Byte offsets on every token for error reporting
//! - The `TokenSource` adapter the parser pulls tokens through

pub mod lexer;
pub mod source;
pub mod tokens;
