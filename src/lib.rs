#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::ast::Expr;
pub use errors::errors::Errors;
pub use parser::parser::{parse_expression, parse_tokens};

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the line text and the column of `position`
/// within that line, or `None` if the position is outside the source.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // Errors at end of input point just past the last character.
    if source.is_empty() || source.ends_with('\n') {
        return Some((line_number, String::new(), 0));
    }
    let last_line = source.rsplit('\n').next().unwrap_or("");
    Some((line_number - 1, last_line.to_string(), last_line.len()))
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: MissingComma (missing ',' in arguments (got Int))
/// -> input
///   |
/// 1 | f(1 2)
///   | ----^
/// ```
pub fn display_error(error: &Error, source: &str, name: &str) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", name));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.offset()) else {
        out.push_str(&format!("   off {}\n", error.offset()));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{Error, ErrorImpl};
    use crate::lexer::tokens::TokenKind;
    use crate::Position;

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("1 +", 3).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "1 +");
        assert_eq!(line_pos, 3);

        assert!(super::get_line_at_position("1 +", 10).is_none());
    }

    #[test]
    fn test_display_error_points_at_offset() {
        let error = Error::new(
            ErrorImpl::MissingComma {
                context: "arguments".to_string(),
                found: TokenKind::Int,
            },
            Position(4),
        );

        let rendered = super::display_error(&error, "f(1 2)", "input");
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Error: MissingComma (missing ',' in arguments (got Int))");
        assert_eq!(lines[1], "-> input");
        assert_eq!(lines[3], "1 | f(1 2)");
        assert_eq!(lines[4], "  | ----^");
    }
}
