use bigdecimal::BigDecimal;
use lazy_static::lazy_static;
use log::trace;
use num_bigint::BigInt;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Literal, Token, TokenKind, RESERVED_LOOKUP};

/// Handles a pattern match at the lexer position. Returns `None` when the
/// matched text produces no token (whitespace).
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<Option<Token>, Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    // Tried in order; longer operators must precede their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?([eE][+-]?[0-9]+)?i?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^\\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^\"([^\"\\\\\\n]|\\\\.)*\"").unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new("^\"").unwrap(), handler: unterminated_string_handler },
        RegexPattern { regex: Regex::new("^//[^\\n]*").unwrap(), handler: comment_handler },
        RegexPattern { regex: Regex::new("(?s)^/\\*.*?\\*/").unwrap(), handler: comment_handler },
        RegexPattern { regex: Regex::new("^/\\*").unwrap(), handler: unterminated_comment_handler },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(") },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")") },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftBracket, "[") },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightBracket, "]") },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftBrace, "{") },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightBrace, "}") },
        RegexPattern { regex: Regex::new("^==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equal, "==") },
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEqual, "!=") },
        RegexPattern { regex: Regex::new("^!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, "=") },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEqual, "<=") },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEqual, ">=") },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new("^\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LogicalOr, "||") },
        RegexPattern { regex: Regex::new("^\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "|") },
        RegexPattern { regex: Regex::new("^&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LogicalAnd, "&&") },
        RegexPattern { regex: Regex::new("^&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ref, "&") },
        RegexPattern { regex: Regex::new("^\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Xor, "^") },
        RegexPattern { regex: Regex::new("^\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Period, ".") },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Add, "+") },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Sub, "-") },
        RegexPattern { regex: Regex::new("^\\*\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pow, "**") },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Mul, "*") },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Div, "/") },
        RegexPattern { regex: Regex::new("^%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Rem, "%") },
    ];
}

/// Pull-based scanner over source text. Each call to `next_token` yields
/// one token; whitespace is skipped, comments are returned as `Comment`.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer { source, pos: 0 }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position(self.pos)
    }

    /// Span of `len` bytes starting at the current position.
    pub fn span(&self, len: usize) -> Span {
        Span {
            start: Position(self.pos),
            end: Position(self.pos + len),
        }
    }

    /// Scans the next token. Once the source is drained this keeps
    /// returning `EOF`.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        while !self.at_eof() {
            let remainder = self.remainder();
            let found = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|matched| (pattern.handler, matched.as_str().to_string()))
            });

            let Some((handler, lexeme)) = found else {
                let position = self.position();
                let token = self.at().map(String::from).unwrap_or_default();
                self.advance_n(token.len().max(1));
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, position));
            };

            if let Some(token) = handler(self, &lexeme)? {
                trace!("lexed {} at {}", token.debug(), token.span.start.0);
                return Ok(token);
            }
        }

        Ok(MK_TOKEN!(TokenKind::EOF, String::from("EOF"), self.span(0)))
    }
}

fn skip_handler(lexer: &mut Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    lexer.advance_n(lexeme.len());
    Ok(None)
}

fn comment_handler(lexer: &mut Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    let token = MK_TOKEN!(TokenKind::Comment, lexeme.to_string(), lexer.span(lexeme.len()));
    lexer.advance_n(lexeme.len());
    Ok(Some(token))
}

fn unterminated_comment_handler(lexer: &mut Lexer, _lexeme: &str) -> Result<Option<Token>, Error> {
    let position = lexer.position();
    lexer.advance_n(lexer.remainder().len());
    Err(Error::new(ErrorImpl::UnterminatedComment, position))
}

fn number_handler(lexer: &mut Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    let position = lexer.position();
    let span = lexer.span(lexeme.len());
    lexer.advance_n(lexeme.len());

    let invalid = || {
        Error::new(
            ErrorImpl::NumberParseError {
                token: lexeme.to_string(),
            },
            position,
        )
    };

    let (kind, literal) = if let Some(coefficient) = lexeme.strip_suffix('i') {
        let value = coefficient.parse::<BigDecimal>().map_err(|_| invalid())?;
        (TokenKind::Imaginary, Literal::Decimal(value))
    } else if lexeme.bytes().all(|b| b.is_ascii_digit()) {
        let value = lexeme.parse::<BigInt>().map_err(|_| invalid())?;
        (TokenKind::Int, Literal::Int(value))
    } else {
        let value = lexeme.parse::<BigDecimal>().map_err(|_| invalid())?;
        (TokenKind::Float, Literal::Decimal(value))
    };

    Ok(Some(MK_TOKEN!(kind, lexeme.to_string(), Some(literal), span)))
}

fn string_handler(lexer: &mut Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(lexeme.len());
    lexer.advance_n(lexeme.len());

    let string_literal = &lexeme[1..lexeme.len() - 1];
    let mut result = String::new();
    let mut chars = string_literal.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('0') => result.push('\0'),
            // Unknown escapes keep the backslash.
            Some(other) => {
                result.push(ch);
                result.push(*other);
            }
            None => {
                result.push(ch);
                continue;
            }
        }
        chars.next();
    }

    Ok(Some(MK_TOKEN!(
        TokenKind::String,
        lexeme.to_string(),
        Some(Literal::Text(result)),
        span
    )))
}

fn unterminated_string_handler(lexer: &mut Lexer, _lexeme: &str) -> Result<Option<Token>, Error> {
    let position = lexer.position();
    let rest = lexer.remainder().find('\n').unwrap_or(lexer.remainder().len());
    lexer.advance_n(rest.max(1));
    Err(Error::new(ErrorImpl::UnterminatedString, position))
}

fn symbol_handler(lexer: &mut Lexer, lexeme: &str) -> Result<Option<Token>, Error> {
    let span = lexer.span(lexeme.len());
    lexer.advance_n(lexeme.len());

    if let Some(kind) = RESERVED_LOOKUP.get(lexeme) {
        return Ok(Some(MK_TOKEN!(*kind, lexeme.to_string(), span)));
    }

    Ok(Some(MK_TOKEN!(
        TokenKind::Identifier,
        lexeme.to_string(),
        Some(Literal::Text(lexeme.to_string())),
        span
    )))
}

/// Scans the whole source, including the trailing `EOF` token.
pub fn tokenize(source: String) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token()?;
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
