use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range of a lexeme in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier: `[A-Za-z][A-Za-z0-9]*`, or a single unrecognized character
    Var,
    Not,
    And,
    Or,
    Implies,
    Iff,
    Bottom,
    LParen,
    RParen,
    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Byte offset of the token's first character; input length for EOF.
    pub fn position(&self) -> usize {
        self.span.start
    }

    /// Human-readable form for diagnostics: the lexeme in quotes, or
    /// "end of input" for EOF.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "<eof>"),
            _ => write!(f, "{}", self.text),
        }
    }
}
